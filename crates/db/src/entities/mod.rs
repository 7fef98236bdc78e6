//! `SeaORM` entity definitions.

pub mod sales;
pub mod sessions;
pub mod users;
