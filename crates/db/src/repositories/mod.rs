//! Repository abstractions for data access.

mod sale;
mod session;
mod user;

pub use sale::SaleRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
