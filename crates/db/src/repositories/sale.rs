//! Sale repository for the append-only sales ledger.

use chrono::{Days, Local, NaiveDate};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use memocont_core::auth::Identity;
use memocont_core::sales::{SaleRecord, ValidatedSale};

use crate::entities::sales;

/// Sale repository. Inserts and reads only; the ledger is never updated
/// or deleted through the application.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    db: DatabaseConnection,
}

impl SaleRepository {
    /// Creates a new sale repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a validated sale attributed to `identity`.
    ///
    /// The id is server-assigned and the timestamp is the operation time
    /// (server-local). The single-row insert is atomic; on failure no
    /// partial row is observable.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        identity: &Identity,
        sale: ValidatedSale,
    ) -> Result<sales::Model, DbErr> {
        let row = sales::ActiveModel {
            recorded_at: Set(Local::now().naive_local()),
            seller: Set(identity.username.clone()),
            branch: Set(identity.branch.clone()),
            customer_id: Set(sale.customer_id),
            detail: Set(sale.detail),
            payment_method: Set(sale.payment_method.as_str().to_string()),
            total: Set(sale.total),
            ..Default::default()
        };

        row.insert(&self.db).await
    }

    /// Returns the whole ledger, ordered by id ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a stored row does
    /// not convert.
    pub async fn list_all(&self) -> Result<Vec<SaleRecord>, DbErr> {
        let models = sales::Entity::find()
            .order_by_asc(sales::Column::Id)
            .all(&self.db)
            .await?;

        models.into_iter().map(record_from).collect()
    }

    /// Returns the sales whose calendar date (server-local) equals `date`,
    /// ordered by id ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a stored row does
    /// not convert.
    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<SaleRecord>, DbErr> {
        let start = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
            DbErr::Custom(format!("invalid report date: {date}"))
        })?;
        let end = date
            .checked_add_days(Days::new(1))
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| DbErr::Custom(format!("report date out of range: {date}")))?;

        let models = sales::Entity::find()
            .filter(sales::Column::RecordedAt.gte(start))
            .filter(sales::Column::RecordedAt.lt(end))
            .order_by_asc(sales::Column::Id)
            .all(&self.db)
            .await?;

        models.into_iter().map(record_from).collect()
    }
}

/// Converts a stored row into the domain record.
///
/// The payment method column is constrained by the schema, so a parse
/// failure here means the store was tampered with outside the app.
fn record_from(model: sales::Model) -> Result<SaleRecord, DbErr> {
    let payment_method = model
        .payment_method
        .parse()
        .map_err(|e| DbErr::Type(format!("sale {}: {e}", model.id)))?;

    Ok(SaleRecord {
        id: model.id,
        recorded_at: model.recorded_at,
        seller: model.seller,
        branch: model.branch,
        customer_id: model.customer_id,
        detail: model.detail,
        payment_method,
        total: model.total,
    })
}
