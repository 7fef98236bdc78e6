//! Sale record and payment method types.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder shown when a sale has no customer document number.
pub const GENERAL_PUBLIC: &str = "P. General";

/// Accepted payment methods.
///
/// The closed set is enforced server-side; a sale can only be recorded
/// with one of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash payment.
    #[serde(rename = "EFECTIVO")]
    Cash,
    /// Digital wallet payment (Yape).
    #[serde(rename = "YAPE")]
    Wallet,
}

impl PaymentMethod {
    /// Returns the wire/storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "EFECTIVO",
            Self::Wallet => "YAPE",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = SaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EFECTIVO" => Ok(Self::Cash),
            "YAPE" => Ok(Self::Wallet),
            other => Err(SaleError::UnknownPaymentMethod(other.to_string())),
        }
    }
}

/// Errors raised while validating sale input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SaleError {
    /// The total could not be parsed as a number.
    #[error("total is not a valid number: {0}")]
    InvalidTotal(String),

    /// The payment method is outside the accepted set.
    #[error("unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// The item detail is required.
    #[error("item detail must not be empty")]
    EmptyDetail,
}

/// A persisted sale, as read back from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Server-assigned identifier, monotonically increasing.
    pub id: i32,
    /// Instant the sale was recorded (server-local time).
    pub recorded_at: NaiveDateTime,
    /// Username of the seller, copied from the session.
    pub seller: String,
    /// Branch of the seller, copied from the session.
    pub branch: String,
    /// Optional customer document number (DNI).
    pub customer_id: Option<String>,
    /// Free-text item detail.
    pub detail: String,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Sale total.
    pub total: Decimal,
}

impl SaleRecord {
    /// Customer label for reports, falling back to [`GENERAL_PUBLIC`].
    #[must_use]
    pub fn customer_label(&self) -> &str {
        self.customer_id.as_deref().unwrap_or(GENERAL_PUBLIC)
    }
}
