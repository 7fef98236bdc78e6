//! Validation of caller-supplied sale input.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use super::types::{PaymentMethod, SaleError};

/// Raw sale payload as received from the client.
///
/// `total` is number-like: a JSON number or a numeric string are both
/// accepted, anything else is a validation failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleDraft {
    /// Optional customer document number.
    #[serde(default)]
    pub dni: Option<String>,
    /// Free-text item detail.
    pub detalle: String,
    /// Payment method, one of `EFECTIVO` or `YAPE`.
    pub metodo_pago: String,
    /// Number-like total.
    pub total: Value,
}

/// A sale payload that passed boundary validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSale {
    /// Optional customer document number.
    pub customer_id: Option<String>,
    /// Item detail.
    pub detail: String,
    /// Validated payment method.
    pub payment_method: PaymentMethod,
    /// Parsed total.
    pub total: Decimal,
}

impl SaleDraft {
    /// Validates the draft into a [`ValidatedSale`].
    ///
    /// # Errors
    ///
    /// Returns a [`SaleError`] when the detail is empty, the payment method
    /// is outside the accepted set, or the total is not number-like.
    pub fn validate(self) -> Result<ValidatedSale, SaleError> {
        let detail = self.detalle.trim().to_string();
        if detail.is_empty() {
            return Err(SaleError::EmptyDetail);
        }

        let payment_method = self.metodo_pago.parse::<PaymentMethod>()?;
        let total = parse_total(&self.total)?;

        let customer_id = self
            .dni
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(ValidatedSale {
            customer_id,
            detail,
            payment_method,
            total,
        })
    }
}

/// Parses a number-like JSON value into a `Decimal`.
///
/// Accepts JSON numbers (including scientific notation) and numeric
/// strings with surrounding whitespace.
///
/// # Errors
///
/// Returns `SaleError::InvalidTotal` for anything else.
pub fn parse_total(raw: &Value) -> Result<Decimal, SaleError> {
    let text = match raw {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => return Err(SaleError::InvalidTotal(other.to_string())),
    };

    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| SaleError::InvalidTotal(text))
}
