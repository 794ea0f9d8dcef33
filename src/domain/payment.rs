use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payment methods accepted by the storefront.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    #[serde(rename = "CARD")]
    Card,
    #[serde(rename = "BANKTRANSFER")]
    BankTransfer,
    #[serde(rename = "PAYPAL")]
    Paypal,
}

/// Error returned when a payment method string is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown payment method `{0}`")]
pub struct UnknownPaymentMethod(pub String);

impl PaymentMethod {
    /// Wire and storage spelling of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "CARD",
            Self::BankTransfer => "BANKTRANSFER",
            Self::Paypal => "PAYPAL",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    /// Strict, case-sensitive parse used when validating submissions.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "CARD" => Ok(Self::Card),
            "BANKTRANSFER" => Ok(Self::BankTransfer),
            "PAYPAL" => Ok(Self::Paypal),
            other => Err(UnknownPaymentMethod(other.to_string())),
        }
    }
}

impl From<&str> for PaymentMethod {
    /// Lenient conversion for values read back from storage. Rows are only
    /// written through the validated form path; anything else maps to `Card`.
    fn from(value: &str) -> Self {
        value.parse().unwrap_or(Self::Card)
    }
}

/// Domain representation of a recorded payment.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Payment {
    /// Unique identifier of the payment.
    pub id: i32,
    /// Name of the user who submitted the payment.
    pub user: String,
    /// Payment method chosen by the user.
    pub method: PaymentMethod,
    /// Paid amount in the smallest currency unit.
    pub amount_cents: i64,
    /// Timestamp for when the payment record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the payment record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new payment.
#[derive(Debug, Clone)]
pub struct NewPayment {
    /// Name of the user who submitted the payment.
    pub user: String,
    /// Payment method chosen by the user.
    pub method: PaymentMethod,
    /// Paid amount in the smallest currency unit.
    pub amount_cents: i64,
}

impl NewPayment {
    /// Build a new payment payload with the supplied details.
    pub fn new(user: impl Into<String>, method: PaymentMethod, amount_cents: i64) -> Self {
        Self {
            user: user.into(),
            method,
            amount_cents,
        }
    }
}
