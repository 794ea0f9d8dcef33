use serde::Deserialize;
use thiserror::Error;

/// A business rule broken by a submitted basket line.
///
/// Unlike payment validation, basket checking stops at the first broken
/// rule, so a rejection always carries exactly one of these messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BasketRuleViolation {
    /// The referenced payment does not exist.
    #[error("Indeks zakupu nie istnieje")]
    UnknownPayment,
    /// The referenced product is not in the catalog.
    #[error("Indeks produktu nie istnieje")]
    UnknownProduct,
    /// The quantity is below one.
    #[error("Nie da się kupić mniej niż 1 produktu danego typu")]
    QuantityBelowOne,
}

/// JSON payload submitted when recording a basket line.
///
/// Missing fields bind to zero, which the checks then reject: a zero
/// `PAYID` never resolves to a stored payment.
#[derive(Debug, Default, Deserialize)]
pub struct AddBasketLineForm {
    /// Identifier of a previously recorded payment.
    #[serde(default, rename = "PAYID")]
    pub payment_id: i32,
    /// Identifier of the purchased catalog product.
    #[serde(default, rename = "GAMEID")]
    pub product_id: i32,
    /// Number of units purchased.
    #[serde(default, rename = "QUANTITY")]
    pub quantity: i32,
}
