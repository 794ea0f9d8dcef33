use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::payment::NewPayment;

/// Result type returned by the payment form helpers.
pub type PaymentFormResult<T> = Result<T, PaymentFormError>;

/// A single business rule broken by a submitted payment.
///
/// The `Display` strings are the exact client-facing messages, including
/// their trailing spaces: the storefront concatenates them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaymentRuleViolation {
    /// The user name is empty.
    #[error("Nazwa użytkownika jest pusta. ")]
    EmptyUser,
    /// The payment method is not one of the accepted spellings.
    #[error("Nieobsługiwana metoda płatności. ")]
    UnsupportedMethod,
    /// The amount is zero or negative.
    #[error("Opłata mniejsza niż zero")]
    NonPositiveAmount,
    /// The amount carries more than two significant fractional digits.
    #[error("Opłata nie jest w odpowiednim formacie - zawiera więcej niż dwie istotne cyfry w formacie dziesiętnym")]
    MalformedAmount,
}

/// Errors that can occur while processing a payment submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentFormError {
    /// One or more business rules were violated.
    #[error("{}", format_violations(.0))]
    Rejected(Vec<PaymentRuleViolation>),
}

fn format_violations(violations: &[PaymentRuleViolation]) -> String {
    violations.iter().map(ToString::to_string).collect()
}

/// JSON payload submitted when recording a payment.
///
/// Missing fields bind to their zero values and are reported by validation
/// rather than rejected at the binder.
#[derive(Debug, Default, Deserialize)]
pub struct AddPaymentForm {
    /// Name of the paying user.
    #[serde(default, rename = "USER")]
    pub user: String,
    /// Payment method, expected to be one of `CARD`, `BANKTRANSFER`, `PAYPAL`.
    #[serde(default, rename = "METHOD")]
    pub method: String,
    /// Paid amount.
    #[serde(default, rename = "AMOUNT")]
    pub amount: Decimal,
}

impl AddPaymentForm {
    /// Validates the submission and converts it into a domain `NewPayment`.
    ///
    /// Every rule is checked unconditionally so the caller sees all
    /// violations at once, in checking order.
    pub fn into_new_payment(self) -> PaymentFormResult<NewPayment> {
        let mut violations = Vec::new();

        if self.user.is_empty() {
            violations.push(PaymentRuleViolation::EmptyUser);
        }

        let method = self.method.parse().ok();
        if method.is_none() {
            violations.push(PaymentRuleViolation::UnsupportedMethod);
        }

        if self.amount <= Decimal::ZERO {
            violations.push(PaymentRuleViolation::NonPositiveAmount);
        }

        let amount_cents = amount_in_cents(self.amount);
        if amount_cents.is_none() {
            violations.push(PaymentRuleViolation::MalformedAmount);
        }

        match (method, amount_cents) {
            (Some(method), Some(amount_cents)) if violations.is_empty() => {
                Ok(NewPayment::new(self.user, method, amount_cents))
            }
            _ => Err(PaymentFormError::Rejected(violations)),
        }
    }
}

/// Converts an amount to cents, provided it carries at most two significant
/// fractional digits and fits the cent range.
fn amount_in_cents(amount: Decimal) -> Option<i64> {
    if amount.round_dp(2) != amount {
        return None;
    }
    (amount * Decimal::ONE_HUNDRED).to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentMethod;

    fn form(user: &str, method: &str, amount: Decimal) -> AddPaymentForm {
        AddPaymentForm {
            user: user.to_string(),
            method: method.to_string(),
            amount,
        }
    }

    fn dec(value: &str) -> Decimal {
        value.parse().expect("decimal literal")
    }

    #[test]
    fn valid_submission_converts_to_cents() {
        let payment = form("alice", "CARD", dec("10.00"))
            .into_new_payment()
            .expect("expected a valid payment");

        assert_eq!(payment.user, "alice");
        assert_eq!(payment.method, PaymentMethod::Card);
        assert_eq!(payment.amount_cents, 1000);
    }

    #[test]
    fn whole_and_single_digit_amounts_pass_the_format_check() {
        for (amount, cents) in [(dec("5"), 500), (dec("5.5"), 550), (dec("3.22"), 322)] {
            let payment = form("alice", "PAYPAL", amount)
                .into_new_payment()
                .expect("expected a valid payment");
            assert_eq!(payment.amount_cents, cents);
        }
    }

    #[test]
    fn empty_user_is_rejected_regardless_of_other_fields() {
        let err = form("", "CARD", dec("10.00"))
            .into_new_payment()
            .expect_err("expected rejection");

        assert_eq!(
            err,
            PaymentFormError::Rejected(vec![PaymentRuleViolation::EmptyUser])
        );
        assert_eq!(err.to_string(), "Nazwa użytkownika jest pusta. ");
    }

    #[test]
    fn method_match_is_case_sensitive() {
        let err = form("alice", "card", dec("10.00"))
            .into_new_payment()
            .expect_err("expected rejection");

        assert_eq!(
            err,
            PaymentFormError::Rejected(vec![PaymentRuleViolation::UnsupportedMethod])
        );
    }

    #[test]
    fn three_fractional_digits_fail_the_format_check() {
        let err = form("alice", "CARD", dec("3.222"))
            .into_new_payment()
            .expect_err("expected rejection");

        assert_eq!(
            err,
            PaymentFormError::Rejected(vec![PaymentRuleViolation::MalformedAmount])
        );
    }

    #[test]
    fn zero_amount_is_rejected() {
        let err = form("alice", "BANKTRANSFER", Decimal::ZERO)
            .into_new_payment()
            .expect_err("expected rejection");

        assert_eq!(
            err,
            PaymentFormError::Rejected(vec![PaymentRuleViolation::NonPositiveAmount])
        );
    }

    #[test]
    fn violations_accumulate_in_checking_order() {
        let err = form("", "", dec("-3.222"))
            .into_new_payment()
            .expect_err("expected rejection");

        assert_eq!(
            err,
            PaymentFormError::Rejected(vec![
                PaymentRuleViolation::EmptyUser,
                PaymentRuleViolation::UnsupportedMethod,
                PaymentRuleViolation::NonPositiveAmount,
                PaymentRuleViolation::MalformedAmount,
            ])
        );
        assert_eq!(
            err.to_string(),
            "Nazwa użytkownika jest pusta. Nieobsługiwana metoda płatności. \
             Opłata mniejsza niż zeroOpłata nie jest w odpowiednim formacie - \
             zawiera więcej niż dwie istotne cyfry w formacie dziesiętnym"
        );
    }

    #[test]
    fn missing_fields_bind_to_zero_values() {
        let bound: AddPaymentForm = serde_json::from_str("{}").expect("empty object binds");
        let err = bound.into_new_payment().expect_err("expected rejection");

        assert_eq!(
            err,
            PaymentFormError::Rejected(vec![
                PaymentRuleViolation::EmptyUser,
                PaymentRuleViolation::UnsupportedMethod,
                PaymentRuleViolation::NonPositiveAmount,
            ])
        );
    }
}
