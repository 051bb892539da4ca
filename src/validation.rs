//! Boundary checks for submitted forms.
//!
//! Invoice submissions are coerced field by field (the amount arrives as text)
//! and then range-checked with `validator`; every failing field is reported at
//! once so the form can show all of its messages together.

use validator::Validate;

use crate::models::{FieldErrors, InvoiceForm, InvoiceInput, InvoiceStatus, LoginForm};

pub const CUSTOMER_REQUIRED: &str = "Please select a customer.";
pub const AMOUNT_NOT_POSITIVE: &str = "Please enter an amount greater than $0.";
pub const AMOUNT_NOT_A_NUMBER: &str = "Expected number, received nan";
pub const AMOUNT_TOO_LARGE: &str = "Please enter a smaller amount.";
pub const STATUS_REQUIRED: &str = "Please select an invoice status.";

#[derive(Validate)]
struct CoercedInvoice {
    #[validate(length(min = 1, message = "Please select a customer."))]
    customer_id: String,
    #[validate(range(exclusive_min = 0.0, message = "Please enter an amount greater than $0."))]
    amount: f64,
}

/// Narrow a raw invoice submission into a typed record.
pub fn validate_invoice(form: &InvoiceForm) -> Result<InvoiceInput, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_id = form.customer_id.as_deref().map(str::trim).unwrap_or("");

    // A missing or blank amount coerces to zero and fails the range check.
    let raw_amount = form.amount.as_deref().map(str::trim).unwrap_or("");
    let amount = if raw_amount.is_empty() {
        Some(0.0)
    } else {
        raw_amount.parse::<f64>().ok().filter(|a| a.is_finite())
    };
    if amount.is_none() {
        errors.add("amount", AMOUNT_NOT_A_NUMBER);
    }

    let coerced = CoercedInvoice {
        customer_id: customer_id.to_string(),
        amount: amount.unwrap_or_default(),
    };
    if let Err(failures) = coerced.validate() {
        for (field, field_errors) in failures.field_errors() {
            let field: &str = field.as_ref();
            let name = match field {
                "customer_id" => "customerId",
                other => other,
            };
            if name == "amount" && amount.is_none() {
                continue;
            }
            for error in field_errors.iter() {
                match error.message.as_deref() {
                    Some(message) => errors.add(name, message),
                    None => errors.add(name, error.code.to_string()),
                }
            }
        }
    }

    let status = match form.status.as_deref().map(str::trim) {
        None | Some("") => {
            errors.add("status", STATUS_REQUIRED);
            None
        }
        Some(raw) => match raw.parse::<InvoiceStatus>() {
            Ok(status) => Some(status),
            Err(received) => {
                errors.add(
                    "status",
                    format!(
                        "Invalid enum value. Expected 'pending' | 'paid', received '{}'",
                        received
                    ),
                );
                None
            }
        },
    };

    let amount_cents = match amount {
        Some(amount) if !errors.contains("amount") => match to_cents(amount) {
            Ok(cents) => Some(cents),
            Err(message) => {
                errors.add("amount", message);
                None
            }
        },
        _ => None,
    };

    match (amount_cents, status) {
        (Some(amount_cents), Some(status)) if errors.is_empty() => Ok(InvoiceInput {
            customer_id: coerced.customer_id,
            amount_cents,
            status,
        }),
        _ => Err(errors),
    }
}

// Rounded to the nearest cent; a positive amount must stay positive after rounding.
fn to_cents(amount: f64) -> Result<i64, &'static str> {
    let cents = (amount * 100.0).round();
    if cents < 1.0 {
        Err(AMOUNT_NOT_POSITIVE)
    } else if cents >= i64::MAX as f64 {
        Err(AMOUNT_TOO_LARGE)
    } else {
        Ok(cents as i64)
    }
}

/// Shape check run before any lookup; a failure is a plain rejection.
pub fn credentials_are_well_formed(form: &LoginForm) -> bool {
    form.validate().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(customer_id: Option<&str>, amount: Option<&str>, status: Option<&str>) -> InvoiceForm {
        InvoiceForm {
            customer_id: customer_id.map(String::from),
            amount: amount.map(String::from),
            status: status.map(String::from),
        }
    }

    #[test]
    fn accepts_a_complete_submission() {
        let input = validate_invoice(&form(Some("c1"), Some("50"), Some("pending"))).unwrap();
        assert_eq!(input.customer_id, "c1");
        assert_eq!(input.amount_cents, 5000);
        assert_eq!(input.status, InvoiceStatus::Pending);
    }

    #[test]
    fn rounds_fractional_amounts_to_cents() {
        let input = validate_invoice(&form(Some("c1"), Some(" 19.99 "), Some("paid"))).unwrap();
        assert_eq!(input.amount_cents, 1999);
        assert_eq!(input.status, InvoiceStatus::Paid);
    }

    #[test]
    fn rejects_non_positive_amounts() {
        for amount in ["0", "-1", "-0.5", "", "0.001"] {
            let errors = validate_invoice(&form(Some("c1"), Some(amount), Some("paid"))).unwrap_err();
            assert_eq!(
                errors.get("amount"),
                Some(&[AMOUNT_NOT_POSITIVE.to_string()][..]),
                "amount {:?}",
                amount
            );
            assert!(!errors.contains("customerId"));
            assert!(!errors.contains("status"));
        }
    }

    #[test]
    fn missing_amount_counts_as_zero() {
        let errors = validate_invoice(&form(Some("c1"), None, Some("paid"))).unwrap_err();
        assert_eq!(errors.get("amount"), Some(&[AMOUNT_NOT_POSITIVE.to_string()][..]));
    }

    #[test]
    fn rejects_amounts_that_are_not_numbers() {
        for amount in ["abc", "NaN", "inf", "12,50"] {
            let errors = validate_invoice(&form(Some("c1"), Some(amount), Some("paid"))).unwrap_err();
            assert_eq!(errors.get("amount"), Some(&[AMOUNT_NOT_A_NUMBER.to_string()][..]));
        }
    }

    #[test]
    fn rejects_unknown_status_values() {
        for status in ["overdue", "PAID", "Pending", "draft"] {
            let errors = validate_invoice(&form(Some("c1"), Some("10"), Some(status))).unwrap_err();
            let messages = errors.get("status").unwrap();
            assert_eq!(messages.len(), 1);
            assert!(messages[0].contains(status));
        }
    }

    #[test]
    fn reports_every_failing_field() {
        let errors = validate_invoice(&InvoiceForm::default()).unwrap_err();
        assert_eq!(errors.get("customerId"), Some(&[CUSTOMER_REQUIRED.to_string()][..]));
        assert_eq!(errors.get("amount"), Some(&[AMOUNT_NOT_POSITIVE.to_string()][..]));
        assert_eq!(errors.get("status"), Some(&[STATUS_REQUIRED.to_string()][..]));
    }

    #[test]
    fn blank_customer_is_missing() {
        let errors = validate_invoice(&form(Some("   "), Some("10"), Some("paid"))).unwrap_err();
        assert_eq!(errors.get("customerId"), Some(&[CUSTOMER_REQUIRED.to_string()][..]));
    }

    #[test]
    fn rejects_amounts_beyond_storable_range() {
        let errors = validate_invoice(&form(Some("c1"), Some("1e300"), Some("paid"))).unwrap_err();
        assert_eq!(errors.get("amount"), Some(&[AMOUNT_TOO_LARGE.to_string()][..]));
    }

    #[test]
    fn credentials_need_an_email_and_six_characters() {
        let login = |email: &str, password: &str| LoginForm {
            email: email.into(),
            password: password.into(),
        };
        assert!(credentials_are_well_formed(&login("user@nextmail.com", "123456")));
        assert!(!credentials_are_well_formed(&login("not-an-email", "123456")));
        assert!(!credentials_are_well_formed(&login("user@nextmail.com", "12345")));
    }
}
