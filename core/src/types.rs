//! Form state and wire DTOs for the order API.
//!
//! # Design
//! `FormValues` mirrors the rendered controls directly: `size` holds the
//! raw select value (`""` until the user picks one), `toppings` is an
//! insertion-ordered list of catalog ids. Wire DTOs mirror the server's
//! schema but are defined independently from the mock-server crate;
//! integration tests catch any drift between the two.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current values of every form control.
///
/// Created with empty defaults at mount, mutated on every input change,
/// and reset to defaults after a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    /// Raw select value: `""` or one of `"S"`, `"M"`, `"L"`.
    pub size: String,
    /// Checked topping ids in the order they were checked. Never holds
    /// duplicates; `OrderForm::set_topping` enforces that.
    pub toppings: Vec<String>,
}

/// Per-field inline error messages. An empty string means no error.
///
/// Only the validated fields have slots here; toppings carry no rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: String,
    pub size: String,
}

/// Result banner state after a submission attempt.
///
/// Exactly one variant at a time, replaced wholesale on each attempt: a
/// success clears any prior failure and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    #[default]
    None,
    Success(String),
    Failure(String),
}

/// POST body for the order endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub size: String,
    pub toppings: Vec<String>,
}

/// 2xx response body. The wire contract only promises `message`; servers
/// that assign the order an id include it, so `id` must stay optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub message: String,
}

/// Non-2xx response body: the server refused the order and said why.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRejection {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_request_uses_camel_case_name_key() {
        let req = OrderRequest {
            full_name: "Alice Smith".to_string(),
            size: "S".to_string(),
            toppings: vec!["1".to_string(), "3".to_string()],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["fullName"], "Alice Smith");
        assert_eq!(json["size"], "S");
        assert_eq!(json["toppings"], serde_json::json!(["1", "3"]));
        assert!(json.get("full_name").is_none());
    }

    #[test]
    fn order_receipt_roundtrips_through_json() {
        let receipt = OrderReceipt {
            id: Some(Uuid::new_v4()),
            message: "Order placed".to_string(),
        };
        let json = serde_json::to_string(&receipt).unwrap();
        let back: OrderReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, receipt);
    }

    #[test]
    fn order_receipt_parses_without_an_id() {
        let receipt: OrderReceipt = serde_json::from_str(r#"{"message":"Order placed"}"#).unwrap();
        assert_eq!(receipt.id, None);
        assert_eq!(receipt.message, "Order placed");
    }

    #[test]
    fn form_values_default_to_empty() {
        let values = FormValues::default();
        assert!(values.full_name.is_empty());
        assert!(values.size.is_empty());
        assert!(values.toppings.is_empty());
    }

    #[test]
    fn outcome_defaults_to_none() {
        assert_eq!(SubmissionOutcome::default(), SubmissionOutcome::None);
    }
}
