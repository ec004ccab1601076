//! The form state store and its transition rules.
//!
//! # Design
//! `OrderForm` is the single mutable state of the page: field values,
//! inline errors, the submit-enabled flag, and the last submission
//! outcome. Every setter re-runs the touched field's rule and then
//! recomputes the submit flag from the whole snapshot — an immediate
//! re-check with last-write-wins semantics, which is the synchronous
//! equivalent of re-validating after the UI state settles. No other code
//! path writes the flag.
//!
//! The form never performs I/O. The host snapshots an `OrderRequest`,
//! executes the round-trip through `OrderClient`, and feeds the result
//! back through `apply_outcome`.

use crate::error::ApiError;
use crate::types::{FieldErrors, FormValues, OrderReceipt, OrderRequest, SubmissionOutcome};
use crate::validation::{validate_all, validate_field, Field};

/// In-memory state of the order form.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    values: FormValues,
    errors: FieldErrors,
    submit_enabled: bool,
    outcome: SubmissionOutcome,
}

impl OrderForm {
    /// Fresh form: empty values, no errors, submit disabled, no banner.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    /// Store a new full-name value, refreshing its inline error and the
    /// submit flag.
    pub fn set_full_name(&mut self, value: &str) {
        self.values.full_name = value.to_string();
        self.errors.full_name = inline_error(Field::FullName, value);
        self.refresh_submit();
    }

    /// Store a new size selection, refreshing its inline error and the
    /// submit flag.
    pub fn set_size(&mut self, value: &str) {
        self.values.size = value.to_string();
        self.errors.size = inline_error(Field::Size, value);
        self.refresh_submit();
    }

    /// Check or uncheck a topping. Checking adds the id exactly once,
    /// preserving check order; unchecking removes it. Both directions are
    /// idempotent. Toppings carry no rule, but the submit flag is still
    /// recomputed from the snapshot like any other change.
    pub fn set_topping(&mut self, id: &str, checked: bool) {
        if checked {
            if !self.values.toppings.iter().any(|t| t == id) {
                self.values.toppings.push(id.to_string());
            }
        } else {
            self.values.toppings.retain(|t| t != id);
        }
        self.refresh_submit();
    }

    /// Snapshot the current values as a POST body.
    ///
    /// The form does not gate this on `submit_enabled`; a rendering host
    /// is expected to disable its submit control instead.
    pub fn order_request(&self) -> OrderRequest {
        OrderRequest {
            full_name: self.values.full_name.clone(),
            size: self.values.size.clone(),
            toppings: self.values.toppings.clone(),
        }
    }

    /// Fold a submission result back into the form.
    ///
    /// Success resets values and errors to defaults and shows the server's
    /// message on the success banner. Any failure leaves the typed values
    /// untouched and shows a failure banner: a rejection carries the
    /// server's own message, every other error its display string. The
    /// previous outcome is replaced wholesale either way.
    pub fn apply_outcome(&mut self, result: Result<OrderReceipt, ApiError>) {
        match result {
            Ok(receipt) => {
                self.values = FormValues::default();
                self.errors = FieldErrors::default();
                self.refresh_submit();
                self.outcome = SubmissionOutcome::Success(receipt.message);
            }
            Err(ApiError::Rejected { message, .. }) => {
                self.outcome = SubmissionOutcome::Failure(message);
            }
            Err(other) => {
                self.outcome = SubmissionOutcome::Failure(other.to_string());
            }
        }
    }

    fn refresh_submit(&mut self) {
        self.submit_enabled = validate_all(&self.values);
    }
}

/// Inline error slot value for a single-field check: the fixed message, or
/// empty for no error.
fn inline_error(field: Field, value: &str) -> String {
    validate_field(field, value).unwrap_or("").to_string()
}
