//! Pizza order form core: state store, field validation, and submit client.
//!
//! # Overview
//! Models a single-page order form as plain data. `OrderForm` holds the
//! current field values, per-field error messages, the submit-enabled flag,
//! and the last submission outcome. `OrderClient` builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network
//! (host-does-IO pattern). The caller executes the actual HTTP round-trip,
//! making the core fully deterministic and testable.
//!
//! # Design
//! - Validation is an explicit rule table (field → predicate → fixed
//!   message) rather than a declarative schema, so it stays framework-free.
//! - `submit_enabled` is recomputed from the full value snapshot on every
//!   change and has no other write path.
//! - `OrderClient` is stateless — it holds only `base_url`. Submission is
//!   split into `build_submit_order` (produces request) and
//!   `parse_submit_order` (consumes response), so the I/O boundary is
//!   explicit.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod catalog;
pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod types;
pub mod validation;

pub use catalog::{topping_by_id, Topping, TOPPINGS};
pub use client::{OrderClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use form::OrderForm;
pub use http::{HttpRequest, HttpResponse};
pub use types::{
    FieldErrors, FormValues, OrderReceipt, OrderRejection, OrderRequest, SubmissionOutcome,
};
pub use validation::{validate_all, validate_field, Field};
