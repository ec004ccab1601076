//! Stateless HTTP request builder and response parser for the order API.
//!
//! # Design
//! `OrderClient` holds only a `base_url` and carries no mutable state
//! between calls. Submission is split into `build_submit_order`, which
//! produces an `HttpRequest`, and `parse_submit_order`, which consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies. A single attempt
//! per submit: retries, timeouts, and cancellation belong to the host.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{OrderReceipt, OrderRejection, OrderRequest};

/// Base URL the original deployment points the form at.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9009";

/// Stateless client for the order endpoint.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_submit_order` and `parse_submit_order`.
#[derive(Debug, Clone)]
pub struct OrderClient {
    base_url: String,
}

impl OrderClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_submit_order(&self, order: &OrderRequest) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(order).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            url: format!("{}/api/order", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        })
    }

    /// Interpret the server's answer to a submitted order.
    ///
    /// 2xx bodies must be an `OrderReceipt`. Non-2xx bodies are expected to
    /// be an `OrderRejection` and become `ApiError::Rejected`; anything
    /// else non-2xx falls through to `HttpError` with the raw body.
    pub fn parse_submit_order(&self, response: HttpResponse) -> Result<OrderReceipt, ApiError> {
        if (200..300).contains(&response.status) {
            return serde_json::from_str(&response.body)
                .map_err(|e| ApiError::DeserializationError(e.to_string()));
        }
        match serde_json::from_str::<OrderRejection>(&response.body) {
            Ok(rejection) => Err(ApiError::Rejected {
                status: response.status,
                message: rejection.message,
            }),
            Err(_) => Err(ApiError::HttpError {
                status: response.status,
                body: response.body,
            }),
        }
    }
}
