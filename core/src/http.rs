//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe the order submission round-trip as plain data. The
//! core crate builds `HttpRequest` values and parses `HttpResponse` values
//! without ever touching the network — the caller (host) is responsible for
//! executing the actual I/O. This separation keeps the core deterministic
//! and easy to test.
//!
//! The order API has a single operation, a JSON POST, so requests carry no
//! method field.

/// An HTTP POST request described as plain data.
///
/// Built by `OrderClient::build_submit_order`. The caller is responsible
/// for executing this request against the network and returning the
/// corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `OrderClient::parse_submit_order` for status interpretation and
/// deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
