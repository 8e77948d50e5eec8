//! Client stub for an external payroll/accounting API.
//!
//! # Overview
//! `PayrollClient` represents three remote operations without performing
//! them: each stub method formats the target URL, logs the call, and returns
//! a fixed response. No network traffic is ever issued.
//!
//! For wiring a real transport, every operation also has a `build_*` /
//! `parse_*` pair (host-does-IO pattern). The core describes the request as
//! plain data and interprets the response; the caller executes the round-trip
//! and owns timeout, retry and auth policy.
//!
//! # Design
//! - `PayrollClient` is stateless. It holds only `base_url`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::PayrollClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{EmployeePayment, Ledger, PayrollBatch, StubResponse, WebhookEvent};
