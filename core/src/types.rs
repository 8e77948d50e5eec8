//! Request and response records for the payroll API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! Nothing is validated. Request records name the keys the API documents
//! but keep their values as raw JSON, and every other key is carried in
//! `extra` so a caller can pass any mapping through unchanged. Response field
//! order is the wire order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A set of employee payment instructions for one pay period.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PayrollBatch {
    #[serde(default)]
    pub employees: Vec<EmployeePayment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One payment line of a `PayrollBatch`.
///
/// Values are kept as sent, so `3000` is not re-encoded as `3000.0` and a
/// string amount such as `"3000.00"` survives untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmployeePayment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Inbound payroll status notification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WebhookEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Acknowledgement returned for batch submissions and webhooks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StubResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    pub message: String,
}

/// Accounting entries for a period. Entries are opaque JSON values; the
/// stub and the mock both always return an empty list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    pub period: String,
    #[serde(default)]
    pub entries: Vec<Value>,
    pub message: String,
}
