//! Stub client and request builder/response parser for the payroll API.
//!
//! # Design
//! `PayrollClient` holds only a `base_url` and carries no mutable state
//! between calls. The stub methods (`submit_payroll_batch`,
//! `get_accounting_ledger`, `webhook_payroll_status`) log and return fixed
//! responses; their output never depends on the input beyond echoing the
//! ledger period. The `build_*` / `parse_*` pairs describe the same calls as
//! plain HTTP data for a caller that wants to perform them for real.

use tracing::{debug, info};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Ledger, PayrollBatch, StubResponse, WebhookEvent};

const STUB_BATCH_ID: &str = "stub-123";
const STUB_BATCH_MESSAGE: &str = "Stubbed: payroll batch accepted.";
const STUB_LEDGER_MESSAGE: &str = "Stubbed: ledger data.";
const STUB_WEBHOOK_MESSAGE: &str = "Stubbed: webhook data processed.";

/// Synchronous, stateless client for the external payroll/accounting API.
#[derive(Debug, Clone)]
pub struct PayrollClient {
    base_url: String,
}

impl PayrollClient {
    /// `base_url` is the root of the external system, e.g.
    /// `http://external-payroll/api`. A trailing slash is dropped.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn batch_url(&self) -> String {
        format!("{}/payroll/batch", self.base_url)
    }

    fn ledger_url(&self, period: &str) -> String {
        format!("{}/accounting/ledger/{period}", self.base_url)
    }

    fn webhook_url(&self) -> String {
        format!("{}/webhook/payroll-status", self.base_url)
    }

    // -- stubs ---------------------------------------------------------------

    /// Pretend to submit a payroll batch. Always reports `stub-123`.
    pub fn submit_payroll_batch(&self, batch: &PayrollBatch) -> StubResponse {
        info!(url = %self.batch_url(), payload = ?batch, "[STUB] submitting payroll batch");
        StubResponse {
            status: "submitted".to_string(),
            batch_id: Some(STUB_BATCH_ID.to_string()),
            message: STUB_BATCH_MESSAGE.to_string(),
        }
    }

    /// Pretend to fetch ledger data for `period`. The period is echoed back
    /// with no entries.
    pub fn get_accounting_ledger(&self, period: &str) -> Ledger {
        info!(period, url = %self.ledger_url(period), "[STUB] fetching ledger");
        Ledger {
            period: period.to_string(),
            entries: Vec::new(),
            message: STUB_LEDGER_MESSAGE.to_string(),
        }
    }

    /// Pretend to handle a payroll status webhook.
    pub fn webhook_payroll_status(&self, event: &WebhookEvent) -> StubResponse {
        info!(payload = ?event, "[STUB] payroll webhook event received");
        StubResponse {
            status: "received".to_string(),
            batch_id: None,
            message: STUB_WEBHOOK_MESSAGE.to_string(),
        }
    }

    // -- host-does-IO --------------------------------------------------------

    pub fn build_submit_payroll_batch(&self, batch: &PayrollBatch) -> Result<HttpRequest, ApiError> {
        json_post(self.batch_url(), batch)
    }

    pub fn build_get_accounting_ledger(&self, period: &str) -> HttpRequest {
        let path = self.ledger_url(period);
        debug!(%path, "built ledger request");
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_webhook_payroll_status(&self, event: &WebhookEvent) -> Result<HttpRequest, ApiError> {
        json_post(self.webhook_url(), event)
    }

    pub fn parse_submit_payroll_batch(&self, response: HttpResponse) -> Result<StubResponse, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_get_accounting_ledger(&self, response: HttpResponse) -> Result<Ledger, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_webhook_payroll_status(&self, response: HttpResponse) -> Result<StubResponse, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

fn json_post<T: serde::Serialize>(path: String, payload: &T) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    debug!(%path, bytes = body.len(), "built JSON request");
    Ok(HttpRequest {
        method: HttpMethod::Post,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmployeePayment;

    fn client() -> PayrollClient {
        PayrollClient::new("http://localhost:8083")
    }

    fn sample_batch() -> PayrollBatch {
        serde_json::from_str(r#"{"employees":[{"id":1,"amount":3000}],"period":"2024-05"}"#).unwrap()
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn submit_payroll_batch_returns_fixed_response() {
        let response = client().submit_payroll_batch(&sample_batch());
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"status":"submitted","batch_id":"stub-123","message":"Stubbed: payroll batch accepted."}"#
        );
    }

    #[test]
    fn submit_payroll_batch_ignores_input() {
        let c = client();
        let other = PayrollBatch {
            employees: vec![
                EmployeePayment {
                    id: Some("E-42".into()),
                    amount: Some("12.50".into()),
                    ..Default::default()
                };
                3
            ],
            period: Some(202405.into()),
            ..Default::default()
        };
        assert_eq!(c.submit_payroll_batch(&sample_batch()), c.submit_payroll_batch(&other));
        assert_eq!(c.submit_payroll_batch(&PayrollBatch::default()), c.submit_payroll_batch(&other));
    }

    #[test]
    fn get_accounting_ledger_echoes_period() {
        for period in ["2024-05", "", "Q3 2024", "ünïcode"] {
            let ledger = client().get_accounting_ledger(period);
            assert_eq!(ledger.period, period);
            assert!(ledger.entries.is_empty());
            assert_eq!(ledger.message, "Stubbed: ledger data.");
        }
    }

    #[test]
    fn get_accounting_ledger_wire_format() {
        let ledger = client().get_accounting_ledger("2024-05");
        assert_eq!(
            serde_json::to_string(&ledger).unwrap(),
            r#"{"period":"2024-05","entries":[],"message":"Stubbed: ledger data."}"#
        );
    }

    #[test]
    fn webhook_payroll_status_returns_fixed_ack() {
        let event: WebhookEvent =
            serde_json::from_str(r#"{"event":"PAYROLL_PROCESSED","batch_id":"stub-123"}"#).unwrap();
        let c = client();
        let first = serde_json::to_string(&c.webhook_payroll_status(&event)).unwrap();
        let second = serde_json::to_string(&c.webhook_payroll_status(&WebhookEvent::default())).unwrap();
        assert_eq!(first, r#"{"status":"received","message":"Stubbed: webhook data processed."}"#);
        assert_eq!(first, second);
    }

    #[test]
    fn repeated_calls_are_byte_identical() {
        let c = client();
        let batch = sample_batch();
        let a = serde_json::to_vec(&c.submit_payroll_batch(&batch)).unwrap();
        let b = serde_json::to_vec(&c.submit_payroll_batch(&batch)).unwrap();
        assert_eq!(a, b);
        let a = serde_json::to_vec(&c.get_accounting_ledger("2024-05")).unwrap();
        let b = serde_json::to_vec(&c.get_accounting_ledger("2024-05")).unwrap();
        assert_eq!(a, b);
        let event: WebhookEvent = serde_json::from_str(r#"{"event":"PAYROLL_PROCESSED"}"#).unwrap();
        let a = serde_json::to_vec(&c.webhook_payroll_status(&event)).unwrap();
        let b = serde_json::to_vec(&c.webhook_payroll_status(&event)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn build_submit_payroll_batch_produces_correct_request() {
        let req = client().build_submit_payroll_batch(&sample_batch()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8083/payroll/batch");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["period"], "2024-05");
        assert_eq!(body["employees"][0]["id"], 1);
        assert_eq!(body["employees"][0]["amount"], 3000);
    }

    #[test]
    fn build_get_accounting_ledger_produces_correct_request() {
        let req = client().build_get_accounting_ledger("2024-05");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8083/accounting/ledger/2024-05");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_webhook_payroll_status_produces_correct_request() {
        let event = WebhookEvent {
            event: Some("PAYROLL_PROCESSED".into()),
            ..Default::default()
        };
        let req = client().build_webhook_payroll_status(&event).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8083/webhook/payroll-status");
        assert_eq!(req.body.as_deref(), Some(r#"{"event":"PAYROLL_PROCESSED"}"#));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let c = PayrollClient::new("http://external-payroll/api/");
        assert_eq!(c.base_url(), "http://external-payroll/api");
        let req = c.build_get_accounting_ledger("2024-05");
        assert_eq!(req.path, "http://external-payroll/api/accounting/ledger/2024-05");
    }

    #[test]
    fn parse_submit_payroll_batch_success() {
        let body = r#"{"status":"submitted","batch_id":"mock-batch-001","message":"Payroll batch received (mock response)."}"#;
        let receipt = client().parse_submit_payroll_batch(ok(body)).unwrap();
        assert_eq!(receipt.status, "submitted");
        assert_eq!(receipt.batch_id.as_deref(), Some("mock-batch-001"));
    }

    #[test]
    fn parse_get_accounting_ledger_success() {
        let body = r#"{"period":"2024-05","entries":[],"message":"Mock ledger data for demonstration."}"#;
        let ledger = client().parse_get_accounting_ledger(ok(body)).unwrap();
        assert_eq!(ledger.period, "2024-05");
        assert!(ledger.entries.is_empty());
    }

    #[test]
    fn parse_get_accounting_ledger_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_get_accounting_ledger(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_webhook_payroll_status_wrong_status() {
        let response = HttpResponse {
            status: 422,
            headers: Vec::new(),
            body: "unprocessable".to_string(),
        };
        let err = client().parse_webhook_payroll_status(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 422, .. }));
        assert_eq!(err.to_string(), "HTTP 422: unprocessable");
    }

    #[test]
    fn parse_submit_payroll_batch_bad_json() {
        let err = client().parse_submit_payroll_batch(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
