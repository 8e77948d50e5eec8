//! Mock of the external payroll/accounting API.
//!
//! Every endpoint logs what it received and answers with a canned body. No
//! state is kept between requests, so handlers take no `State` and
//! concurrent requests never interact. Bodies are read as JSON whatever the
//! `Content-Type`; only unparseable JSON (or a non-object batch) is rejected.

use axum::{
    body::Bytes,
    extract::{FromRequest, Path, Request},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::net::TcpListener;
use tracing::info;

pub const MOCK_BATCH_ID: &str = "mock-batch-001";

/// JSON body extractor that does not look at `Content-Type`.
///
/// Rejections are axum's own `JsonRejection`: 400 for a syntax error, 422
/// when the JSON does not fit `T`.
#[derive(Debug)]
pub struct AnyJson<T>(pub T);

impl<T, S> FromRequest<S> for AnyJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        let Json(value) = Json::<T>::from_bytes(&bytes).map_err(IntoResponse::into_response)?;
        Ok(AnyJson(value))
    }
}

/// Body of `POST /payroll/batch`: any JSON object. Only the two known keys
/// are pulled out for logging; their values are not type checked.
#[derive(Debug, Deserialize)]
pub struct PayrollBatch {
    #[serde(default)]
    pub employees: Value,
    #[serde(default)]
    pub period: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PayrollBatch {
    fn employee_count(&self) -> Option<usize> {
        self.employees.as_array().map(Vec::len)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchAccepted {
    pub status: String,
    pub batch_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerData {
    pub period: String,
    pub entries: Vec<Value>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebhookAck {
    pub status: String,
    pub message: String,
}

/// Build the mock API router.
pub fn app() -> Router {
    Router::new()
        .route("/payroll/batch", post(payroll_batch))
        .route("/accounting/ledger/{period}", get(accounting_ledger))
        .route("/webhook/payroll-status", post(webhook_payroll_status))
}

/// Serve `app` on `listener` until the server stops.
pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn payroll_batch(AnyJson(batch): AnyJson<PayrollBatch>) -> Json<BatchAccepted> {
    info!(
        employees = batch.employee_count(),
        period = %batch.period,
        payload = ?batch,
        "[MOCK API] received batch payload"
    );
    Json(BatchAccepted {
        status: "submitted".to_string(),
        batch_id: MOCK_BATCH_ID.to_string(),
        message: "Payroll batch received (mock response).".to_string(),
    })
}

async fn accounting_ledger(Path(period): Path<String>) -> Json<LedgerData> {
    info!(%period, "[MOCK API] query for ledger");
    Json(LedgerData {
        period,
        entries: Vec::new(),
        message: "Mock ledger data for demonstration.".to_string(),
    })
}

async fn webhook_payroll_status(AnyJson(payload): AnyJson<Value>) -> Json<WebhookAck> {
    info!(%payload, "[MOCK API] webhook received");
    Json(WebhookAck {
        status: "received".to_string(),
        message: "Webhook processed (mock).".to_string(),
    })
}
