//! Plain-data HTTP values exchanged with the caller.
//!
//! `PayrollClient::build_*` hands out an `HttpRequest`; whoever owns the
//! transport sends it and wraps what came back in an `HttpResponse` for
//! `PayrollClient::parse_*`. Nothing in this crate opens a socket.

/// The payroll API only uses these two verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Request to send. `path` is the absolute URL, base address included.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Response as received by the caller. Parsing only looks at `status` and
/// `body`; `headers` are kept for callers that want them.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
