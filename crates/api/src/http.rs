//! Wire-level request and response shapes.
//!
//! The boundary is transport-agnostic: anything that can produce an
//! [`ApiRequest`] (an HTTP server adapter, a test, the CLI's `http`
//! command) can serve the API. Routing frameworks stay outside this
//! crate.

use serde_json::json;

/// HTTP method subset the service routes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET — point read
    Get,
    /// POST — create
    Post,
    /// PUT — update
    Put,
    /// DELETE — remove
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            other => Err(format!("unsupported method: {}", other)),
        }
    }
}

/// Status codes the service can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200
    Ok,
    /// 400
    BadRequest,
    /// 404
    NotFound,
    /// 405
    MethodNotAllowed,
    /// 409
    Conflict,
    /// 500
    InternalServerError,
}

impl StatusCode {
    /// Numeric status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::Conflict => 409,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Check if this is a success status.
    pub fn is_success(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// A decoded wire-level request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Request method
    pub method: Method,
    /// Request path, e.g. `/kv/user:1`
    pub path: String,
    /// Raw request body; empty for bodyless methods
    pub body: String,
}

impl ApiRequest {
    /// A bodyless request.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: String::new(),
        }
    }

    /// A request carrying a body.
    pub fn with_body(method: Method, path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: body.into(),
        }
    }
}

/// A wire-level response: status plus JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// Response status
    pub status: StatusCode,
    /// JSON response body
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// 200 with an arbitrary JSON body.
    pub fn ok(body: serde_json::Value) -> Self {
        Self {
            status: StatusCode::Ok,
            body,
        }
    }

    /// The canonical `{"status":"ok"}` success body.
    pub fn status_ok() -> Self {
        Self::ok(json!({"status": "ok"}))
    }

    /// An error response with the canonical `{"error": ...}` body.
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({"error": message.into()}),
        }
    }
}
