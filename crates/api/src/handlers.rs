//! Per-route handlers.
//!
//! Each handler decodes its payload, calls the engine, and shapes the
//! outcome into an [`ApiResponse`]. Payload decoding happens before the
//! engine is ever invoked: a body that is not parseable, or whose value
//! field is not itself valid JSON, is a boundary-level `InvalidInput`
//! answered with 400. Deserializing the value field as `RawValue` makes
//! both checks one step and hands the engine the validated raw text.

use serde::Deserialize;
use serde_json::json;
use serde_json::value::RawValue;

use vault_core::Error;
use vault_engine::KvEngine;

use crate::http::{ApiResponse, StatusCode};

#[derive(Deserialize)]
struct CreateBody {
    key: String,
    value: Box<RawValue>,
}

#[derive(Deserialize)]
struct UpdateBody {
    value: Box<RawValue>,
}

/// Map an error kind to its externally visible status, one-to-one.
pub fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::InvalidInput(_) => StatusCode::BadRequest,
        Error::AlreadyExists(_) => StatusCode::Conflict,
        Error::NotFound(_) => StatusCode::NotFound,
        Error::BackendUnavailable { .. } => StatusCode::InternalServerError,
    }
}

/// Shape an engine error into a response.
///
/// Domain failures are deterministic and safe to surface verbatim.
/// Backend failures surface as a generic message; the backend reason has
/// already been logged with its operation and key, and never reaches the
/// caller.
fn failure(err: Error) -> ApiResponse {
    let status = status_for(&err);
    match err {
        Error::BackendUnavailable { .. } => {
            ApiResponse::error(status, "internal server error")
        }
        domain => ApiResponse::error(status, domain.to_string()),
    }
}

/// Handle `POST /kv`.
pub fn create(engine: &KvEngine, body: &str) -> ApiResponse {
    let decoded: CreateBody = match serde_json::from_str(body) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::warn!(error = %e, "rejecting malformed create payload");
            return ApiResponse::error(StatusCode::BadRequest, "request body is not valid JSON");
        }
    };

    match engine.create(&decoded.key, decoded.value.get()) {
        Ok(()) => ApiResponse::status_ok(),
        Err(err) => failure(err),
    }
}

/// Handle `GET /kv/{id}`.
pub fn get(engine: &KvEngine, key: &str) -> ApiResponse {
    let record = match engine.get(key) {
        Ok(record) => record,
        Err(err) => return failure(err),
    };

    // The stored value passed boundary validation on the way in; failing
    // to re-embed it means the store handed back something corrupt.
    match serde_json::from_str::<serde_json::Value>(&record.value) {
        Ok(value) => ApiResponse::ok(json!({"key": record.key, "value": value})),
        Err(e) => {
            tracing::error!(key, error = %e, "stored value is not valid JSON");
            ApiResponse::error(StatusCode::InternalServerError, "internal server error")
        }
    }
}

/// Handle `PUT /kv/{id}`.
pub fn update(engine: &KvEngine, key: &str, body: &str) -> ApiResponse {
    let decoded: UpdateBody = match serde_json::from_str(body) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::warn!(key, error = %e, "rejecting malformed update payload");
            return ApiResponse::error(StatusCode::BadRequest, "request body is not valid JSON");
        }
    };

    match engine.update(key, decoded.value.get()) {
        Ok(()) => ApiResponse::status_ok(),
        Err(err) => failure(err),
    }
}

/// Handle `DELETE /kv/{id}`.
pub fn delete(engine: &KvEngine, key: &str) -> ApiResponse {
    match engine.delete(key) {
        Ok(()) => ApiResponse::status_ok(),
        Err(err) => failure(err),
    }
}
