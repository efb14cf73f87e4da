//! Request/response boundary for the Vault key-value service.
//!
//! Translates wire-level requests into engine calls and engine outcomes
//! into wire-level responses:
//!
//! - [`http`]: the transport-agnostic request/response shapes
//! - [`handlers`]: per-route decode + outcome shaping
//! - [`Router`]: the route table
//!
//! Payloads are validated here, before the engine runs; taxonomy kinds
//! map one-to-one to status codes; backend error text never crosses this
//! layer toward the caller.

pub mod handlers;
pub mod http;
mod router;

pub use http::{ApiRequest, ApiResponse, Method, StatusCode};
pub use router::Router;
