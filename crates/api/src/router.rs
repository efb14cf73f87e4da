//! Route table.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | `/kv` | create |
//! | GET | `/kv/{id}` | get |
//! | PUT | `/kv/{id}` | update |
//! | DELETE | `/kv/{id}` | delete |
//!
//! Unknown paths answer 404, known paths with an unsupported method 405,
//! both with the canonical `{"error": ...}` body. The key is taken from
//! the path segment; an empty segment is an unknown path.

use vault_engine::KvEngine;

use crate::handlers;
use crate::http::{ApiRequest, ApiResponse, Method, StatusCode};

/// Dispatches decoded requests to the engine.
pub struct Router {
    engine: KvEngine,
}

impl Router {
    /// Create a router over the given engine.
    pub fn new(engine: KvEngine) -> Self {
        Self { engine }
    }

    /// The engine this router dispatches to.
    pub fn engine(&self) -> &KvEngine {
        &self.engine
    }

    /// Route a request to its handler and return the wire response.
    pub fn dispatch(&self, request: &ApiRequest) -> ApiResponse {
        tracing::info!(method = %request.method, path = %request.path, "request");

        if request.path == "/kv" {
            return match request.method {
                Method::Post => handlers::create(&self.engine, &request.body),
                _ => method_not_allowed(request.method),
            };
        }

        if let Some(key) = request.path.strip_prefix("/kv/") {
            if key.is_empty() || key.contains('/') {
                return no_route(&request.path);
            }
            return match request.method {
                Method::Get => handlers::get(&self.engine, key),
                Method::Put => handlers::update(&self.engine, key, &request.body),
                Method::Delete => handlers::delete(&self.engine, key),
                Method::Post => method_not_allowed(request.method),
            };
        }

        no_route(&request.path)
    }
}

fn no_route(path: &str) -> ApiResponse {
    ApiResponse::error(StatusCode::NotFound, format!("no route for {}", path))
}

fn method_not_allowed(method: Method) -> ApiResponse {
    ApiResponse::error(
        StatusCode::MethodNotAllowed,
        format!("method {} not allowed", method),
    )
}
