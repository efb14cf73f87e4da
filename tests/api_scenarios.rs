//! End-to-end scenarios over the public API surface.
//!
//! Every request enters through `Router::dispatch`, exactly as a
//! transport adapter would feed it, and runs against the in-memory
//! store.

use std::sync::Arc;

use vaultdb::prelude::*;

fn router() -> Router {
    Router::new(KvEngine::new(Arc::new(MemoryStore::new())))
}

fn post(router: &Router, body: &str) -> ApiResponse {
    router.dispatch(&ApiRequest::with_body(Method::Post, "/kv", body))
}

fn get(router: &Router, key: &str) -> ApiResponse {
    router.dispatch(&ApiRequest::new(Method::Get, format!("/kv/{}", key)))
}

fn put(router: &Router, key: &str, body: &str) -> ApiResponse {
    router.dispatch(&ApiRequest::with_body(
        Method::Put,
        format!("/kv/{}", key),
        body,
    ))
}

fn delete(router: &Router, key: &str) -> ApiResponse {
    router.dispatch(&ApiRequest::new(Method::Delete, format!("/kv/{}", key)))
}

// ============================================================================
// CRUD lifecycle
// ============================================================================

#[test]
fn test_crud_lifecycle_scenario() {
    let router = router();

    let response = post(&router, r#"{"key":"a","value":"1"}"#);
    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.body["status"], "ok");

    let response = get(&router, "a");
    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.body["key"], "a");
    assert_eq!(response.body["value"], "1");

    let response = put(&router, "a", r#"{"value":"2"}"#);
    assert_eq!(response.status.as_u16(), 200);

    let response = get(&router, "a");
    assert_eq!(response.body["value"], "2");

    let response = delete(&router, "a");
    assert_eq!(response.status.as_u16(), 200);

    let response = get(&router, "a");
    assert_eq!(response.status.as_u16(), 404);
    assert!(response.body["error"].is_string());
}

#[test]
fn test_structured_values_roundtrip() {
    let router = router();

    post(
        &router,
        r#"{"key":"profile","value":{"name":"Alice","tags":["a","b"],"age":30}}"#,
    );

    let response = get(&router, "profile");
    assert_eq!(response.body["value"]["name"], "Alice");
    assert_eq!(response.body["value"]["tags"][1], "b");
    assert_eq!(response.body["value"]["age"], 30);
}

#[test]
fn test_deleted_key_reusable_with_fresh_value() {
    let router = router();

    post(&router, r#"{"key":"k","value":1}"#);
    delete(&router, "k");

    let response = post(&router, r#"{"key":"k","value":2}"#);
    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(get(&router, "k").body["value"], 2);
}

// ============================================================================
// Failure mapping
// ============================================================================

#[test]
fn test_empty_key_create_is_400() {
    let router = router();
    let response = post(&router, r#"{"key":"","value":"1"}"#);
    assert_eq!(response.status.as_u16(), 400);
}

#[test]
fn test_double_create_is_409_and_value_retained() {
    let router = router();

    post(&router, r#"{"key":"a","value":"first"}"#);
    let response = post(&router, r#"{"key":"a","value":"second"}"#);
    assert_eq!(response.status.as_u16(), 409);

    assert_eq!(get(&router, "a").body["value"], "first");
}

#[test]
fn test_update_and_delete_of_absent_key_are_404() {
    let router = router();
    assert_eq!(put(&router, "nope", r#"{"value":1}"#).status.as_u16(), 404);
    assert_eq!(delete(&router, "nope").status.as_u16(), 404);
}

#[test]
fn test_second_delete_is_404() {
    let router = router();
    post(&router, r#"{"key":"k","value":1}"#);

    assert_eq!(delete(&router, "k").status.as_u16(), 200);
    assert_eq!(delete(&router, "k").status.as_u16(), 404);
}

#[test]
fn test_malformed_bodies_are_400() {
    let router = router();
    assert_eq!(post(&router, "garbage").status.as_u16(), 400);
    assert_eq!(post(&router, r#"{"key":"a","value":}"#).status.as_u16(), 400);
    assert_eq!(post(&router, r#"{"key":"a"}"#).status.as_u16(), 400);

    post(&router, r#"{"key":"a","value":1}"#);
    assert_eq!(put(&router, "a", "garbage").status.as_u16(), 400);
    assert_eq!(get(&router, "a").body["value"], 1, "Value unchanged by bad PUT");
}

#[test]
fn test_update_touches_only_named_key() {
    let router = router();
    post(&router, r#"{"key":"a","value":1}"#);
    post(&router, r#"{"key":"b","value":2}"#);

    put(&router, "a", r#"{"value":9}"#);
    assert_eq!(get(&router, "b").body["value"], 2);
}

// ============================================================================
// Backend failures never leak
// ============================================================================

mod backend_failures {
    use super::*;
    use vaultdb::{BackendError, Deadline, StoreResult};

    /// Store that always fails with a distinctive internal reason.
    struct DownStore;

    const SECRET: &str = "backend 10.0.0.3:3301 connection refused";

    impl ValueStore for DownStore {
        fn insert(&self, _record: Record, _deadline: Deadline) -> StoreResult<()> {
            Err(BackendError::unavailable(SECRET))
        }
        fn get(&self, _key: &str, _deadline: Deadline) -> StoreResult<Option<Record>> {
            Err(BackendError::unavailable(SECRET))
        }
        fn update(&self, _key: &str, _value: &str, _deadline: Deadline) -> StoreResult<()> {
            Err(BackendError::unavailable(SECRET))
        }
        fn delete(&self, _key: &str, _deadline: Deadline) -> StoreResult<()> {
            Err(BackendError::unavailable(SECRET))
        }
        fn exists(&self, _key: &str, _deadline: Deadline) -> StoreResult<bool> {
            Err(BackendError::unavailable(SECRET))
        }
        fn scan(&self, _deadline: Deadline) -> StoreResult<Vec<Record>> {
            Err(BackendError::unavailable(SECRET))
        }
    }

    #[test]
    fn test_backend_failure_is_500_with_generic_body() {
        let router = Router::new(KvEngine::new(Arc::new(DownStore)));

        for response in [
            post(&router, r#"{"key":"a","value":1}"#),
            get(&router, "a"),
            put(&router, "a", r#"{"value":1}"#),
            delete(&router, "a"),
        ] {
            assert_eq!(response.status.as_u16(), 500);
            let body = response.body.to_string();
            assert!(
                !body.contains("10.0.0.3") && !body.contains("connection refused"),
                "Backend internals must not leak: {}",
                body
            );
            assert_eq!(response.body["error"], "internal server error");
        }
    }

    #[test]
    fn test_backend_failure_is_never_404() {
        let router = Router::new(KvEngine::new(Arc::new(DownStore)));
        assert_ne!(get(&router, "a").status.as_u16(), 404);
        assert_ne!(delete(&router, "a").status.as_u16(), 404);
    }
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_creates_exactly_one_wins() {
    let router = Arc::new(router());

    let handles: Vec<_> = (0..2)
        .map(|i| {
            let router = Arc::clone(&router);
            std::thread::spawn(move || {
                let body = format!(r#"{{"key":"race","value":{}}}"#, i);
                router
                    .dispatch(&ApiRequest::with_body(Method::Post, "/kv", body))
                    .status
                    .as_u16()
            })
        })
        .collect();

    let mut statuses: Vec<u16> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    statuses.sort_unstable();
    assert_eq!(statuses, vec![200, 409], "Exactly one create may win");
}

#[test]
fn test_independent_keys_do_not_interfere_under_concurrency() {
    let router = Arc::new(router());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let router = Arc::clone(&router);
            std::thread::spawn(move || {
                let body = format!(r#"{{"key":"k{}","value":{}}}"#, i, i);
                router
                    .dispatch(&ApiRequest::with_body(Method::Post, "/kv", body))
                    .status
                    .as_u16()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 200);
    }
    for i in 0..8 {
        assert_eq!(get(&router, &format!("k{}", i)).status.as_u16(), 200);
    }
}
