//! Integration tests for Cakes N Bells.
//!
//! The storefront router is driven in-process with
//! `tower::ServiceExt::oneshot`, backed by an in-memory document store. No
//! server or data directory is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cakes-n-bells-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_browse` - Landing page, search, categories, product pages
//! - `wishlist` - Wishlist toggling and persistence
//! - `purchase_flow` - Buy, checkout, payment and WhatsApp handoff
//! - `admin_catalog` - Admin login and catalog management

#![allow(clippy::missing_panics_doc)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use cakes_n_bells_storefront::config::StorefrontConfig;
use cakes_n_bells_storefront::db::MemoryStore;
use cakes_n_bells_storefront::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

/// Admin password matching the default digest.
pub const ADMIN_PASSWORD: &str = "admin123";

/// Largest response body the tests will read.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// A storefront under test, with a single visitor's cookie jar.
pub struct TestApp {
    router: Router,
    store: Arc<MemoryStore>,
    cookie: Option<String>,
}

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Parse the body as JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    /// A storefront with default configuration and seed data.
    #[must_use]
    pub fn new() -> Self {
        let config = StorefrontConfig::from_lookup(&|_| None).expect("default config");
        Self::with_config(config)
    }

    /// A storefront with the given configuration.
    #[must_use]
    pub fn with_config(config: StorefrontConfig) -> Self {
        let store = Arc::new(MemoryStore::default());
        let state = AppState::new(config, store.clone());
        Self {
            router: cakes_n_bells_storefront::app(state),
            store,
            cookie: None,
        }
    }

    /// The document store behind the app.
    #[must_use]
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post_json(&mut self, uri: &str, body: &Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    /// Send a POST request without a body.
    pub async fn post(&mut self, uri: &str) -> TestResponse {
        self.send(Method::POST, uri, None).await
    }

    /// Send a PUT request with a JSON body.
    pub async fn put_json(&mut self, uri: &str, body: &Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&mut self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    /// Log in as admin with the default password.
    pub async fn login(&mut self) {
        let response = self
            .post_json(
                "/admin/login",
                &serde_json::json!({ "password": ADMIN_PASSWORD }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "admin login failed");
    }

    async fn send(&mut self, method: Method, uri: &str, body: Option<&Value>) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        // Keep the session cookie, like a browser would
        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            && let Some(pair) = set_cookie.split(';').next()
        {
            self.cookie = Some(pair.to_owned());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
