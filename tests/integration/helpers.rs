//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use herald_api::AppState;
use herald_auth::authenticator::Authenticator;
use herald_auth::password::SecretHasher;
use herald_auth::store::{CredentialStore, MemoryCredentialStore};
use herald_auth::token::{TokenDecoder, TokenEncoder};
use herald_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The in-memory credential store behind the router
    pub store: Arc<MemoryCredentialStore>,
}

/// Captured response status and JSON body
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` for empty bodies)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over an in-memory credential store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.pepper = "integration-test-pepper".to_string();
        config.auth.token_secret = "integration-test-signing-secret".to_string();

        let store = Arc::new(MemoryCredentialStore::new());
        let hasher = Arc::new(SecretHasher::new(&config.auth).expect("valid Argon2 parameters"));
        let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
        let token_decoder = Arc::new(TokenDecoder::new(&config.auth));

        let authenticator = Arc::new(Authenticator::new(
            Arc::clone(&store) as Arc<dyn CredentialStore>,
            hasher,
            token_encoder,
        ));

        let state = AppState {
            config: Arc::new(config),
            authenticator,
            tokens: token_decoder,
        };

        Self {
            router: herald_api::build_router(state),
            store,
        }
    }

    /// Send a request through the router and capture status + JSON body
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Register an account through the HTTP API
    pub async fn register(&self, identifier: &str, plaintext: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "identifier": identifier,
                "plaintext": plaintext,
            })),
            None,
        )
        .await
    }

    /// Log in through the HTTP API
    pub async fn login(&self, identifier: &str, plaintext: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "identifier": identifier,
                "plaintext": plaintext,
            })),
            None,
        )
        .await
    }
}
