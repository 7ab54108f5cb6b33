//! Integration tests for the authentication flow.

use http::StatusCode;

use herald_auth::store::CredentialStore;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new();

    let response = app.register("alice", "password123").await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = response.body.get("data").unwrap();
    assert_eq!(data.get("identifier").unwrap(), "alice");
    assert!(data.get("id").is_some());
    assert!(data.get("digest").is_none());
}

#[tokio::test]
async fn test_register_duplicate_conflicts() {
    let app = TestApp::new();

    app.register("alice", "pw1").await;
    let first = app
        .store
        .find_by_identifier("alice")
        .await
        .unwrap()
        .unwrap();

    let response = app.register("alice", "pw2").await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body.get("error").unwrap(), "CONFLICT");

    let second = app
        .store
        .find_by_identifier("alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.digest, second.digest);
}

#[tokio::test]
async fn test_register_empty_identifier_rejected() {
    let app = TestApp::new();

    let response = app.register("", "password123").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.register("alice", "password123").await;

    let response = app.login("alice", "password123").await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body.get("data").unwrap();
    assert_eq!(data.get("identifier").unwrap(), "alice");
    assert!(data.get("token").is_some());
    assert!(data.get("account_id").is_some());
    assert!(data.get("expires_at").is_some());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.register("alice", "password123").await;

    let wrong_secret = app.login("alice", "wrongpassword").await;
    let unknown = app.login("nobody", "anything").await;

    assert_eq!(wrong_secret.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_secret.body, unknown.body);
}

#[tokio::test]
async fn test_profile_with_valid_token() {
    let app = TestApp::new();
    app.register("alice", "password123").await;

    let login = app.login("alice", "password123").await;
    let token = login.body["data"]["token"].as_str().unwrap().to_string();

    let response = app
        .request("GET", "/api/auth/profile", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body.get("data").unwrap();
    assert_eq!(data.get("identifier").unwrap(), "alice");
    assert_eq!(
        data.get("account_id").unwrap(),
        login.body["data"].get("account_id").unwrap()
    );
}

#[tokio::test]
async fn test_profile_without_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/auth/profile", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_with_tampered_token() {
    let app = TestApp::new();
    app.register("alice", "password123").await;

    let login = app.login("alice", "password123").await;
    let token = login.body["data"]["token"].as_str().unwrap().to_string();

    let (head, sig) = token.rsplit_once('.').unwrap();
    let flipped = if sig.ends_with('A') { "B" } else { "A" };
    let tampered = format!("{}.{}{}", head, &sig[..sig.len() - 1], flipped);

    let response = app
        .request("GET", "/api/auth/profile", None, Some(&tampered))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body.get("error").unwrap(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_full_authentication_scenario() {
    let app = TestApp::new();

    let registered = app.register("bob", "s3cr3t").await;
    assert_eq!(registered.status, StatusCode::CREATED);

    let login = app.login("bob", "s3cr3t").await;
    assert_eq!(login.status, StatusCode::OK);
    let token = login.body["data"]["token"].as_str().unwrap().to_string();

    let profile = app
        .request("GET", "/api/auth/profile", None, Some(&token))
        .await;
    assert_eq!(profile.status, StatusCode::OK);
    assert_eq!(profile.body["data"]["identifier"], "bob");

    let rejected = app.login("bob", "wrong").await;
    assert_eq!(rejected.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
