//! Login, signup and logout through the browser-facing routes.

#![allow(clippy::unwrap_used)]

use docin_integration_tests::{TestApp, location};
use reqwest::StatusCode;

#[tokio::test]
async fn test_dashboard_redirects_anonymous_visitor() {
    let app = TestApp::spawn().await;

    let response = app.get("/dashboard").await;

    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_demo_login_opens_dashboard() {
    let app = TestApp::spawn().await;

    let response = app.login_demo().await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/dashboard");

    let response = app.get("/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Welcome back, Ahmed Benaissa!"));
    assert!(body.contains("dokin_abc123_xyz789"));
    assert!(body.contains("Premium features"));
    assert!(body.contains("Login Successful"));

    // The notification is shown once
    let body = app.get_text("/dashboard").await;
    assert!(!body.contains("Login Successful"));
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .post_form("/login", &[("email", "demo@ai.dz"), ("password", "nope")])
        .await;
    assert_eq!(location(&response), "/login?error=credentials");

    let body = app.get_text("/login?error=credentials").await;
    assert!(body.contains("Login Failed"));
    assert!(body.contains("Try demo@ai.dz / demo123"));
    assert!(body.contains(r#"aria-invalid="true""#));

    let response = app.get("/dashboard").await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_failed_login_keeps_existing_session() {
    let app = TestApp::spawn().await;
    app.login_demo().await;

    app.post_form("/login", &[("email", "x@y.dz"), ("password", "demo123")])
        .await;

    let response = app.get("/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_demo_prefill() {
    let app = TestApp::spawn().await;

    let body = app.get_text("/login?demo=1").await;

    assert!(body.contains(r#"value="demo@ai.dz""#));
    assert!(body.contains(r#"value="demo123""#));

    let body = app.get_text("/login").await;
    assert!(!body.contains(r#"value="demo@ai.dz""#));
}

#[tokio::test]
async fn test_signup_creates_test_plan_session() {
    let app = TestApp::spawn().await;

    let response = app
        .post_form(
            "/signup",
            &[
                ("name", "Amina Kaci"),
                ("email", "amina@example.dz"),
                ("company", ""),
                ("password", "anything"),
            ],
        )
        .await;
    assert_eq!(location(&response), "/dashboard");

    let body = app.get_text("/dashboard").await;
    assert!(body.contains("Welcome back, Amina Kaci!"));
    assert!(body.contains("Free plan"));
    assert!(body.contains("dokin_"));
    assert!(!body.contains("dokin_abc123_xyz789"));
    assert!(body.contains("Account Created"));

    let body = app.get_text("/pricing").await;
    assert!(body.contains("plan--current"));
    assert!(body.contains("Upgrade Now"));
}

#[tokio::test]
async fn test_signup_rejects_malformed_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post_form(
            "/signup",
            &[("name", "Amina"), ("email", "not-an-email"), ("password", "x")],
        )
        .await;
    assert_eq!(location(&response), "/signup?error=invalid");

    let body = app.get_text("/signup?error=invalid").await;
    assert!(body.contains("Signup Failed"));

    let response = app.get("/dashboard").await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_signup_rejects_blank_name() {
    let app = TestApp::spawn().await;

    let response = app
        .post_form(
            "/signup",
            &[("name", "   "), ("email", "amina@example.dz"), ("password", "x")],
        )
        .await;
    assert_eq!(location(&response), "/signup?error=invalid");

    let response = app.get("/dashboard").await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_signup_rejects_empty_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post_form(
            "/signup",
            &[("name", "Amina"), ("email", "amina@example.dz"), ("password", "")],
        )
        .await;
    assert_eq!(location(&response), "/signup?error=invalid");

    let response = app.get("/dashboard").await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = TestApp::spawn().await;
    app.login_demo().await;

    let response = app.post_form("/logout", &[]).await;
    assert_eq!(location(&response), "/");

    let body = app.get_text("/").await;
    assert!(body.contains("Logged Out"));

    let response = app.get("/dashboard").await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_sessions_are_per_client() {
    let first = TestApp::spawn().await;
    first.login_demo().await;

    let stranger = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let response = stranger.get(first.url("/dashboard")).send().await.unwrap();

    assert_eq!(location(&response), "/login");
}
