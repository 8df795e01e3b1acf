//! Language switching and right-to-left rendering.

#![allow(clippy::unwrap_used)]

use docin_integration_tests::{TestApp, location};
use reqwest::header::REFERER;

#[tokio::test]
async fn test_toggle_switches_to_arabic_and_back() {
    let app = TestApp::spawn().await;

    let response = app.toggle_language("/pricing").await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/pricing");

    let body = app.get_text("/pricing").await;
    assert!(body.contains(r#"<html lang="ar" dir="rtl">"#));
    assert!(body.contains("اختر خطتك"));

    app.toggle_language("/pricing").await;
    let body = app.get_text("/pricing").await;
    assert!(body.contains(r#"<html lang="en" dir="ltr">"#));
}

#[tokio::test]
async fn test_explicit_language_and_unknown_tag() {
    let app = TestApp::spawn().await;

    app.post_form("/language", &[("lang", "ar")]).await;
    assert!(app.get_text("/").await.contains(r#"dir="rtl""#));

    // Setting the same language again does not toggle
    app.post_form("/language", &[("lang", "ar")]).await;
    assert!(app.get_text("/").await.contains(r#"dir="rtl""#));

    // Unknown tags keep the current language
    app.post_form("/language", &[("lang", "fr")]).await;
    assert!(app.get_text("/").await.contains(r#"lang="ar""#));
}

#[tokio::test]
async fn test_foreign_referer_redirects_home() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/language"))
        .header(REFERER, "https://elsewhere.example/phish")
        .form(&[("lang", "")])
        .send()
        .await
        .unwrap();

    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_language_survives_logout() {
    let app = TestApp::spawn().await;
    app.login_demo().await;
    app.toggle_language("/dashboard").await;

    let body = app.get_text("/dashboard").await;
    assert!(body.contains(r#"dir="rtl""#));
    assert!(body.contains("dokin_abc123_xyz789"));

    app.post_form("/logout", &[]).await;
    assert!(app.get_text("/").await.contains(r#"lang="ar""#));
}
