mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

/// Logs in through the form and returns the `Cookie` header value.
async fn login(server: &TestServer) -> String {
    let response = server
        .post("/login")
        .form(&[("email", "ada@example.com"), ("password", "secret")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/dashboard");

    let set_cookie = response.header("set-cookie");
    let set_cookie = set_cookie.to_str().unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(!set_cookie.contains("Secure"));

    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_dashboard_redirects_without_session() {
    let server = common::make_server(common::create_test_state());

    for path in ["/dashboard", "/dashboard/links/new", "/analytics"] {
        let response = server.get(path).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/login");
    }
}

#[tokio::test]
async fn test_login_page_renders() {
    let server = common::make_server(common::create_test_state());

    let login = server.get("/login").await;
    let signup = server.get("/login").add_query_param("mode", "signup").await;

    login.assert_status_ok();
    signup.assert_status_ok();
    assert!(!login.text().contains("name=\"name\""));
    assert!(signup.text().contains("name=\"name\""));
}

#[tokio::test]
async fn test_login_opens_dashboard() {
    let server = common::make_server(common::create_test_state());

    let cookie = login(&server).await;
    let response = server.get("/dashboard").add_header("Cookie", cookie).await;

    response.assert_status_ok();
    assert!(response.text().contains("Portfolio Website"));
}

#[tokio::test]
async fn test_login_session_works_for_api() {
    let server = common::make_server(common::create_test_state());

    let cookie = login(&server).await;

    server
        .get("/api/links")
        .add_header("Cookie", cookie)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_login_page_skipped_with_session() {
    let server = common::make_server(common::create_test_state());

    let cookie = login(&server).await;
    let response = server.get("/login").add_header("Cookie", cookie).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/dashboard");
}

#[tokio::test]
async fn test_login_validation_errors() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/login")
        .form(&[("email", "nope"), ("password", "")])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let html = response.text();
    assert!(html.contains("Enter a valid email address"));
    assert!(html.contains("Password is required"));
}

#[tokio::test]
async fn test_signup_requires_name() {
    let server = common::make_server(common::create_test_state());

    let missing = server
        .post("/login")
        .form(&[
            ("email", "ada@example.com"),
            ("password", "secret"),
            ("name", ""),
            ("mode", "signup"),
        ])
        .await;
    let complete = server
        .post("/login")
        .form(&[
            ("email", "ada@example.com"),
            ("password", "secret"),
            ("name", "Ada"),
            ("mode", "signup"),
        ])
        .await;

    missing.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(missing.text().contains("Full name is required"));
    complete.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let server = common::make_server(common::create_test_state());
    let cookie = login(&server).await;

    let response = server.post("/logout").add_header("Cookie", cookie.clone()).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
    assert!(
        response
            .header("set-cookie")
            .to_str()
            .unwrap()
            .contains("Max-Age=0")
    );

    let after = server.get("/dashboard").add_header("Cookie", cookie).await;
    after.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(after.header("location"), "/login");
}

#[tokio::test]
async fn test_secure_cookie_flag() {
    let state = smartlinks::state::AppState::new(
        smartlinks::infrastructure::seed::sample_links(),
        smartlinks::infrastructure::seed::sample_analytics(),
        Default::default(),
        true,
    );
    let server = common::make_server(state);

    let response = server
        .post("/login")
        .form(&[("email", "ada@example.com"), ("password", "secret")])
        .await;

    assert!(
        response
            .header("set-cookie")
            .to_str()
            .unwrap()
            .contains("Secure")
    );
}
