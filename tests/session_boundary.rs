use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Method, Request, StatusCode,
    },
    response::Response,
    Router,
};
use probau::{
    guard::Locale,
    probau::{app, AuthState, Environment, SessionConfig},
    session::{AccountDirectory, Role},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    app(Arc::new(AuthState::from(SessionConfig::default())))
}

async fn send(app: Router, request: Request<Body>) -> Result<Response> {
    Ok(app.oneshot(request).await?)
}

fn post_json(uri: &str, body: &Value) -> Result<Request<Body>> {
    Ok(Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?)
}

fn get_with_cookie(uri: &str, cookie: Option<&str>) -> Result<Request<Body>> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    Ok(builder.body(Body::empty())?)
}

async fn json_body(response: Response) -> Result<Value> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// `name=value` pair of a `Set-Cookie` header, as a browser would send it back.
fn cookie_pair(set_cookie: &str) -> &str {
    set_cookie.split(';').next().unwrap_or_default()
}

fn contractor_payload() -> Value {
    json!({
        "email": "anna@bau-ag.ch",
        "password": "geheim123",
        "role": "contractor",
        "company": "Bau AG",
        "name": "Anna Muster",
        "isSubscribed": true,
        "plan": "pro"
    })
}

async fn login_cookie(payload: &Value) -> Result<String> {
    let response = send(test_app(), post_json("/api/auth/login", payload)?).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let header = set_cookie(&response).unwrap_or_default();
    Ok(cookie_pair(&header).to_string())
}

#[tokio::test]
async fn login_sets_cookie_and_returns_session() -> Result<()> {
    let response = send(test_app(), post_json("/api/auth/login", &contractor_payload())?).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = set_cookie(&response).unwrap_or_default();
    assert!(cookie.starts_with("probau_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=2592000"));
    assert!(!cookie.contains("Secure"));

    let body = json_body(response).await?;
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["session"]["id"], json!("contractor-01"));
    assert_eq!(body["session"]["role"], json!("contractor"));
    assert_eq!(body["session"]["isSubscribed"], json!(true));
    assert_eq!(body["session"]["plan"], json!("pro"));
    assert!(body["session"].get("password").is_none());
    Ok(())
}

#[tokio::test]
async fn production_cookie_is_secure() -> Result<()> {
    let config = SessionConfig::new(Environment::Production).with_max_age_seconds(3600);
    let app = app(Arc::new(AuthState::from(config)));
    let response = send(app, post_json("/api/auth/login", &contractor_payload())?).await?;

    let cookie = set_cookie(&response).unwrap_or_default();
    assert!(cookie.contains("; Secure"));
    assert!(cookie.contains("Max-Age=3600"));
    Ok(())
}

#[tokio::test]
async fn employer_subscription_is_cleared() -> Result<()> {
    let payload = json!({
        "email": "chef@hausbau.ch",
        "password": "geheim123",
        "role": "employer",
        "company": "Hausbau GmbH",
        "name": "Peter Chef",
        "isSubscribed": true,
        "plan": "pro"
    });
    let response = send(test_app(), post_json("/api/auth/login", &payload)?).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await?;
    assert_eq!(body["session"]["id"], json!("employer-01"));
    assert_eq!(body["session"]["isSubscribed"], json!(false));
    assert_eq!(body["session"]["plan"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn subscribed_contractor_defaults_to_basic_plan() -> Result<()> {
    let mut payload = contractor_payload();
    payload["plan"] = Value::Null;
    let response = send(test_app(), post_json("/api/auth/register", &payload)?).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await?;
    assert_eq!(body["session"]["plan"], json!("basic"));
    Ok(())
}

#[tokio::test]
async fn invalid_payloads_are_rejected() -> Result<()> {
    let cases = [
        ("password", json!("12345")),
        ("role", json!("admin")),
        ("email", json!("not-an-email")),
        ("company", json!("B")),
        ("name", json!("A")),
        ("plan", json!("gold")),
    ];

    for (field, value) in cases {
        let mut payload = contractor_payload();
        payload[field] = value;
        let response = send(test_app(), post_json("/api/auth/login", &payload)?).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "field {field}");
        assert!(set_cookie(&response).is_none(), "field {field}");

        let body = json_body(response).await?;
        assert_eq!(body["ok"], json!(false));
        assert_eq!(body["message"], json!("Invalid login data"));
    }
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_rejected() -> Result<()> {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"email\":"))?;
    let response = send(test_app(), request).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await?;
    assert_eq!(body["ok"], json!(false));
    Ok(())
}

#[tokio::test]
async fn session_endpoint_reflects_cookie() -> Result<()> {
    let response = send(test_app(), get_with_cookie("/api/auth/session", None)?).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await?;
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["session"], Value::Null);

    let cookie = login_cookie(&contractor_payload()).await?;
    let response = send(
        test_app(),
        get_with_cookie("/api/auth/session", Some(&cookie))?,
    )
    .await?;
    let body = json_body(response).await?;
    assert_eq!(body["session"]["email"], json!("anna@bau-ag.ch"));
    assert_eq!(body["session"]["company"], json!("Bau AG"));
    Ok(())
}

#[tokio::test]
async fn garbage_cookie_reads_as_no_session() -> Result<()> {
    let response = send(
        test_app(),
        get_with_cookie("/api/auth/session", Some("probau_session=%7Bnope"))?,
    )
    .await?;
    let body = json_body(response).await?;
    assert_eq!(body["session"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn logout_clears_cookie() -> Result<()> {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/logout")
        .body(Body::empty())?;
    let response = send(test_app(), request).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = set_cookie(&response).unwrap_or_default();
    assert!(cookie.starts_with("probau_session=;"));
    assert!(cookie.contains("Max-Age=0"));

    let body = json_body(response).await?;
    assert_eq!(body, json!({ "ok": true }));
    Ok(())
}

#[tokio::test]
async fn guard_uses_login_cookie() -> Result<()> {
    let cookie = login_cookie(&contractor_payload()).await?;

    let response = send(
        test_app(),
        get_with_cookie("/fr/unternehmer/projekte", Some(&cookie))?,
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await?;
    assert_eq!(body["locale"], json!("fr"));
    assert_eq!(body["page"], json!("/unternehmer/projekte"));

    let response = send(
        test_app(),
        get_with_cookie("/fr/arbeitsgeber", Some(&cookie))?,
    )
    .await?;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/fr/unternehmer")
    );
    Ok(())
}

#[tokio::test]
async fn guard_redirects_anonymous_to_localized_login() -> Result<()> {
    let response = send(
        test_app(),
        get_with_cookie("/en/arbeitsgeber/ausschreibungen?page=2", None)?,
    )
    .await?;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/en/login?next=%2Fen%2Farbeitsgeber%2Fausschreibungen%3Fpage%3D2")
    );
    Ok(())
}

#[tokio::test]
async fn navigation_lists_localized_role_menu() -> Result<()> {
    let cookie = login_cookie(&contractor_payload()).await?;
    let response = send(
        test_app(),
        get_with_cookie("/api/navigation?locale=it", Some(&cookie))?,
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await?;
    assert_eq!(body["locale"], json!("it"));
    let items = body["items"].as_array().cloned().unwrap_or_default();
    assert_eq!(items.len(), 5);
    assert!(items.iter().all(|item| item["href"]
        .as_str()
        .is_some_and(|href| href.starts_with("/it/unternehmer"))));
    Ok(())
}

#[tokio::test]
async fn navigation_without_session_is_empty() -> Result<()> {
    let response = send(test_app(), get_with_cookie("/api/navigation", None)?).await?;
    let body = json_body(response).await?;
    assert_eq!(body["locale"], json!("de"));
    assert_eq!(body["items"], json!([]));
    Ok(())
}

struct EmailAccounts;

impl AccountDirectory for EmailAccounts {
    fn account_id(&self, email: &str, role: Role) -> String {
        format!("{}:{email}", role.as_str())
    }
}

#[tokio::test]
async fn custom_account_directory_supplies_ids() -> Result<()> {
    let config = SessionConfig::default().with_default_locale(Locale::Fr);
    let state = AuthState::new(config, Arc::new(EmailAccounts));
    let response = send(
        app(Arc::new(state)),
        post_json("/api/auth/login", &contractor_payload())?,
    )
    .await?;

    let body = json_body(response).await?;
    assert_eq!(body["session"]["id"], json!("contractor:anna@bau-ag.ch"));
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> Result<()> {
    let response = send(test_app(), get_with_cookie("/api-docs/openapi.json", None)?).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await?;
    assert!(body["paths"].get("/api/auth/login").is_some());
    Ok(())
}
