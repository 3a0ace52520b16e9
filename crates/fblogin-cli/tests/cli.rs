//! CLI tests against mock providers.
//!
//! The binary is run as a child process pointed at a wiremock server that
//! plays both the Graph API and the Auth0 tenant.

use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FBLOGIN_ENV: &[&str] = &[
    "FBLOGIN_ACCESS_TOKEN",
    "FBLOGIN_USER_ID",
    "FBLOGIN_FACEBOOK_APP_ID",
    "FBLOGIN_GRAPH_URL",
    "FBLOGIN_GRAPH_VERSION",
    "FBLOGIN_AUTH0_DOMAIN",
    "FBLOGIN_AUTH0_CLIENT_ID",
    "FBLOGIN_SCOPE",
    "FBLOGIN_AUDIENCE",
];

/// Run the CLI binary with arguments and a clean FBLOGIN_* environment.
fn run_cli(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fblogin"));
    cmd.args(args);
    for var in FBLOGIN_ENV {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI off the async runtime so the mock server keeps serving.
async fn run_cli_async(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli(&args)
    })
    .await
    .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn server_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}", server.address().port())
}

fn facebook_args(server: &MockServer) -> Vec<String> {
    vec![
        "--access-token".into(),
        "fb-abc".into(),
        "--user-id".into(),
        "1000".into(),
        "--graph-url".into(),
        server_url(server),
    ]
}

fn exchange_args(server: &MockServer) -> Vec<String> {
    let mut args = vec!["exchange".to_string()];
    args.extend(facebook_args(server));
    args.extend([
        "--facebook-app-id".into(),
        "app-id".into(),
        "--auth0-domain".into(),
        server_url(server),
        "--auth0-client-id".into(),
        "auth0-client".into(),
    ]);
    args
}

async fn mount_session_token(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/oauth/access_token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "sess-xyz-0123456789"})),
        )
        .mount(server)
        .await;
}

async fn mount_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/1000"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com","id":"1000"}"#,
        ))
        .mount(server)
        .await;
}

async fn mount_credentials(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at-1",
            "id_token": "id-1",
            "token_type": "Bearer",
            "expires_in": 86400
        })))
        .mount(server)
        .await;
}

#[test]
fn test_permissions() {
    let output = run_cli(&["permissions"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("public_profile"));
    assert!(out.contains("email"));
}

#[test]
fn test_permissions_json() {
    let output = run_cli(&["permissions", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["permissions"], json!(["public_profile", "email"]));
    assert_eq!(value["profile_fields"], "first_name,last_name,email");
}

#[test]
fn test_exchange_requires_access_token() {
    let output = run_cli(&["exchange", "--user-id", "1000"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--access-token"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_exchange_json() {
    let server = MockServer::start().await;
    mount_session_token(&server).await;
    mount_profile(&server).await;
    mount_credentials(&server).await;

    let mut args = exchange_args(&server);
    args.push("--json".into());
    let output = run_cli_async(args).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["access_token"], "at-1");
    assert_eq!(value["id_token"], "id-1");
    assert_eq!(value["token_type"], "Bearer");
    assert_eq!(value["scope"], "openid email profile offline_access");
    assert!(value["expires_at"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_exchange_masks_tokens() {
    let server = MockServer::start().await;
    mount_session_token(&server).await;
    mount_profile(&server).await;
    mount_credentials(&server).await;

    let mut args = exchange_args(&server);
    args.push("--trace-states".into());
    let output = run_cli_async(args).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Logged in to Auth0"));
    assert!(out.contains("(4 chars)"));
    assert!(!out.contains("at-1"));

    let err = stderr(&output);
    assert!(err.contains("awaiting-profile"));
    assert!(err.contains("done"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_exchange_reports_failed_stage() {
    let server = MockServer::start().await;
    mount_session_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/1000"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"message": "Permissions error", "type": "OAuthException", "code": 200}
        })))
        .mount(&server)
        .await;

    let output = run_cli_async(exchange_args(&server)).await;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("profile-fetch"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_session_token_show_tokens() {
    let server = MockServer::start().await;
    mount_session_token(&server).await;

    let mut args = vec!["session-token".to_string()];
    args.extend(facebook_args(&server));
    args.extend(["--facebook-app-id".into(), "app-id".into(), "--show-tokens".into()]);
    let output = run_cli_async(args).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("sess-xyz-0123456789"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_profile_verbatim() {
    let server = MockServer::start().await;
    mount_profile(&server).await;

    let mut args = vec!["profile".to_string()];
    args.extend(facebook_args(&server));
    let output = run_cli_async(args).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output).trim(),
        r#"{"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com","id":"1000"}"#
    );
}

#[test]
fn test_version_matches_package() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        format!("fblogin {}", env!("CARGO_PKG_VERSION"))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_exchange_show_tokens() {
    let server = MockServer::start().await;
    mount_session_token(&server).await;
    mount_profile(&server).await;
    mount_credentials(&server).await;

    let mut args = exchange_args(&server);
    args.push("--show-tokens".into());
    let output = run_cli_async(args).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("at-1"));
    assert!(out.contains("id-1"));
    assert!(!out.contains("chars)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_exchange_auth_rejection_hint() {
    let server = MockServer::start().await;
    mount_session_token(&server).await;
    mount_profile(&server).await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid subject token"
        })))
        .mount(&server)
        .await;

    let output = run_cli_async(exchange_args(&server)).await;
    assert!(!output.status.success());

    let err = stderr(&output);
    assert!(err.contains("credential-exchange"));
    assert!(err.contains("Auth0 rejected the grant"));
    assert!(err.contains("invalid_grant"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_session_token_masked_by_default() {
    let server = MockServer::start().await;
    mount_session_token(&server).await;

    let mut args = vec!["session-token".to_string()];
    args.extend(facebook_args(&server));
    args.extend(["--facebook-app-id".into(), "app-id".into()]);
    let output = run_cli_async(args).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("sess-x… (19 chars)"));
    assert!(!out.contains("sess-xyz-0123456789"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_profile_pretty() {
    let server = MockServer::start().await;
    mount_profile(&server).await;

    let mut args = vec!["profile".to_string()];
    args.extend(facebook_args(&server));
    args.push("--pretty".into());
    let output = run_cli_async(args).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.trim().lines().count() > 1);

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "id": "1000"
        })
    );
}
