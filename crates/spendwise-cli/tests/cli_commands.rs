use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn base_cmd(home: &Path, server: &Server) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spendwise"));
    cmd.env("HOME", home)
        .env_remove("SPENDWISE_PASSWORD")
        .env_remove("SPENDWISE_USERNAME")
        .env_remove("SPENDWISE_TIMEOUT_SECS")
        .args([
            "--api-url",
            &format!("{}/api", server.url()),
            "--credentials-file",
            credentials_path(home).to_str().expect("utf-8 path"),
        ]);
    cmd
}

fn credentials_path(home: &Path) -> PathBuf {
    home.join("tokens.json")
}

fn write_tokens(home: &Path, access: &str, refresh: &str) {
    let body = json!({ "access_token": access, "refresh_token": refresh });
    fs::write(credentials_path(home), body.to_string()).expect("write tokens");
}

fn read_tokens(home: &Path) -> serde_json::Value {
    let contents = fs::read_to_string(credentials_path(home)).expect("read tokens");
    serde_json::from_str(&contents).expect("token json")
}

#[test]
fn login_stores_both_tokens() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let login = server
        .mock("POST", "/api/auth/login/")
        .match_body(Matcher::Json(json!({ "username": "alice", "password": "s3cret" })))
        .with_status(200)
        .with_body(json!({ "access": "A1", "refresh": "R1" }).to_string())
        .create();

    base_cmd(home_dir.path(), &server)
        .env("SPENDWISE_PASSWORD", "s3cret")
        .args(["login", "--username", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as alice"));

    let tokens = read_tokens(home_dir.path());
    assert_eq!(tokens["access_token"], "A1");
    assert_eq!(tokens["refresh_token"], "R1");
    login.assert();
}

#[test]
fn login_prompts_for_missing_username() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let login = server
        .mock("POST", "/api/auth/login/")
        .match_body(Matcher::Json(json!({ "username": "bob", "password": "pw" })))
        .with_status(200)
        .with_body(json!({ "access": "A1", "refresh": "R1" }).to_string())
        .create();

    base_cmd(home_dir.path(), &server)
        .args(["login", "--password", "pw"])
        .write_stdin("bob\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as bob"))
        .stderr(predicate::str::contains("Username: "));
    login.assert();
}

#[test]
fn rejected_login_fails_without_tokens() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("POST", "/api/auth/login/")
        .with_status(401)
        .with_body(r#"{"detail":"No active account found with the given credentials"}"#)
        .create();

    base_cmd(home_dir.path(), &server)
        .args(["login", "--username", "alice", "--password", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("401"));

    assert!(!credentials_path(home_dir.path()).exists());
}

#[test]
fn expenses_list_prints_table_with_bearer_token() {
    let home_dir = tempdir().expect("tempdir");
    write_tokens(home_dir.path(), "A1", "R1");
    let mut server = Server::new();
    server
        .mock("GET", "/api/expenses/")
        .match_header("authorization", "Bearer A1")
        .match_query(Matcher::UrlEncoded("category".into(), "1,3".into()))
        .with_status(200)
        .with_body(
            json!({
                "count": 1,
                "results": [{
                    "id": 12,
                    "amount": "4.20",
                    "description": "Bus ticket",
                    "category_name": "Transport",
                    "date": "2024-06-01",
                    "created_at": "2024-06-01T08:00:00Z"
                }]
            })
            .to_string(),
        )
        .create();

    base_cmd(home_dir.path(), &server)
        .args(["expenses", "list", "--category", "1,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DESCRIPTION"))
        .stdout(predicate::str::contains("Bus ticket"))
        .stdout(predicate::str::contains("Transport"));
}

#[test]
fn expired_session_is_refreshed_and_saved() {
    let home_dir = tempdir().expect("tempdir");
    write_tokens(home_dir.path(), "A1", "R1");
    let mut server = Server::new();
    let expired = server
        .mock("GET", "/api/categories/")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .create();
    let refresh = server
        .mock("POST", "/api/auth/refresh/")
        .match_body(Matcher::Json(json!({ "refresh": "R1" })))
        .with_status(200)
        .with_body(json!({ "access": "A2", "refresh": "R2" }).to_string())
        .expect(1)
        .create();
    server
        .mock("GET", "/api/categories/")
        .match_header("authorization", "Bearer A2")
        .with_status(200)
        .with_body(
            json!([{
                "id": 3,
                "name": "Groceries",
                "description": null,
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            }])
            .to_string(),
        )
        .create();

    base_cmd(home_dir.path(), &server)
        .args(["--json", "categories", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Groceries\""));

    let tokens = read_tokens(home_dir.path());
    assert_eq!(tokens["access_token"], "A2");
    assert_eq!(tokens["refresh_token"], "R2");
    expired.assert();
    refresh.assert();
}

#[test]
fn failed_refresh_clears_stored_session() {
    let home_dir = tempdir().expect("tempdir");
    write_tokens(home_dir.path(), "A1", "R1");
    let mut server = Server::new();
    server
        .mock("GET", "/api/reports/summary/")
        .with_status(401)
        .create();
    server
        .mock("POST", "/api/auth/refresh/")
        .with_status(401)
        .with_body(r#"{"detail":"Token is invalid or expired"}"#)
        .create();

    base_cmd(home_dir.path(), &server)
        .args(["report"])
        .assert()
        .failure();

    let tokens = read_tokens(home_dir.path());
    assert!(tokens.get("access_token").is_none());
    assert!(tokens.get("refresh_token").is_none());
}

#[test]
fn missing_refresh_token_suggests_login() {
    let home_dir = tempdir().expect("tempdir");
    fs::write(
        credentials_path(home_dir.path()),
        json!({ "access_token": "A1" }).to_string(),
    )
    .expect("write tokens");
    let mut server = Server::new();
    server
        .mock("GET", "/api/expenses/")
        .with_status(401)
        .create();
    let refresh = server
        .mock("POST", "/api/auth/refresh/")
        .expect(0)
        .create();

    base_cmd(home_dir.path(), &server)
        .args(["expenses", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("run `spendwise login`"))
        .stderr(predicate::str::contains("no refresh token stored"));
    refresh.assert();
}

#[test]
fn logout_then_status_reports_signed_out() {
    let home_dir = tempdir().expect("tempdir");
    write_tokens(home_dir.path(), "A1", "R1");
    let server = Server::new();

    base_cmd(home_dir.path(), &server)
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in"));

    base_cmd(home_dir.path(), &server)
        .args(["logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    base_cmd(home_dir.path(), &server)
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"authenticated\": false"));
}

#[test]
fn expense_create_sends_typed_body() {
    let home_dir = tempdir().expect("tempdir");
    write_tokens(home_dir.path(), "A1", "R1");
    let mut server = Server::new();
    let create = server
        .mock("POST", "/api/expenses/")
        .match_header("authorization", "Bearer A1")
        .match_body(Matcher::Json(json!({
            "amount": "15.00",
            "description": "Dinner",
            "category_id": 2,
            "date": "2024-07-04"
        })))
        .with_status(201)
        .with_body(
            json!({
                "id": 30,
                "amount": "15.00",
                "description": "Dinner",
                "category": {
                    "id": 2,
                    "name": "Food",
                    "description": null,
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-01-01T00:00:00Z"
                },
                "date": "2024-07-04",
                "user": "alice",
                "created_at": "2024-07-04T19:00:00Z",
                "updated_at": "2024-07-04T19:00:00Z"
            })
            .to_string(),
        )
        .create();

    base_cmd(home_dir.path(), &server)
        .args([
            "expenses",
            "create",
            "--amount",
            "15.00",
            "--description",
            "Dinner",
            "--category-id",
            "2",
            "--date",
            "2024-07-04",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 30"));
    create.assert();
}

#[test]
fn report_prints_summary_json() {
    let home_dir = tempdir().expect("tempdir");
    write_tokens(home_dir.path(), "A1", "R1");
    let mut server = Server::new();
    server
        .mock("GET", "/api/reports/summary/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("date_from".into(), "2024-01-01".into()),
            Matcher::UrlEncoded("date_to".into(), "2024-01-31".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "total_amount": 310.0,
                "total_count": 4,
                "category_totals": [
                    { "category__name": "Rent", "category__id": 1, "total": 300.0, "count": 1 }
                ],
                "average_daily": 10.0,
                "filters": {
                    "category": null,
                    "date_from": "2024-01-01",
                    "date_to": "2024-01-31",
                    "description": null
                }
            })
            .to_string(),
        )
        .create();

    base_cmd(home_dir.path(), &server)
        .args(["report", "--date-from", "2024-01-01", "--date-to", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category__name\": \"Rent\""))
        .stdout(predicate::str::contains("\"total_count\": 4"));
}

#[test]
fn update_without_fields_is_rejected() {
    let home_dir = tempdir().expect("tempdir");
    let server = Server::new();

    base_cmd(home_dir.path(), &server)
        .args(["expenses", "update", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to update"));
}
