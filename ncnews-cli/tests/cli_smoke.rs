//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("ncnews").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("endpoints"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("ncnews").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PostgreSQL connection string"))
        .stdout(predicate::str::contains("--max-connections"));
}

#[test]
fn test_serve_requires_database_url() {
    let mut cmd = Command::cargo_bin("ncnews").unwrap();
    cmd.env_remove("DATABASE_URL")
        .current_dir(std::env::temp_dir())
        .arg("serve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_endpoints_prints_document() {
    let mut cmd = Command::cargo_bin("ncnews").unwrap();
    cmd.arg("endpoints");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"GET /api/articles\""))
        .stdout(predicate::str::contains("DELETE /api/comments/:comment_id"));
}
