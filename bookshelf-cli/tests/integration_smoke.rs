//! Smoke tests for argument and configuration handling

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from any .env file or configuration in the environment
fn bookshelf(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bookshelf").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("DATABASE_URL")
        .env_remove("BOOKSHELF_DATABASE")
        .env_remove("BOOKSHELF_COLLECTION")
        .env_remove("BOOKSHELF_BIND")
        .env_remove("BOOKSHELF_TRUSTED_PROXIES");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    bookshelf(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("ping"));
}

#[test]
fn test_serve_help() {
    let dir = TempDir::new().unwrap();
    bookshelf(&dir)
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DATABASE_URL"))
        .stdout(predicate::str::contains("trusted to set X-Forwarded-For"));
}

#[test]
fn test_serve_without_database_url_fails() {
    let dir = TempDir::new().unwrap();
    bookshelf(&dir)
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_serve_rejects_malformed_bind() {
    let dir = TempDir::new().unwrap();
    bookshelf(&dir)
        .args(["serve", "--in-memory", "--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_serve_rejects_malformed_trusted_proxies() {
    let dir = TempDir::new().unwrap();
    bookshelf(&dir)
        .args(["serve", "--in-memory"])
        .env("BOOKSHELF_TRUSTED_PROXIES", "192.168.1.999")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_ping_rejects_malformed_uri() {
    let dir = TempDir::new().unwrap();
    bookshelf(&dir)
        .args(["ping", "--database-url", "not-a-mongo-uri"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create database client"));
}

#[test]
fn test_database_url_read_from_dotenv() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".env"), "DATABASE_URL=not-a-mongo-uri\n").unwrap();

    // The URL from .env is used (and rejected), rather than reported missing
    bookshelf(&dir)
        .arg("ping")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create database client"));
}
