//! End-to-end CLI integration tests.

use std::net::TcpListener;
use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;

fn fibseq() -> Command {
    let mut cmd = Command::cargo_bin("fibseq").expect("binary not found");
    cmd.env_remove("FIBSEQ_LISTEN")
        .env_remove("FIBSEQ_REDIS_URL")
        .env_remove("FIBSEQ_NO_CACHE")
        .env_remove("FIBSEQ_CACHE_TIMEOUT")
        .timeout(Duration::from_secs(20));
    cmd
}

#[test]
fn help_flag() {
    fibseq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"))
        .stdout(predicate::str::contains("--redis-url"));
}

#[test]
fn version_flag() {
    fibseq()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibseq"));
}

#[test]
fn completion_bash() {
    fibseq()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibseq"));
}

#[test]
fn address_in_use_is_fatal() {
    let taken = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = taken.local_addr().unwrap().to_string();

    fibseq()
        .args(["--listen", &addr, "--no-cache"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("failed to bind"));
}

#[test]
fn unparsable_listen_address_is_fatal() {
    fibseq()
        .args(["--listen", "not-an-address", "--no-cache"])
        .assert()
        .failure()
        .code(5);
}

#[test]
fn invalid_cache_timeout() {
    fibseq()
        .args(["--cache-timeout", "soon", "--no-cache"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid cache timeout"));
}

#[test]
fn overflowing_cache_timeout_is_a_config_error() {
    fibseq()
        .args(["--cache-timeout", "307445734561825861m", "--no-cache"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid cache timeout"));
}

#[test]
fn invalid_redis_url() {
    fibseq()
        .args(["--listen", "127.0.0.1:0", "--redis-url", "not a url"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid redis url"));
}
