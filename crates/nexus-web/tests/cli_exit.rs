//! Process-level startup failures: the binary must exit non-zero.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::net::TcpListener;

use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("nexus-web").unwrap();
    cmd.env_remove("NEXUS_CONFIG").env_remove("NEXUS_LISTEN");
    cmd
}

#[test]
fn port_in_use_exits_with_status_1() {
    let held = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = held.local_addr().unwrap().to_string();

    cmd()
        .args(["--listen", &addr])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("bind failed"))
        .stderr(contains(addr.as_str()));
}

#[test]
fn invalid_listen_exits_with_status_1() {
    cmd()
        .args(["--listen", "not-an-addr"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("server.listen"));
}

#[test]
fn missing_config_file_exits_with_status_1() {
    cmd()
        .args(["--config", "/definitely/not/here/nexus.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("read config"));
}
