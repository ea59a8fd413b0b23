#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use nexus_web::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
app:
  nmae: "typo should fail"
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.label, "axum");
    assert_eq!(cfg.app.version, "1.0.0-SNAPSHOT");
    assert_eq!(cfg.app.features.len(), 5);
}

#[test]
fn app_section_overrides() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:0"
  label: "edge"
app:
  name: "Demo"
  features: ["one"]
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 0);
    assert_eq!(cfg.server.label, "edge");
    assert_eq!(cfg.app.name, "Demo");
    assert_eq!(cfg.app.features, vec!["one".to_string()]);
    assert_eq!(cfg.app.packaging, "binary");
}

#[test]
fn bad_listen_rejected() {
    let bad = r#"
version: 1
server:
  listen: "localhost-ish"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn empty_app_name_rejected() {
    let bad = r#"
version: 1
app:
  name: "  "
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn unsupported_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("/definitely/not/here/nexus.yaml").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

#[test]
fn shipped_sample_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../nexus.yaml");
    let cfg = config::load_from_file(path).expect("sample config must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 8080);
}
