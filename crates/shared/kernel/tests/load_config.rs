use lbites_domain::config::ApiConfig;
use lbites_kernel::config::load_config;
use std::fs;

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");

    let cfg: ApiConfig =
        load_config(Some(dir.path().join("server"))).expect("defaults without file");

    assert_eq!(cfg.server.port, 8000);
    assert_eq!(cfg.app.name, "LocoBites");
    assert!(cfg.features.as_set().is_empty());
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("server.toml"),
        r#"
[server]
port = 8443

[app]
environment = "staging"

[features]
loyalty = true
"#,
    )
    .expect("write config");

    let cfg: ApiConfig = load_config(Some(dir.path().join("server"))).expect("load");

    assert_eq!(cfg.server.port, 8443);
    assert_eq!(cfg.app.environment.as_str(), "staging");
    assert!(cfg.features.loyalty);
    // Untouched sections keep their defaults.
    assert_eq!(cfg.client.timeout_ms, 30_000);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("server.toml"), "[server\nport = oops").expect("write config");

    let result: Result<ApiConfig, _> = load_config(Some(dir.path().join("server")));
    assert!(result.is_err());
}
