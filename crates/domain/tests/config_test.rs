use answer_dns_domain::config::LogFormat;
use answer_dns_domain::{CliOverrides, Config, ConfigError};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.dns_port, 53);
    assert!(config.server.tcp_enabled);
    assert_eq!(config.dns.default_ttl, 600);
    assert_eq!(config.dns.upstream_timeout_ms, 2000);
    assert_eq!(config.answers.path, "answers.json");
    assert!(config.answers.reload_on_sighup);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
}

#[test]
fn test_config_empty_toml_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.dns.default_ttl, 600);
}

#[test]
fn test_config_deserialization_with_all_fields() {
    let toml_str = r#"
        [server]
        bind_address = "127.0.0.1"
        dns_port = 5353
        tcp_enabled = false

        [dns]
        default_ttl = 30
        upstream_timeout_ms = 750

        [answers]
        path = "/etc/answer-dns/answers.json"
        reload_on_sighup = false

        [logging]
        level = "debug"
        format = "json"
    "#;

    let config = Config::from_toml(toml_str).unwrap();

    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.server.dns_port, 5353);
    assert!(!config.server.tcp_enabled);
    assert_eq!(config.dns.default_ttl, 30);
    assert_eq!(config.dns.upstream_timeout_ms, 750);
    assert_eq!(config.answers.path, "/etc/answer-dns/answers.json");
    assert!(!config.answers.reload_on_sighup);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_config_partial_section_keeps_other_defaults() {
    let config = Config::from_toml("[dns]\ndefault_ttl = 5\n").unwrap();

    assert_eq!(config.dns.default_ttl, 5);
    assert_eq!(config.dns.upstream_timeout_ms, 2000);
    assert_eq!(config.server.dns_port, 53);
}

#[test]
fn test_config_invalid_toml_is_parse_error() {
    let result = Config::from_toml("[server\ndns_port = 53");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_missing_explicit_file_is_read_error() {
    let result = Config::load(
        Some("/nonexistent/answer-dns/config.toml"),
        CliOverrides::default(),
    );
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_cli_overrides_win() {
    let mut config = Config::default();
    config.apply_cli_overrides(CliOverrides {
        dns_port: Some(10053),
        bind_address: Some("::".to_string()),
        answers_path: Some("/tmp/answers.json".to_string()),
        default_ttl: Some(1),
        log_level: Some("trace".to_string()),
    });

    assert_eq!(config.server.dns_port, 10053);
    assert_eq!(config.server.bind_address, "::");
    assert_eq!(config.answers.path, "/tmp/answers.json");
    assert_eq!(config.dns.default_ttl, 1);
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_listen_address_brackets_ipv6() {
    let mut config = Config::default();
    assert_eq!(config.server.listen_address(), "0.0.0.0:53");

    config.server.bind_address = "::".to_string();
    assert_eq!(config.server.listen_address(), "[::]:53");
}

#[test]
fn test_validate_rejects_port_zero() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = Config::default();
    config.dns.upstream_timeout_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_accepts_defaults() {
    assert!(Config::default().validate().is_ok());
}
