use jetreward::config::{Config, ConfigError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn missing_file_gives_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/jetreward/config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn default_values() {
    let config = Config::default();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.data.fetch_latency_ms, 600);
    assert!(config.data.fail_with.is_none());
    assert!(config.share.clipboard);
    assert!(config.share.outbox.is_none());
    assert_eq!(config.profile.email, "learner@dicoding.com");
    assert_eq!(config.logging.level, "info");
    assert!(config.catalog.is_empty());
}

#[test]
fn full_file_is_parsed() {
    let file = write_config(
        r#"
[ui]
tick_rate_ms = 100

[data]
fetch_latency_ms = 0
fail_with = "Server unreachable"

[share]
clipboard = false
outbox = "/tmp/outbox.jsonl"

[profile]
name = "Ada"
email = "ada@example.com"

[logging]
level = "debug"

[[catalog]]
id = 3
image = "reward_3"
title = "Tumbler"
required_point = 3000
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.data.fetch_latency_ms, 0);
    assert_eq!(config.data.fail_with.as_deref(), Some("Server unreachable"));
    assert!(!config.share.clipboard);
    assert_eq!(
        config.share.outbox.as_deref(),
        Some(Path::new("/tmp/outbox.jsonl"))
    );
    assert_eq!(config.profile.name, "Ada");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.catalog.len(), 1);
    assert_eq!(config.catalog[0].title, "Tumbler");
}

#[test]
fn partial_file_keeps_other_defaults() {
    let file = write_config("[profile]\nname = \"Ada\"\n");
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.profile.name, "Ada");
    assert_eq!(config.profile.email, "learner@dicoding.com");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let file = write_config("[ui\ntick_rate_ms = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_tick_rate_is_rejected() {
    let file = write_config("[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn duplicate_catalog_ids_are_rejected() {
    let file = write_config(
        r#"
[[catalog]]
id = 1
image = "a"
title = "A"
required_point = 1

[[catalog]]
id = 1
image = "b"
title = "B"
required_point = 2
"#,
    );
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("Duplicate reward id 1"));
}

#[test]
fn negative_catalog_id_is_rejected() {
    let file = write_config(
        "[[catalog]]\nid = -1\nimage = \"a\"\ntitle = \"A\"\nrequired_point = 1\n",
    );
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::ValidationError { .. })
    ));
}
