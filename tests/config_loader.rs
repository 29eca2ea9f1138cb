mod common;

use common::temp_config;
use folio::config::{Config, ConfigError, QuoteSource};
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.rotation.interval_ms, 5000);
    assert_eq!(config.rotation.exit_ms, 300);
    assert_eq!(config.rotation.enter_ms, 300);

    assert_eq!(config.quotes.source, QuoteSource::Portraits);
    assert!(config.quotes.items.is_empty());
    assert!(config.quotes.media_dir.ends_with("assets"));

    assert_eq!(config.chat.base_url, "https://api.aimlapi.com/v1");
    assert_eq!(config.chat.model, "meta-llama/Llama-3.3-70B-Instruct-Turbo-Free");
    assert!(config.chat.api_key.is_none());
    assert_eq!(config.chat.api_key_env, "FOLIO_CHAT_API_KEY");
    assert_eq!(config.chat.max_tokens, 500);
    assert!((config.chat.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(config.chat.timeout(), Duration::from_secs(30));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("folio/config.toml"));
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.rotation.interval_ms, 5000);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[rotation]
interval_ms = 8000

[chat]
model = "custom-model"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.rotation.interval_ms, 8000);
    assert_eq!(config.rotation.exit_ms, 300);
    assert_eq!(config.chat.model, "custom-model");
    assert_eq!(config.chat.max_tokens, 500);
}

#[test]
fn custom_quotes_replace_builtin_list() {
    let (_dir, path) = temp_config(
        r#"
[quotes]
source = "plain"
media_dir = "/srv/portraits"

[[quotes.items]]
body = "Simplicity is prerequisite for reliability."
attribution = "Edsger Dijkstra"
media = "dijkstra.jpg"

[[quotes.items]]
body = "Make it work, make it right, make it fast."
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.quotes.source, QuoteSource::Plain);

    let items = config.quotes.resolve_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].attribution(), Some("Edsger Dijkstra"));
    assert_eq!(
        items[0].media().map(|m| m.path().to_path_buf()),
        Some(std::path::PathBuf::from("dijkstra.jpg"))
    );
    assert_eq!(items[1].attribution(), None);
    assert!(items[1].media().is_none());
}

#[test]
fn quote_source_selects_builtin_shape() {
    let portraits = Config::parse("").unwrap().quotes.resolve_items();
    assert!(portraits.iter().all(|q| q.media().is_some()));

    let plain = Config::parse("[quotes]\nsource = \"plain\"\n")
        .unwrap()
        .quotes
        .resolve_items();
    assert!(!plain.is_empty());
    assert!(plain.iter().all(|q| q.media().is_none()));
    assert!(plain.iter().all(|q| q.attribution().is_some()));
}

#[test]
fn interval_is_clamped_not_rejected() {
    let config = Config::parse("[rotation]\ninterval_ms = 100\n").unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.rotation.interval().as_millis(), 1000);

    let config = Config::parse("[rotation]\ninterval_ms = 999999\n").unwrap();
    assert_eq!(config.rotation.interval().as_millis(), 60_000);
}

#[test]
fn validation_rejects_bad_values() {
    let cases = [
        "[rotation]\ninterval_ms = 0\n",
        "[chat]\nbase_url = \"ftp://example.com\"\n",
        "[chat]\nmax_tokens = 0\n",
        "[chat]\ntemperature = 2.5\n",
        "[chat]\ntimeout_seconds = 0\n",
    ];
    for case in cases {
        let config = Config::parse(case).unwrap();
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "expected validation failure for {case:?}"
        );
    }
}

#[test]
fn load_from_reports_validation_errors() {
    let (_dir, path) = temp_config("[chat]\ntemperature = -1.0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("temperature"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = temp_config("[rotation\ninterval_ms = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn unknown_quote_source_is_a_parse_error() {
    assert!(Config::parse("[quotes]\nsource = \"tweets\"\n").is_err());
}
