//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use folio::config::ChatConfig;
use folio::rotation::{CarouselSettings, RotationInterval, TransitionTiming};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Chat settings pointing at a mock backend.
pub fn chat_config(base_url: &str) -> ChatConfig {
    ChatConfig {
        base_url: base_url.to_string(),
        model: "test-model".to_string(),
        api_key: Some("test-key".to_string()),
        timeout_seconds: 5,
        ..ChatConfig::default()
    }
}

/// 5000 ms cadence with instant fades, so opacity never gets in the way.
pub fn settings_5s() -> CarouselSettings {
    CarouselSettings {
        interval: RotationInterval::from_millis(5000),
        timing: TransitionTiming::instant(),
    }
}

/// Clock helper: `at(t0, 2000)` is t0 + 2 s.
pub fn at(t0: Instant, ms: u64) -> Instant {
    t0 + Duration::from_millis(ms)
}
