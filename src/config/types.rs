use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::content;
use crate::rotation::{
    CarouselSettings, ContentItem, RotationInterval, TransitionTiming,
    DEFAULT_ROTATION_INTERVAL_MS,
};

/// Root configuration container.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub quotes: QuotesConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Cadence and animation timing shared by every carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Time between automatic advances (default: 5000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Fade-out length of the outgoing item (default: 300).
    #[serde(default = "default_fade_ms")]
    pub exit_ms: u64,
    /// Fade-in length of the incoming item (default: 300).
    #[serde(default = "default_fade_ms")]
    pub enter_ms: u64,
}

/// Which built-in quote list to rotate through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSource {
    /// Quotes with author and portrait.
    #[default]
    Portraits,
    /// The plain "text - author" list.
    Plain,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuotesConfig {
    #[serde(default)]
    pub source: QuoteSource,
    /// Directory portrait paths are resolved against (default: "assets").
    #[serde(default = "default_media_dir")]
    pub media_dir: PathBuf,
    /// Custom quotes; when non-empty they replace the built-in list.
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

/// Chat completion endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// OpenAI-compatible API root; `/chat/completions` is appended.
    #[serde(default = "default_chat_base_url")]
    pub base_url: String,
    #[serde(default = "default_chat_model")]
    pub model: String,
    /// Direct API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Whole-request timeout in seconds (default: 30).
    #[serde(default = "default_chat_timeout")]
    pub timeout_seconds: u64,
}

fn default_interval_ms() -> u64 {
    DEFAULT_ROTATION_INTERVAL_MS
}

fn default_fade_ms() -> u64 {
    300
}

fn default_media_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_chat_base_url() -> String {
    "https://api.aimlapi.com/v1".to_string()
}

fn default_chat_model() -> String {
    "meta-llama/Llama-3.3-70B-Instruct-Turbo-Free".to_string()
}

fn default_api_key_env() -> String {
    "FOLIO_CHAT_API_KEY".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_chat_timeout() -> u64 {
    30
}

impl RotationConfig {
    pub fn interval(&self) -> RotationInterval {
        RotationInterval::from_millis(self.interval_ms)
    }

    pub fn timing(&self) -> TransitionTiming {
        TransitionTiming::new(
            Duration::from_millis(self.exit_ms),
            Duration::from_millis(self.enter_ms),
        )
    }

    pub fn carousel_settings(&self) -> CarouselSettings {
        CarouselSettings {
            interval: self.interval(),
            timing: self.timing(),
        }
    }
}

impl QuotesConfig {
    /// The quotes to rotate: custom items when given, else the built-in
    /// list named by `source`. Both shapes come out as plain content items.
    pub fn resolve_items(&self) -> Vec<ContentItem> {
        if !self.items.is_empty() {
            return self.items.clone();
        }
        match self.source {
            QuoteSource::Portraits => content::portrait_quotes(),
            QuoteSource::Plain => content::plain_quotes(),
        }
    }
}

impl ChatConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            exit_ms: default_fade_ms(),
            enter_ms: default_fade_ms(),
        }
    }
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            source: QuoteSource::default(),
            media_dir: default_media_dir(),
            items: Vec::new(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: default_chat_base_url(),
            model: default_chat_model(),
            api_key: None,
            api_key_env: default_api_key_env(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_seconds: default_chat_timeout(),
        }
    }
}
