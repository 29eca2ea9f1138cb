use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::ui::section::Section;

/// Terminal portfolio with rotating quotes, projects and skills.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/folio/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Rotation cadence in milliseconds, clamped to 1000..=60000 (0 is rejected)
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Section shown at startup
    #[arg(long, value_enum, default_value_t = Section::Hero)]
    pub section: Section,

    /// Never contact the chat API
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Ask the assistant one question, print the answer and exit
    #[arg(long, value_name = "MESSAGE")]
    pub ask: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(interval_ms) = self.interval_ms {
            config.rotation.interval_ms = interval_ms;
        }
    }
}
