// Runtime settings, read from the environment at startup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use macroquad::text::{Font, load_ttf_font_from_bytes};

use crate::logging::LoggingConfig;

// Optional TTF font for numerals, score and greeting.
pub const FONT_VAR: &str = "GLASS_CLOCK_FONT";
// Optional log filter; wins over RUST_LOG.
pub const LOG_VAR: &str = "GLASS_CLOCK_LOG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub font_path: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl Settings {
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    // Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Settings {
        let get = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());
        Settings {
            font_path: get(FONT_VAR).map(PathBuf::from),
            log_filter: get(LOG_VAR),
        }
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            env_filter: self.log_filter.clone(),
            ..Default::default()
        }
    }
}

// Read and parse a TTF font from disk.
pub fn load_font(path: &Path) -> Result<Font> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    load_ttf_font_from_bytes(&bytes)
        .map_err(|e| anyhow!("parsing font {}: {e}", path.display()))
}
