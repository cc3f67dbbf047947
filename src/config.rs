// ABOUTME: Configuration module for the slider application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::build::{BuildConfig, NamingScheme};
use crate::convert::{default_chain, Converter};
use crate::stylesheet::OverwritePolicy;
use std::env;
use std::path::PathBuf;

/// Shared defaults, used by both [`Config`] and [`BuildConfig`] so the
/// two cannot drift apart.
pub const DEFAULT_SLIDE_LIST: &str = "slider.txt";
pub const DEFAULT_STYLESHEET_PATH: &str = "slider.css";
pub const DEFAULT_PREFIX: &str = "slider";
pub const DEFAULT_TIMEOUT_MS: u64 = 30000; // 30 seconds

/// Global configuration for the application
pub struct Config {
    pub converters: Vec<Converter>,
    pub converter_timeout_ms: u64,
    pub overwrite_policy: OverwritePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            converters: default_chain(),
            converter_timeout_ms: DEFAULT_TIMEOUT_MS,
            overwrite_policy: OverwritePolicy::Prompt,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let converters = env::var("SLIDER_CONVERTERS")
            .ok()
            .map(|s| parse_converter_list(&s))
            .filter(|c| !c.is_empty())
            .unwrap_or_else(default_chain);
        let converter_timeout_ms = env::var("SLIDER_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            converters,
            converter_timeout_ms,
            overwrite_policy: OverwritePolicy::Prompt,
        }
    }

    /// Get a build configuration with defaults from this config
    #[allow(clippy::too_many_arguments)]
    pub fn get_build_config(
        &self,
        slide_list: Option<PathBuf>,
        stylesheet: Option<PathBuf>,
        prefix: Option<String>,
        naming: Option<NamingScheme>,
        output_dir: Option<PathBuf>,
        converters: Option<Vec<Converter>>,
        overwrite_policy: Option<OverwritePolicy>,
        require_unique_names: bool,
    ) -> BuildConfig {
        let defaults = BuildConfig::default();
        BuildConfig {
            slide_list: slide_list.unwrap_or(defaults.slide_list),
            stylesheet: stylesheet.unwrap_or(defaults.stylesheet),
            prefix: prefix.unwrap_or(defaults.prefix),
            naming: naming.unwrap_or(defaults.naming),
            output_dir: output_dir.unwrap_or(defaults.output_dir),
            converters: converters.unwrap_or_else(|| self.converters.clone()),
            converter_timeout_ms: self.converter_timeout_ms,
            overwrite_policy: overwrite_policy.unwrap_or(self.overwrite_policy),
            require_unique_names,
        }
    }
}

/// Parse a comma-separated converter list; `builtin` names the
/// in-process comrak renderer.
pub fn parse_converter_list(spec: &str) -> Vec<Converter> {
    spec.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(Converter::from_spec)
        .collect()
}
