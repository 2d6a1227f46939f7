use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ListingError, ListingResult};

pub mod default;
pub mod fonts;
pub mod properties;
pub mod selectors;

pub const DEFAULT_MAX_CSS_LEN: usize = 12_000;
pub const DEFAULT_MAX_FONTS: usize = 3;
pub const DEFAULT_FONT_WEIGHTS: [u16; 3] = [400, 600, 700];
pub const DEFAULT_RATE_LIMIT_RETRY_DELAY_MS: u64 = 2_000;

/// Allowlists and limits for the presentation layer a model is allowed to style.
#[derive(Clone, Debug)]
pub struct StyleConfig {
    pub allowed_selectors: HashSet<&'static str>,
    pub allowed_properties: HashSet<&'static str>,
    pub allowed_fonts: HashSet<&'static str>,
    /// Stripped from the raw stylesheet before it is parsed.
    pub banned_tokens: Vec<&'static str>,
    /// A declaration whose value contains one of these is dropped.
    pub banned_value_tokens: Vec<&'static str>,
    /// Function names that can load external resources.
    pub blocked_functions: HashSet<&'static str>,
    pub max_len: usize,
}

/// Runtime knobs, read from TOML. Every field has a default so an empty file is valid.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub max_css_len: usize,
    pub max_fonts: usize,
    pub font_weights: Vec<u16>,
    pub rate_limit_retry_delay_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            max_css_len: DEFAULT_MAX_CSS_LEN,
            max_fonts: DEFAULT_MAX_FONTS,
            font_weights: DEFAULT_FONT_WEIGHTS.to_vec(),
            rate_limit_retry_delay_ms: DEFAULT_RATE_LIMIT_RETRY_DELAY_MS,
        }
    }
}

impl RenderConfig {
    pub fn load(path: &Path) -> ListingResult<RenderConfig> {
        let contents = fs::read_to_string(path)?;
        RenderConfig::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> ListingResult<RenderConfig> {
        let config: RenderConfig =
            toml::from_str(contents).map_err(|e| ListingError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ListingResult<()> {
        if self.max_css_len == 0 {
            return Err(ListingError::Config(
                "max_css_len must be greater than zero".to_string(),
            ));
        }
        if self.max_fonts == 0 {
            return Err(ListingError::Config(
                "max_fonts must be greater than zero".to_string(),
            ));
        }
        if self.font_weights.is_empty() {
            return Err(ListingError::Config(
                "font_weights must list at least one weight".to_string(),
            ));
        }
        if let Some(weight) = self
            .font_weights
            .iter()
            .find(|w| !(100..=900).contains(*w) || *w % 100 != 0)
        {
            return Err(ListingError::Config(format!(
                "font weight {} is not one of 100, 200, ..., 900",
                weight
            )));
        }
        Ok(())
    }

    pub fn rate_limit_retry_delay(&self) -> Duration {
        Duration::from_millis(self.rate_limit_retry_delay_ms)
    }

    /// The listing style profile with this config's output cap applied.
    pub fn style_config(&self) -> StyleConfig {
        let mut config = default::LISTING_STYLE_CONFIG.clone();
        config.max_len = self.max_css_len;
        config
    }
}
