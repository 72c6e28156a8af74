//! Site configuration.
//!
//! Pages may embed a `<script type="application/json" id="siteConfig">`
//! block to override any of these values. Every key is optional and uses
//! camelCase; missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_CONTACT_ENDPOINT, DEFAULT_ERASE_DELAY_MS, DEFAULT_HOLD_DELAY_MS, DEFAULT_MOBILE_BREAKPOINT_PX,
    DEFAULT_NEXT_PHRASE_DELAY_MS, DEFAULT_PHRASES, DEFAULT_SUBMIT_TIMEOUT_MS, DEFAULT_TYPE_DELAY_MS,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config block is not valid JSON for `SiteConfig`.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// The config parsed but holds a value the page cannot run with.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub contact_endpoint: String,
    pub submit_timeout_ms: u32,
    pub mobile_breakpoint_px: u32,
    pub typing: TypingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_owned(),
            submit_timeout_ms: DEFAULT_SUBMIT_TIMEOUT_MS,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            typing: TypingConfig::default(),
        }
    }
}

/// Phrases and pacing for the home page typing effect.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub type_delay_ms: u32,
    pub erase_delay_ms: u32,
    pub hold_delay_ms: u32,
    pub next_phrase_delay_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
            type_delay_ms: DEFAULT_TYPE_DELAY_MS,
            erase_delay_ms: DEFAULT_ERASE_DELAY_MS,
            hold_delay_ms: DEFAULT_HOLD_DELAY_MS,
            next_phrase_delay_ms: DEFAULT_NEXT_PHRASE_DELAY_MS,
        }
    }
}

impl SiteConfig {
    /// Build config from the raw text of the page's config block.
    ///
    /// `None` or whitespace-only input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for an empty endpoint, a zero timeout or an
    /// empty phrase list.
    pub fn from_json(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Ok(Self::default());
        };
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.contact_endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("contactEndpoint must not be empty"));
        }
        if self.submit_timeout_ms == 0 {
            return Err(ConfigError::Invalid("submitTimeoutMs must be positive"));
        }
        if self.typing.phrases.is_empty() {
            return Err(ConfigError::Invalid("typing.phrases must not be empty"));
        }
        Ok(())
    }
}
