//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.pillars.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PILLARS_API_BASE`, `PILLARS_DEFAULT_PILLAR`,
//!    `PILLARS_REQUEST_TIMEOUT_SECONDS`
//! 4. **Command-line arguments** – `--api-base`/`-a`, `--default-pillar`/`-p`,
//!    `--request-timeout-seconds`, `--telemetry`/`-T`
//!
//! # Configuration File
//!
//! ```toml
//! api_base = "https://example.execute-api.us-east-1.amazonaws.com/Prod"
//! default_pillar = "Security"
//! request_timeout_seconds = 30
//! telemetry = true
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::questionnaire::{DEFAULT_PILLAR, QuestionnaireError};

/// Base URL of the reference questionnaire deployment.
pub const DEFAULT_API_BASE: &str = "https://o14jesaum9.execute-api.us-east-1.amazonaws.com/Prod";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use pillars::PillarsConfig;
///
/// let config = PillarsConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be consistent");
/// println!("service: {}", config.api_base());
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PILLARS",
    discovery(
        dotfile_name = ".pillars.toml",
        config_file_name = "pillars.toml",
        app_name = "pillars"
    )
)]
pub struct PillarsConfig {
    /// Base URL of the questionnaire service.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base <URL>` or `-a <URL>`
    /// - Environment: `PILLARS_API_BASE`
    /// - Config file: `api_base = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_base: Option<String>,

    /// Per-request timeout in seconds.
    ///
    /// When unset, requests use the HTTP transport's default behaviour.
    ///
    /// Can be provided via:
    /// - CLI: `--request-timeout-seconds <SECONDS>`
    /// - Environment: `PILLARS_REQUEST_TIMEOUT_SECONDS`
    /// - Config file: `request_timeout_seconds = 30`
    #[ortho_config()]
    pub request_timeout_seconds: Option<u64>,

    /// Pillar tab shown first.
    ///
    /// Falls back to the first loaded pillar when the loaded question set
    /// does not contain it.
    ///
    /// Can be provided via:
    /// - CLI: `--default-pillar <NAME>` or `-p <NAME>`
    /// - Environment: `PILLARS_DEFAULT_PILLAR`
    /// - Config file: `default_pillar = "..."`
    #[ortho_config(cli_short = 'p')]
    pub default_pillar: Option<String>,

    /// Writes JSONL telemetry events to stderr once the form has closed.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry` / `-T`
    /// - Config file: `telemetry = true`
    ///
    /// Note: Environment variable `PILLARS_TELEMETRY` is not supported
    /// because `ortho_config` does not load boolean values from the environment.
    #[ortho_config(cli_short = 'T')]
    pub telemetry: bool,
}

impl PillarsConfig {
    /// Returns the configured service base URL or the reference deployment.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Returns the configured default pillar or `Operational Excellence`.
    #[must_use]
    pub fn default_pillar(&self) -> &str {
        self.default_pillar.as_deref().unwrap_or(DEFAULT_PILLAR)
    }

    /// Returns the per-request timeout, if one was configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }

    /// Validates configuration consistency.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionnaireError::Configuration`] when the API base is not
    /// an absolute HTTP(S) URL, the timeout is zero, or the default pillar is
    /// blank.
    pub fn validate(&self) -> Result<(), QuestionnaireError> {
        let api_base = self.api_base();
        let url = Url::parse(api_base).map_err(|error| QuestionnaireError::Configuration {
            message: format!("api_base '{api_base}' is not a valid URL: {error}"),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(QuestionnaireError::Configuration {
                message: format!("api_base must use http or https (got '{}')", url.scheme()),
            });
        }

        if self.request_timeout_seconds == Some(0) {
            return Err(QuestionnaireError::Configuration {
                message: "request_timeout_seconds must be greater than zero".to_owned(),
            });
        }

        if self.default_pillar().trim().is_empty() {
            return Err(QuestionnaireError::Configuration {
                message: "default_pillar must not be blank".to_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
