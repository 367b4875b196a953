// src/config.rs
// =============================================================================
// Validated run settings.
//
// The CLI gives us raw strings and numbers; this module checks them once and
// turns them into a `Config` that the rest of the pipeline can trust.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::cli::{Cli, DEFAULT_MIN_CONTENT_CHARS, DEFAULT_TIMEOUT_SECS};

// Problems with the settings the user passed in
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid root URL '{url}': {source}")]
    InvalidRootUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("root URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("page timeout must be greater than zero")]
    ZeroTimeout,

    #[error("output path must not be empty")]
    EmptyOutput,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Entry point of the site, kept exactly as given.
    /// The same-site check compares against this string, so it is never normalized.
    pub root_url: String,
    pub output: PathBuf,
    pub page_timeout: Duration,
    pub min_content_chars: usize,
}

impl Config {
    pub fn new(root_url: impl Into<String>, output: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let config = Config {
            root_url: root_url.into(),
            output: output.into(),
            page_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            min_content_chars: DEFAULT_MIN_CONTENT_CHARS,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Ok(Config::new(cli.root_url.as_str(), cli.output.as_str())?
            .with_page_timeout(Duration::from_secs(cli.timeout_secs))?
            .with_min_content_chars(cli.min_content_chars))
    }

    pub fn with_page_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        self.page_timeout = timeout;
        self.validate()?;
        Ok(self)
    }

    pub fn with_min_content_chars(mut self, min_content_chars: usize) -> Self {
        self.min_content_chars = min_content_chars;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let parsed = Url::parse(&self.root_url).map_err(|source| ConfigError::InvalidRootUrl {
            url: self.root_url.clone(),
            source,
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        if self.page_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutput);
        }

        Ok(())
    }
}
