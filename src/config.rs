//! Configuration types for pokedex-loader

use crate::error::{Error, Result};
use crate::pagination::PaginationState;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Remote API settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL records are fetched from; `{base}/{id}` is requested per record
    /// (default: "https://pokeapi.co/api/v2/pokemon/")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds, fractions allowed (None = wait indefinitely)
    #[serde(default, with = "optional_duration_serde")]
    pub request_timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            request_timeout: None,
        }
    }
}

impl ApiConfig {
    /// Parsed base URL, normalized to end with a slash so IDs join below it
    pub fn parsed_base_url(&self) -> Result<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw)
            .map_err(|e| Error::config("base_url", format!("{}: {}", self.base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(Error::config(
                "base_url",
                format!("{} cannot be used as a base URL", self.base_url),
            ));
        }
        Ok(url)
    }
}

/// Page size and offset settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// First ID of the initial page (default: 1)
    #[serde(default = "default_start_offset")]
    pub start_offset: u32,

    /// Records per page (default: 5)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Move the offset past a page even when its batch failed (default: true)
    ///
    /// When false, a failed "load more" requests the same range again on the
    /// next call.
    #[serde(default = "default_true")]
    pub advance_on_failure: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            start_offset: default_start_offset(),
            page_size: default_page_size(),
            advance_on_failure: true,
        }
    }
}

/// Main configuration for PokedexLoader
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl Config {
    /// Parse a configuration from JSON; absent fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check the configuration for values the loader cannot work with
    pub fn validate(&self) -> Result<()> {
        self.api.parsed_base_url()?;
        if self.api.request_timeout == Some(Duration::ZERO) {
            return Err(Error::config("request_timeout", "must be greater than 0"));
        }
        PaginationState::from_config(&self.pagination)?;
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2/pokemon/".to_string()
}

fn default_user_agent() -> String {
    concat!("pokedex-loader/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_start_offset() -> u32 {
    1
}

fn default_page_size() -> usize {
    5
}

fn default_true() -> bool {
    true
}

mod optional_duration_serde {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs_f64()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<f64>::deserialize(deserializer)?
            .map(|secs| {
                Duration::try_from_secs_f64(secs)
                    .map_err(|e| D::Error::custom(format!("invalid timeout {secs}: {e}")))
            })
            .transpose()
    }
}
