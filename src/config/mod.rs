//! Configuration system (layered: code > env > config file).

use std::fmt;
use std::path::{Path, PathBuf};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{PictoraError, Result};

/// Model used when the configuration names none.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";

pub const ENV_BASE_URL: &str = "PICTORA_IMAGE_BASE_URL";
pub const ENV_API_KEY: &str = "PICTORA_IMAGE_API_KEY";
pub const ENV_MODEL: &str = "PICTORA_IMAGE_MODEL";

/// Connection settings for the image endpoint.
///
/// Every field is optional so that partial layers can be merged; completeness
/// is checked when a request is made.
///
/// ```
/// use pictora::config::ImageApiConfig;
///
/// let config = ImageApiConfig::builder()
///     .base_url("https://api.example.com/v1")
///     .api_key("sk-test")
///     .build();
/// assert_eq!(config.model_name_or_default(), pictora::config::DEFAULT_IMAGE_MODEL);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageApiConfig {
    #[builder(into)]
    pub base_url: Option<String>,
    #[builder(into)]
    pub api_key: Option<String>,
    #[builder(into)]
    pub model_name: Option<String>,
}

impl fmt::Debug for ImageApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    image_api: ImageApiConfig,
}

impl ImageApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            api_key: Some(api_key.into()),
            model_name: None,
        }
    }

    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }

    /// The configured model, or [`DEFAULT_IMAGE_MODEL`] when unset or
    /// whitespace-only.
    pub fn model_name_or_default(&self) -> &str {
        non_blank(self.model_name.as_deref()).unwrap_or(DEFAULT_IMAGE_MODEL)
    }

    /// The API key with surrounding whitespace removed.
    ///
    /// A whitespace-only key counts as unset, so `"  "` fails the
    /// completeness check instead of being sent.
    pub fn api_key(&self) -> Option<&str> {
        non_blank(self.api_key.as_deref()).map(str::trim)
    }

    /// Load from environment variables (`PICTORA_IMAGE_*`), reading `.env` if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            base_url: var(ENV_BASE_URL),
            api_key: var(ENV_API_KEY),
            model_name: var(ENV_MODEL),
        }
    }

    /// Load the `[image_api]` table of a TOML file. A missing file is an empty config.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };
        let file: ConfigFile = toml::from_str(&raw).map_err(|err| {
            PictoraError::Configuration(format!("{}: {err}", path.display()))
        })?;
        Ok(file.image_api)
    }

    /// `~/.pictora/config.toml`.
    pub fn default_path() -> PathBuf {
        directories::UserDirs::new()
            .map(|dirs| dirs.home_dir().join(".pictora"))
            .unwrap_or_else(|| PathBuf::from(".pictora"))
            .join("config.toml")
    }

    /// Environment layered over the default config file.
    pub fn load() -> Result<Self> {
        Ok(Self::from_env().merge(Self::from_file(&Self::default_path())?))
    }

    /// Fill fields missing (or blank) in `self` from `fallback`.
    pub fn merge(self, fallback: Self) -> Self {
        fn pick(primary: Option<String>, fallback: Option<String>) -> Option<String> {
            primary.filter(|v| !v.trim().is_empty()).or(fallback)
        }
        Self {
            base_url: pick(self.base_url, fallback.base_url),
            api_key: pick(self.api_key, fallback.api_key),
            model_name: pick(self.model_name, fallback.model_name),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
