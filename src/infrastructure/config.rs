use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};

use crate::{presentation::config::keybindings, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const DEFAULT_API_URL: &str = "https://api.unsplash.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Largest page size the photo API accepts
pub const MAX_PER_PAGE: u32 = 30;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default = "empty_secret", deserialize_with = "deserialize_secret")]
    pub access_key: SecretString,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            keybindings: keybindings::KeyBindings::default(),
            access_key: empty_secret(),
            api_url: default_api_url(),
            per_page: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl Config {
    /// Settings bundled with the binary, without an access key
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::error!("No configuration file found in {}", config_dir.display());
            return Err(ConfigError::Message(format!(
                "No configuration file found. Create {} with an `access_key`",
                config_dir.join("config.json5").display()
            )));
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merged_with(default_config)
    }

    /// Fill in defaults the user left out and validate the result
    fn merged_with(mut self, default_config: Config) -> Result<Self, ConfigError> {
        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            self.keybindings.entry(keyseq.clone()).or_insert(*action);
        }

        if self.access_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::NotFound(String::from("access_key")));
        }

        if self.api_url.trim().is_empty() {
            self.api_url.clone_from(&default_config.api_url);
        }

        if let Some(per_page) = self.per_page {
            if per_page == 0 || per_page > MAX_PER_PAGE {
                return Err(ConfigError::Message(format!(
                    "per_page must be between 1 and {MAX_PER_PAGE}, got {per_page}"
                )));
            }
        }

        Ok(self)
    }
}
