use crate::assets::DEFAULT_IMAGE_BASE_URL;
use crate::error::{GiftPlanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// How gift cards are shown: name, image link, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Both,
    Name,
    Image,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewMode::Both => "both",
            ViewMode::Name => "name",
            ViewMode::Image => "image",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ViewMode {
    type Err = GiftPlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "both" => Ok(ViewMode::Both),
            "name" => Ok(ViewMode::Name),
            "image" => Ok(ViewMode::Image),
            other => Err(GiftPlanError::Api(format!(
                "Unknown view mode: {} (expected both, name or image)",
                other
            ))),
        }
    }
}

/// Configuration for giftplan, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Base URL gift, pack and keyword images are resolved against
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    #[serde(default)]
    pub view_mode: ViewMode,

    /// Empty the clipboard after a plan was imported from it
    #[serde(default = "default_true")]
    pub clear_clipboard_after_import: bool,
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            image_base_url: default_image_base_url(),
            view_mode: ViewMode::default(),
            clear_clipboard_after_import: true,
        }
    }
}

impl ViewerConfig {
    pub const KEYS: [&'static str; 3] = ["image-base-url", "view-mode", "clear-clipboard"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GiftPlanError::Io)?;
        let config: ViewerConfig =
            serde_json::from_str(&content).map_err(GiftPlanError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GiftPlanError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GiftPlanError::Serialization)?;
        fs::write(config_path, content).map_err(GiftPlanError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "image-base-url" => Ok(self.image_base_url.clone()),
            "view-mode" => Ok(self.view_mode.to_string()),
            "clear-clipboard" => Ok(self.clear_clipboard_after_import.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "image-base-url" => {
                if value.is_empty() {
                    return Err(GiftPlanError::Api("image-base-url cannot be empty".into()));
                }
                self.image_base_url = value.to_string();
            }
            "view-mode" => self.view_mode = value.parse()?,
            "clear-clipboard" => {
                self.clear_clipboard_after_import = value.parse().map_err(|_| {
                    GiftPlanError::Api(format!("Expected true or false, got {}", value))
                })?
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> GiftPlanError {
    GiftPlanError::Api(format!(
        "Unknown config key: {} (known: {})",
        key,
        ViewerConfig::KEYS.join(", ")
    ))
}
