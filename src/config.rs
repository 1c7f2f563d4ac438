use crate::search::{
    build_search_links, SearchLinks, DEFAULT_STORE_TEMPLATE, DEFAULT_WEB_TEMPLATE,
    QUERY_PLACEHOLDER,
};
use anyhow::{bail, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "foldersweep";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub delete: DeleteConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_root: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_store_template")]
    pub store_template: String,
    #[serde(default = "default_web_template")]
    pub web_template: String,
}

fn default_store_template() -> String {
    DEFAULT_STORE_TEMPLATE.to_string()
}

fn default_web_template() -> String {
    DEFAULT_WEB_TEMPLATE.to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            store_template: default_store_template(),
            web_template: default_web_template(),
        }
    }
}

impl SearchConfig {
    /// Search links for `name`. A hand-edited file can carry templates
    /// without `{query}`; those fall back to the built-in pair.
    pub fn links(&self, name: &str) -> SearchLinks {
        if self.store_template.contains(QUERY_PLACEHOLDER)
            && self.web_template.contains(QUERY_PLACEHOLDER)
        {
            return SearchLinks::for_templates(name, &self.store_template, &self.web_template);
        }
        warn!("search templates lack {}, using the defaults", QUERY_PLACEHOLDER);
        build_search_links(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteConfig {
    #[serde(default = "default_true")]
    pub log_history: bool,
    #[serde(default = "default_true")]
    pub confirm_before_delete: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DeleteConfig {
    fn default() -> Self {
        Self {
            log_history: true,
            confirm_before_delete: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Applies one `config set` assignment. The config is left untouched on error.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default_root" => {
                let trimmed = value.trim();
                self.general.default_root = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                };
            }
            "store_template" => self.search.store_template = checked_template(value)?,
            "web_template" => self.search.web_template = checked_template(value)?,
            "log_history" => self.delete.log_history = parse_bool(value)?,
            "confirm_before_delete" => self.delete.confirm_before_delete = parse_bool(value)?,
            _ => bail!(
                "Unknown key: {}. Available keys: default_root, store_template, web_template, log_history, confirm_before_delete",
                key
            ),
        }
        Ok(())
    }
}

fn checked_template(value: &str) -> Result<String> {
    if !value.contains(QUERY_PLACEHOLDER) {
        bail!("Search template must contain {}", QUERY_PLACEHOLDER);
    }
    Ok(value.to_string())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => bail!("Expected true or false, got {}", other),
    }
}
