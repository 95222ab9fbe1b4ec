//! Configuration management for Autoprompt CLI
//!
//! Stores default tone/family, saved presets, and remote server settings in
//! ~/.config/autoprompt/config.toml

use anyhow::{Context, Result};
use autoprompt::{ModelFamily, PromptRequest, Tone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "autoprompt";
const CONFIG_FILE: &str = "config.toml";

/// Saved compose inputs. Unset fields fall through to config defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_model_family: Option<ModelFamily>,
}

impl Preset {
    /// Layer `other` on top of `self`; set fields in `other` win
    pub fn overlay(&self, other: &Preset) -> Preset {
        Preset {
            user_goal: other.user_goal.clone().or_else(|| self.user_goal.clone()),
            keywords: other.keywords.clone().or_else(|| self.keywords.clone()),
            tone: other.tone.or(self.tone),
            target_model_family: other.target_model_family.or(self.target_model_family),
        }
    }
}

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tone: Option<Tone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model_family: Option<ModelFamily>,
    #[serde(default)]
    pub presets: BTreeMap<String, Preset>,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_tone: None,
            default_model_family: None,
            presets: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Set API key
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    /// Add or replace a preset
    pub fn add_preset(&mut self, name: String, preset: Preset) {
        self.presets.insert(name, preset);
    }

    /// Remove a preset
    pub fn remove_preset(&mut self, name: &str) -> bool {
        self.presets.remove(name).is_some()
    }

    pub fn get_preset(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    /// Resolve the inputs for a compose run
    ///
    /// Precedence: explicit flags, then the named preset, then config
    /// defaults, then built-in defaults.
    pub fn resolve(&self, preset: Option<&str>, flags: &Preset) -> Result<PromptRequest> {
        let defaults = Preset {
            tone: self.default_tone,
            target_model_family: self.default_model_family,
            ..Preset::default()
        };

        let base = match preset {
            Some(name) => {
                let saved = self
                    .get_preset(name)
                    .with_context(|| format!("Preset '{}' not found", name))?;
                defaults.overlay(saved)
            }
            None => defaults,
        };

        let merged = base.overlay(flags);

        Ok(PromptRequest {
            user_goal: merged.user_goal.unwrap_or_default(),
            keywords: merged.keywords.unwrap_or_default(),
            tone: merged.tone.unwrap_or_default(),
            target_model_family: merged.target_model_family.unwrap_or_default(),
        })
    }
}
