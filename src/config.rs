use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// One seed notification from config. `kind` is a free-form label; anything
/// outside the known set renders with the default icon and color.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct NotificationSeed {
    pub title: String,
    pub message: String,
    pub kind: String,
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_total_pages")]
    pub total_pages: usize,
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
    #[serde(default)]
    pub notifications: Vec<NotificationSeed>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            total_pages: default_total_pages(),
            confirm_delete: default_confirm_delete(),
            notifications: Vec::new(),
        }
    }
}

fn default_total_pages() -> usize {
    9
}

fn default_confirm_delete() -> bool {
    true
}

#[derive(Clone, Debug)]
pub struct Config {
    pub path: PathBuf,
    pub total_pages: usize,
    pub confirm_delete: bool,
    pub notifications: Vec<NotificationSeed>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            let default = ConfigFile::default();
            let toml = toml::to_string_pretty(&default)?;
            if let Some(parent) = path.parent() { fs::create_dir_all(parent)?; }
            fs::write(&path, toml)?;
        }
        let content = fs::read_to_string(&path).with_context(|| format!("Reading {:?}", &path))?;
        let cfg: ConfigFile = toml::from_str(&content).with_context(|| "Parsing config TOML")?;
        Ok(Self {
            path,
            total_pages: cfg.total_pages.max(1),
            confirm_delete: cfg.confirm_delete,
            notifications: cfg.notifications,
        })
    }
}

fn config_path() -> Result<PathBuf> {
    let base = config_dir().context("Could not determine config directory")?;
    Ok(base.join("notidesk").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(cfg.total_pages, 9);
        assert!(cfg.confirm_delete);
        assert!(cfg.notifications.is_empty());
    }

    #[test]
    fn seed_entries_parse_with_optional_read_flag() {
        let cfg: ConfigFile = toml::from_str(
            r#"
total_pages = 4

[[notifications]]
title = "Backup finished"
message = "Nightly backup completed."
kind = "system_alert"
timestamp = "5 minutes ago"

[[notifications]]
title = "Custom event"
message = "Something bespoke."
kind = "billing_overdue"
timestamp = "1 hour ago"
read = true
"#,
        )
        .unwrap();
        assert_eq!(cfg.total_pages, 4);
        assert_eq!(cfg.notifications.len(), 2);
        assert!(!cfg.notifications[0].read);
        assert!(cfg.notifications[1].read);
    }
}
