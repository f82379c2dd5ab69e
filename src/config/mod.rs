use crate::errors::{AppError, AppResult};
use crate::models::schedule::WeekSchedule;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Restaurant settings persisted as YAML in the per-user config directory.
/// The weekly schedule lives here; the evaluator receives it as a plain
/// value and never reads this module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_restaurant_name")]
    pub restaurant_name: String,
    #[serde(default)]
    pub closure_note: Option<String>,
    #[serde(default = "WeekSchedule::default_week")]
    pub opening_hours: WeekSchedule,
}

fn default_restaurant_name() -> String {
    "My Restaurant".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            restaurant_name: default_restaurant_name(),
            closure_note: None,
            opening_hours: WeekSchedule::default_week(),
        }
    }
}

impl Settings {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ropensign")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".ropensign")
        }
    }

    /// Return the full path of the settings file
    pub fn settings_file() -> PathBuf {
        Self::config_dir().join("settings.yml")
    }

    /// Load settings from an explicit path (the global `--hours` override)
    /// or from the standard location. A missing file yields the defaults;
    /// an unreadable or unparsable file is an error.
    pub fn load(custom_path: Option<&str>) -> AppResult<Self> {
        let path = match custom_path {
            Some(p) => PathBuf::from(p),
            None => Self::settings_file(),
        };

        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::SettingsLoad)?;
        let settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to an explicit path or the standard location,
    /// creating the parent directory when needed.
    pub fn save(&self, custom_path: Option<&str>) -> AppResult<()> {
        let path = match custom_path {
            Some(p) => PathBuf::from(p),
            None => Self::settings_file(),
        };

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::SettingsSave)?;
        fs::write(&path, yaml)?;
        Ok(())
    }

    /// Initialize the settings file with the default week, refusing to
    /// clobber an existing one.
    pub fn init_all(custom_path: Option<&str>) -> AppResult<PathBuf> {
        let path = match custom_path {
            Some(p) => PathBuf::from(p),
            None => Self::settings_file(),
        };

        if path.exists() {
            return Err(AppError::Config(format!(
                "settings file already exists: {}",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml =
            serde_yaml::to_string(&Settings::default()).map_err(|_| AppError::SettingsSave)?;
        fs::write(&path, yaml)?;
        Ok(path)
    }

    /// Resolved settings path for display purposes
    pub fn resolved_path(custom_path: Option<&str>) -> PathBuf {
        match custom_path {
            Some(p) => Path::new(p).to_path_buf(),
            None => Self::settings_file(),
        }
    }
}
