use crate::errors::{AppError, AppResult};
use crate::models::RecordLayout;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod check; // use submodule at src/config/check.rs

/// Environment variable that points to an alternative config file.
pub const CONFIG_ENV: &str = "RFIDCONV_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input_file")]
    pub input_file: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_done_dir")]
    pub done_dir: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub layout: RecordLayout,
    #[serde(default)]
    pub envelope: bool,
    #[serde(default)]
    pub processing_time: bool,
    #[serde(default)]
    pub dwell: bool,
}

fn default_input_file() -> String {
    "rfid_tags_original.csv".to_string()
}
fn default_output_dir() -> String {
    ".".to_string()
}
fn default_done_dir() -> String {
    "done".to_string()
}
fn default_delimiter() -> char {
    ';'
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            output_dir: default_output_dir(),
            done_dir: default_done_dir(),
            delimiter: default_delimiter(),
            layout: RecordLayout::default(),
            envelope: false,
            processing_time: false,
            dwell: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rfidconv")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rfidconv")
        }
    }

    /// Resolve the config file path: explicit override, then `RFIDCONV_CONFIG`,
    /// then the platform default.
    pub fn config_file(override_path: Option<&str>) -> PathBuf {
        if let Some(p) = override_path {
            return expand_tilde(p);
        }
        match env::var(CONFIG_ENV) {
            Ok(p) if !p.trim().is_empty() => expand_tilde(&p),
            _ => Self::config_dir().join("rfidconv.conf"),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(override_path: Option<&str>) -> AppResult<Self> {
        let path = Self::config_file(override_path);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // An empty file deserializes to `null`; treat it as "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write this configuration to `path`, creating parent directories.
    /// Refuses to replace an existing file unless `force` is set.
    pub fn write_to(&self, path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "configuration file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        if !self.delimiter.is_ascii() {
            return Err(AppError::Config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }
        if self.input_file.trim().is_empty() {
            return Err(AppError::Config("input_file must not be empty".into()));
        }
        if self.done_dir.trim().is_empty() {
            return Err(AppError::Config("done_dir must not be empty".into()));
        }
        Ok(())
    }

    pub fn input_path(&self) -> PathBuf {
        expand_tilde(&self.input_file)
    }

    pub fn output_dir_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    /// Delimiter as a CSV byte. `validate` guarantees it is ASCII.
    pub fn delimiter_byte(&self) -> u8 {
        let mut buf = [0u8; 4];
        self.delimiter.encode_utf8(&mut buf);
        buf[0]
    }
}
