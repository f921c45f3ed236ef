//! Configuration file loading for the CLI
//!
//! Finds and loads the TOML configuration from an explicit path, the local
//! project directory or the platform config directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use pinbox::{PinboxError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for PinboxError {
    fn from(err: ConfigError) -> Self {
        PinboxError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (pinbox/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or has an unusable page size
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, PinboxError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("pinbox/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "pinbox", "pinbox") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Apply command line page size overrides to `config`.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] if the resulting page has a
/// non-positive or non-finite side.
pub fn apply_page_overrides(
    config: &mut AppConfig,
    width: Option<f32>,
    height: Option<f32>,
) -> Result<(), PinboxError> {
    if let Some(width) = width {
        config.page_mut().set_width(width);
    }
    if let Some(height) = height {
        config.page_mut().set_height(height);
    }
    validate_page(config)?;
    Ok(())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, PinboxError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_page(&config)?;

    Ok(config)
}

fn validate_page(config: &AppConfig) -> Result<(), ConfigError> {
    let page = config.page();
    for (side, value) in [("width", page.width()), ("height", page.height())] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "page {side} must be a positive number, got {value}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_explicit_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [text]
            font_size = 14

            [style]
            background_color = "white"

            [page]
            width = 400
            "#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.text().font_size(), 14);
        assert_eq!(config.text().font_family(), "sans-serif");
        assert!(config.style().background_color().unwrap().is_some());
        assert_eq!(config.page().width(), 400.0);
        assert_eq!(config.page().height(), 320.0);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, PinboxError::Config(ref msg) if msg.starts_with("Missing")));
    }

    #[test]
    fn test_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[page\nwidth = ").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, PinboxError::Config(ref msg) if msg.starts_with("Failed to parse")));
    }

    #[test]
    fn test_page_overrides_are_validated() {
        let mut config = AppConfig::default();
        apply_page_overrides(&mut config, Some(500.0), None).unwrap();
        assert_eq!(config.page().width(), 500.0);
        assert_eq!(config.page().height(), 320.0);

        let err = apply_page_overrides(&mut config, None, Some(0.0)).unwrap_err();
        assert!(matches!(err, PinboxError::Config(ref msg) if msg.contains("page height")));
    }
}
