//! Loading `config.toml` into [`Settings`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
#[cfg(not(debug_assertions))]
use directories::ProjectDirs;

use crate::models::settings::Settings;

pub const CONFIG_ENV_VAR: &str = "CLINIC_DESK_CONFIG";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Where the config file is read from.
///
/// `CLINIC_DESK_CONFIG` wins when set; otherwise debug builds use the
/// working directory and release builds the platform config directory.
pub fn resolve_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    #[cfg(debug_assertions)]
    {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    #[cfg(not(debug_assertions))]
    {
        if let Some(proj_dirs) = ProjectDirs::from("com", "ClinicDesk", "ClinicDesk") {
            proj_dirs.config_dir().join(CONFIG_FILE_NAME)
        } else {
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }
}

/// Read and validate settings. A missing file is not an error.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    parse_settings(&data)
        .with_context(|| format!("invalid settings in {}", path.display()))
}

pub fn parse_settings(raw: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(raw).context("failed to parse settings")?;
    settings.validate()?;
    Ok(settings)
}

pub fn load_settings_or_default(path: &Path) -> Settings {
    match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ui::ViewType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_view = \"month\"\nwindow_start_hour = 7").unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.window_start_hour, 7);
        assert_eq!(settings.window_end_hour, 20);
        assert_eq!(settings.initial_view(), ViewType::Month);
    }

    #[test]
    fn test_invalid_window_is_rejected_then_defaulted() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "window_start_hour = 21").unwrap();

        assert!(load_settings(file.path()).is_err());
        assert_eq!(load_settings_or_default(file.path()), Settings::default());
    }

    #[test]
    fn test_malformed_toml_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "pixels_per_hour = [oops").unwrap();
        assert_eq!(load_settings_or_default(file.path()), Settings::default());
    }

    #[test]
    fn test_seed_and_anchor_parse() {
        let settings = parse_settings("seed = 9\nanchor_date = \"2026-02-12\"").unwrap();
        assert_eq!(settings.seed, Some(9));
        assert_eq!(
            settings.anchor_date,
            chrono::NaiveDate::from_ymd_opt(2026, 2, 12)
        );
    }
}
