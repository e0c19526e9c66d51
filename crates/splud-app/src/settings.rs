//! Runtime settings loaded from an optional TOML file.
//!
//! Any subset of keys may be given; the rest keep their defaults from
//! `Settings::default()`. With no file at all the defaults are used as-is.

use std::path::Path;

use splud_core::config::Settings;

use crate::error::{AppError, AppResult};

/// Parse settings from TOML text. Out-of-range values are clamped.
pub fn parse_settings(contents: &str, path: &Path) -> AppResult<Settings> {
    toml::from_str::<Settings>(contents)
        .map(Settings::sanitized)
        .map_err(|source| AppError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
}

/// Load settings from `path`, or the defaults when no path is given.
///
/// An explicit path that cannot be read is an error: the user asked for it.
pub fn load_settings(path: Option<&Path>) -> AppResult<Settings> {
    let Some(path) = path else {
        tracing::info!("no settings file given; using defaults");
        return Ok(Settings::default());
    };

    let contents = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&contents, path)?;
    tracing::info!(
        path = %path.display(),
        difficulty = ?settings.difficulty,
        weapon = ?settings.selected_weapon,
        "loaded settings"
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use splud_core::enums::{Difficulty, WeaponKind};

    #[test]
    fn test_missing_keys_keep_defaults() {
        let settings = parse_settings("difficulty = \"hard\"\n", Path::new("t.toml")).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings, Settings {
            difficulty: Difficulty::Hard,
            ..Default::default()
        });
    }

    #[test]
    fn test_full_file() {
        let text = r#"
volume = 0.8
difficulty = "easy"
player_speed = 175.0
selected_weapon = "Wand01"
"#;
        let settings = parse_settings(text, Path::new("t.toml")).unwrap();
        assert_eq!(settings.volume, 0.8);
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert_eq!(settings.player_speed, 175.0);
        assert_eq!(settings.selected_weapon, WeaponKind::Wand01);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let settings =
            parse_settings("volume = 4.0\nplayer_speed = -3.0\n", Path::new("t.toml")).unwrap();
        assert_eq!(settings.volume, 1.0);
        assert_eq!(settings.player_speed, Settings::default().player_speed);
    }

    #[test]
    fn test_nan_volume_falls_back_to_default() {
        let settings = parse_settings("volume = nan\n", Path::new("t.toml")).unwrap();
        assert_eq!(settings.volume, splud_core::constants::DEFAULT_VOLUME);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = parse_settings("difficulty = \"brutal\"\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, AppError::SettingsParse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_settings(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let err = load_settings(Some(Path::new("/definitely/not/here/settings.toml"))).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
