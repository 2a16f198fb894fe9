use std::fs;
use std::path::Path;

use kana_config::Config;
use serde::{Deserialize, Serialize};

/// Represents a saved learner profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Profile files may be wrapped with a name or hold the bare config
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileFile {
    Named(Profile),
    Bare(Config),
}

/// Loads the configuration, from `path` when given, else from the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No profile given, using environment defaults");
        return Ok(Config::new());
    };

    if !path.exists() {
        tracing::warn!("Profile {} not found, using environment defaults", path.display());
        return Ok(Config::new());
    }

    let data = fs::read_to_string(path)?;
    let file: ProfileFile = serde_json::from_str(&data)?;
    let config = match file {
        ProfileFile::Named(profile) => {
            tracing::info!("Loaded profile {}", profile.name);
            profile.value
        }
        ProfileFile::Bare(config) => {
            tracing::info!("Loaded profile from {}", path.display());
            config
        }
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use kana_types::ScriptMode;

    use super::*;

    fn temp_profile(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("kana-{}-{name}.json", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn named_profile_unwraps_its_value() {
        let path = temp_profile(
            "named",
            r#"{ "name": "evening", "value": { "ui": { "script_mode": "hiragana" } } }"#,
        );

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.ui.script_mode, ScriptMode::Hiragana);
        assert_eq!(config.quiz.auto_advance_ms, 1500);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn bare_config_is_accepted() {
        let path = temp_profile("bare", r#"{ "quiz": { "auto_advance_ms": 900, "seed": 4 } }"#);

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.quiz.auto_advance_ms, 900);
        assert_eq!(config.quiz.seed, Some(4));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("kana-profile-that-does-not-exist.json");
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.event_channel_capacity, 64);
    }

    #[test]
    fn malformed_profile_is_an_error() {
        let path = temp_profile("broken", "{ not json");
        assert!(load_config(Some(&path)).is_err());
        fs::remove_file(path).unwrap();
    }
}
