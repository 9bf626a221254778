//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::options::{is_valid_dictionary_name, Options, Recipe};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub dictionary: DictionarySettings,
    #[serde(default)]
    presets: BTreeMap<String, PresetSettings>,
}

impl Settings {
    /// Recipe of a preset defined in the settings file.
    pub fn preset(&self, name: &str) -> Option<Recipe> {
        self.presets
            .get(name)
            .map(|p| Recipe::new(p.stages.clone()))
    }

    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionarySettings {
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize)]
struct PresetSettings {
    stages: Vec<Vec<String>>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn invalid(field: String, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let ext = &s.dictionary.extension;
    if ext.is_empty() || ext.contains(['.', '/', '\\']) {
        return Err(invalid(
            "dictionary.extension".to_string(),
            "must be a bare extension like \"hcd\"",
        ));
    }

    for (name, preset) in &s.presets {
        let field = format!("presets.{name}");
        if Options::preset(name).is_some() {
            return Err(invalid(field, "shadows a built-in preset"));
        }
        if preset.stages.iter().all(Vec::is_empty) {
            return Err(invalid(field, "must name at least one dictionary"));
        }
        if let Some(bad) = preset
            .stages
            .iter()
            .flatten()
            .find(|n| !is_valid_dictionary_name(n))
        {
            return Err(invalid(field, &format!("invalid dictionary name {bad:?}")));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.dictionary.extension, "hcd");
        let tw2t = s.preset("tw2t").unwrap();
        assert_eq!(
            tw2t.stages(),
            [vec!["TWVariantsRevPhrases".to_string(), "TWVariantsRev".to_string()]]
        );
        assert!(s.preset("s2t").is_none());
        assert!(s.preset_names().any(|n| n == "t2jp"));
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[dictionary]
extension = "bin"

[presets.s2jp]
stages = [["STPhrases", "STCharacters"], [], ["JPVariants"]]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.dictionary.extension, "bin");
        assert_eq!(s.preset("s2jp").unwrap().stages().len(), 3);
        assert!(s.preset("tw2t").is_none());
    }

    #[test]
    fn reject_missing_section() {
        let result = parse_settings_toml("[presets]\n");
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn reject_invalid_toml() {
        let result = parse_settings_toml("not valid toml {{{");
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn reject_bad_extension() {
        let toml = "[dictionary]\nextension = \".hcd\"\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("dictionary.extension"));
    }

    #[test]
    fn reject_builtin_shadow() {
        let toml = r#"
[dictionary]
extension = "hcd"

[presets.s2t]
stages = [["STCharacters"]]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("presets.s2t"));
    }

    #[test]
    fn reject_empty_preset() {
        let toml = r#"
[dictionary]
extension = "hcd"

[presets.none]
stages = [[], []]
"#;
        assert!(matches!(
            parse_settings_toml(toml),
            Err(SettingsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn reject_path_in_dictionary_name() {
        let toml = r#"
[dictionary]
extension = "hcd"

[presets.escape]
stages = [["../secret"]]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("../secret"));
    }
}
