//! Deployment configuration loaded from a RON file.

use std::fs;
use std::path::Path;

use anyhow::Context;
use board_core::{
    Axes, LinkTemplate, LinkTemplateError, MatchPolicy, QuickFilter, ShortcutGuard, WidgetConfig,
};
use board_engine::FieldNames;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILENAME: &str = "board.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PolicyPreset {
    Strict,
    Loose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum GuardConfig {
    #[default]
    CounterText,
    ComputedCount,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub category: bool,
    pub employment_type: bool,
    pub location: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            category: true,
            employment_type: true,
            location: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortcutConfig {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub counter_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub feed_url: String,
    pub job_board_url: String,
    pub language: String,
    pub display_language: String,
    pub policy: PolicyPreset,
    /// Overrides the preset's count label behaviour when set.
    pub update_count_text: Option<bool>,
    /// `schedule` or `seniority`, depending on the feed variant.
    pub type_field: String,
    pub controls: ControlsConfig,
    pub shortcuts: Vec<ShortcutConfig>,
    pub shortcut_guard: GuardConfig,
    pub log_to_file: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            feed_url: "https://acme.jobs.personio.com/xml".to_string(),
            job_board_url: "https://acme.jobs.personio.com".to_string(),
            language: "de".to_string(),
            display_language: "en".to_string(),
            policy: PolicyPreset::Strict,
            update_count_text: None,
            type_field: "schedule".to_string(),
            controls: ControlsConfig::default(),
            shortcuts: Vec::new(),
            shortcut_guard: GuardConfig::default(),
            log_to_file: false,
        }
    }
}

impl BoardConfig {
    pub fn widget_config(&self) -> Result<WidgetConfig, LinkTemplateError> {
        let links = LinkTemplate::new(
            &self.job_board_url,
            self.language.clone(),
            self.display_language.clone(),
        )?;

        let mut policy = match self.policy {
            PolicyPreset::Strict => MatchPolicy::strict(),
            PolicyPreset::Loose => MatchPolicy::loose(),
        };
        if let Some(update_count_text) = self.update_count_text {
            policy = policy.with_count_text(update_count_text);
        }

        let controls = Axes {
            category: self.controls.category,
            employment_type: self.controls.employment_type,
            location: self.controls.location,
        };
        let shortcuts = self
            .shortcuts
            .iter()
            .map(|s| QuickFilter {
                name: s.name.clone(),
                location: s.location.clone(),
                counter_text: s.counter_text.clone(),
            })
            .collect();
        let guard = match self.shortcut_guard {
            GuardConfig::CounterText => ShortcutGuard::CounterText,
            GuardConfig::ComputedCount => ShortcutGuard::ComputedCount,
        };

        Ok(WidgetConfig::new(self.feed_url.clone(), links)
            .with_policy(policy)
            .with_controls(controls)
            .with_shortcuts(shortcuts, guard))
    }

    pub fn field_names(&self) -> FieldNames {
        FieldNames::with_type_field(self.type_field.clone())
    }
}

/// Where the loaded config came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigSource {
    File,
    /// No file at the path; defaults were used.
    Defaults,
}

/// Reads the config at `path`. A missing file yields the defaults.
pub(crate) fn load_config(path: &Path) -> anyhow::Result<(BoardConfig, ConfigSource)> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok((BoardConfig::default(), ConfigSource::Defaults));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {}", path.display()))
        }
    };

    let config = ron::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok((config, ConfigSource::File))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_config_fills_defaults() {
        let config: BoardConfig = ron::from_str(
            r#"(
                feed_url: "https://statworx.jobs.personio.com/xml",
                policy: Loose,
                controls: (category: false),
                shortcuts: [
                    (name: "munich", location: "München", counter_text: Some("0 open Positions")),
                    (name: "remote", location: "Remote"),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(config.policy, PolicyPreset::Loose);
        assert_eq!(config.type_field, "schedule");
        assert!(!config.controls.category);
        assert!(config.controls.location);
        assert_eq!(config.shortcuts[1].counter_text, None);

        let widget = config.widget_config().unwrap();
        assert_eq!(widget.policy, MatchPolicy::loose());
        assert!(!widget.controls.category);
        assert_eq!(widget.shortcuts.len(), 2);
    }

    #[test]
    fn count_text_override_applies_to_preset() {
        let config = BoardConfig {
            policy: PolicyPreset::Loose,
            update_count_text: Some(true),
            ..BoardConfig::default()
        };
        assert!(config.widget_config().unwrap().policy.update_count_text);
    }

    #[test]
    fn bad_job_board_url_is_rejected() {
        let config = BoardConfig {
            job_board_url: "nonsense".to_string(),
            ..BoardConfig::default()
        };
        assert!(config.widget_config().is_err());
    }

    #[test]
    fn missing_file_uses_defaults_and_bad_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(DEFAULT_CONFIG_FILENAME);
        assert_eq!(
            load_config(&missing).unwrap(),
            (BoardConfig::default(), ConfigSource::Defaults)
        );

        let mut file = fs::File::create(&missing).unwrap();
        file.write_all(b"(policy: Sideways)").unwrap();
        assert!(load_config(&missing).is_err());

        fs::write(&missing, "(log_to_file: true)").unwrap();
        let (config, source) = load_config(&missing).unwrap();
        assert!(config.log_to_file);
        assert_eq!(source, ConfigSource::File);
    }

    #[test]
    fn seniority_feeds_map_field_names() {
        let config = BoardConfig {
            type_field: "seniority".to_string(),
            ..BoardConfig::default()
        };
        assert_eq!(config.field_names(), FieldNames::seniority());
    }
}
