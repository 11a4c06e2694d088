use crate::core::dirs::get_config_directory;
use crate::core::error::{Result, VcsOverlayError};
use crate::core::vcs::{KindProfile, VcsKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Persisted per-project settings.
///
/// Stored under the user config directory, one subdirectory per project root
/// (keyed by a hash of the root path) so unrelated checkouts never share a VCS
/// kind or executable override.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    /// Which version control system drives the overlay
    pub vcs: VcsKind,
    /// Whether status badges are rendered at all
    pub overlay: bool,
    /// Hide badges for paths without local changes
    pub only_changed: bool,
    /// Console client override; the kind's default executable when unset
    pub console_exe: Option<String>,
    /// Graphical tool override; the kind's default executable when unset
    pub gui_exe: Option<String>,
    /// Wall-clock bound on one status query
    pub status_timeout_secs: u64,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vcs: VcsKind::Svn,
            overlay: true,
            only_changed: false,
            console_exe: None,
            gui_exe: None,
            status_timeout_secs: 15,
            last_updated: chrono::Utc::now(),
        }
    }
}

impl Settings {
    pub fn load_or_create(project_root: &Path) -> Result<Self> {
        let settings_file = Self::settings_file(project_root)?;

        if settings_file.exists() {
            let content = std::fs::read_to_string(&settings_file)
                .map_err(|source| VcsOverlayError::settings_read_failed(&settings_file, source))?;
            serde_json::from_str(&content)
                .map_err(|source| VcsOverlayError::settings_parse_failed(&settings_file, source))
        } else {
            let settings = Self::default();
            settings.save(project_root)?;
            Ok(settings)
        }
    }

    pub fn save(&self, project_root: &Path) -> Result<()> {
        let settings_file = Self::settings_file(project_root)?;
        if let Some(dir) = settings_file.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|source| VcsOverlayError::settings_dir_creation_failed(dir, source))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_file, content)
            .map_err(|source| VcsOverlayError::settings_write_failed(&settings_file, source))?;

        Ok(())
    }

    /// Location of this project's settings file
    pub fn settings_file(project_root: &Path) -> Result<PathBuf> {
        let root_hash = format!("{:x}", md5::compute(project_root.to_string_lossy().as_bytes()));
        Ok(get_config_directory()?.join(root_hash).join("config.json"))
    }

    /// Profile of the configured VCS kind
    pub fn profile(&self) -> &'static KindProfile {
        KindProfile::for_kind(self.vcs)
    }

    /// Console client to invoke, honoring the override
    pub fn console_executable(&self) -> &str {
        self.console_exe.as_deref().unwrap_or(self.profile().console_exe)
    }

    /// Graphical tool to launch, honoring the override
    pub fn gui_executable(&self) -> &str {
        self.gui_exe.as_deref().unwrap_or(self.profile().gui_exe)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.status_timeout_secs)
    }

    /// All settings as display pairs, in stable order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("vcs", self.vcs.to_string()),
            ("overlay", self.overlay.to_string()),
            ("only-changed", self.only_changed.to_string()),
            ("console-exe", self.console_executable().to_string()),
            ("gui-exe", self.gui_executable().to_string()),
            ("timeout", self.status_timeout_secs.to_string()),
        ]
    }

    /// Get one setting's display value
    pub fn get(&self, name: &str) -> Result<String> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
            .ok_or_else(|| VcsOverlayError::unknown_setting(name))
    }

    /// Change one setting from its string form.
    ///
    /// Executable overrides accept `default` to fall back to the kind's own
    /// executable name.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "vcs" => {
                self.vcs = VcsKind::from_str(value)?;
            }
            "overlay" => {
                self.overlay = parse_bool(name, value)?;
            }
            "only-changed" => {
                self.only_changed = parse_bool(name, value)?;
            }
            "console-exe" => {
                self.console_exe = parse_override(value);
            }
            "gui-exe" => {
                self.gui_exe = parse_override(value);
            }
            "timeout" => {
                let seconds: u64 = value.parse().map_err(|_| {
                    VcsOverlayError::invalid_setting_value(name, value, "a number of seconds")
                })?;
                if seconds == 0 {
                    return Err(VcsOverlayError::invalid_setting_value(
                        name,
                        value,
                        "a positive number of seconds",
                    ));
                }
                self.status_timeout_secs = seconds;
            }
            _ => return Err(VcsOverlayError::unknown_setting(name)),
        }
        self.last_updated = chrono::Utc::now();
        Ok(())
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(VcsOverlayError::invalid_setting_value(
            name,
            value,
            "true or false",
        )),
    }
}

fn parse_override(value: &str) -> Option<String> {
    if value == "default" {
        None
    } else {
        Some(value.to_string())
    }
}
