use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Value stored under `theme` when dark mode is on. Light mode is encoded
/// by the key being absent, matching what earlier installs wrote.
pub const DARK_THEME: &str = "dark";

/// Persisted user preferences, read once at startup and written on every
/// theme toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Prefs {
    pub fn dark_mode(&self) -> bool {
        self.theme.as_deref() == Some(DARK_THEME)
    }

    pub fn from_dark_mode(dark: bool) -> Self {
        Prefs {
            theme: dark.then(|| DARK_THEME.to_string()),
        }
    }
}

fn prefs_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("classpulse").join("prefs.json"))
}

/// Read preferences from the platform config directory. A missing or
/// malformed file falls back to the defaults; startup never fails on prefs.
pub fn load() -> Prefs {
    match prefs_path() {
        Some(path) => load_from(&path),
        None => Prefs::default(),
    }
}

pub fn load_from(path: &Path) -> Prefs {
    match fs::read_to_string(path) {
        Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed prefs file {}: {e}", path.display());
            Prefs::default()
        }),
        Err(_) => Prefs::default(),
    }
}

/// Write preferences to the platform config directory.
pub fn store(prefs: &Prefs) -> Result<()> {
    let path = prefs_path().context("no config directory on this platform")?;
    store_to(prefs, &path)
}

pub fn store_to(prefs: &Prefs, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(prefs).context("serializing prefs")?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
