//! Theme selection persisted alongside the note collection.

use crate::core::error::Result;
use crate::core::storage::{StorageAdapter, THEME_KEY};
use serde::{Deserialize, Serialize};

/// The fixed set of visual themes the presentation layer can render.
/// Stored under [`THEME_KEY`] as the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    Pink,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Pink];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Pink => "pink",
        }
    }

    /// Parses a stored theme name. Unknown names yield `None`; callers fall
    /// back to the default rather than erroring.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "pink" => Some(ThemeMode::Pink),
            _ => None,
        }
    }
}

/// Reads the persisted theme, falling back to [`ThemeMode::Light`] when the
/// key is absent, unreadable, or holds an unknown name.
pub fn load_theme<S: StorageAdapter>(storage: &S) -> ThemeMode {
    match storage.read_raw(THEME_KEY) {
        Ok(Some(name)) => ThemeMode::parse(name.trim()).unwrap_or_else(|| {
            log::warn!("unknown stored theme {name:?}, using default");
            ThemeMode::default()
        }),
        Ok(None) => ThemeMode::default(),
        Err(e) => {
            log::warn!("failed to read theme, using default: {e}");
            ThemeMode::default()
        }
    }
}

/// Persists `mode` under the theme key.
pub fn save_theme<S: StorageAdapter>(storage: &mut S, mode: ThemeMode) -> Result<()> {
    storage.write_raw(THEME_KEY, mode.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;

    #[test]
    fn absent_theme_defaults_to_light() {
        let storage = MemoryStorage::new();
        assert_eq!(load_theme(&storage), ThemeMode::Light);
    }

    #[test]
    fn every_theme_roundtrips_through_storage() {
        let mut storage = MemoryStorage::new();
        for mode in ThemeMode::ALL {
            save_theme(&mut storage, mode).unwrap();
            assert_eq!(load_theme(&storage), mode);
        }
    }

    #[test]
    fn garbage_theme_value_falls_back_to_light() {
        let mut storage = MemoryStorage::new();
        storage.write_raw(THEME_KEY, "mauve").unwrap();
        assert_eq!(load_theme(&storage), ThemeMode::Light);
    }

    #[test]
    fn stored_names_match_serde_representation() {
        for mode in ThemeMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
            assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
        }
    }
}
