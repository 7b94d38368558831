//! Settings is the module to handle the client persistent store.
//! It keeps the small pieces of state the portal remembers across
//! launches: the theme preference, the remembered username, a pending
//! signup email and the credential itself.

use serde::{Deserialize, Serialize};

use crate::dir::PortalDirectory;

pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemePreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remember_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_signup_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

impl Settings {
    pub fn from_file(datadir: &PortalDirectory) -> Result<Settings, SettingsError> {
        let mut path = datadir.path().to_path_buf();
        path.push(SETTINGS_FILE_NAME);

        std::fs::read(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => SettingsError::NotFound,
                _ => SettingsError::ReadingFile(format!("Reading settings file: {}", e)),
            })
            .and_then(|file_content| {
                serde_json::from_slice::<Settings>(&file_content).map_err(|e| {
                    SettingsError::ReadingFile(format!("Parsing settings file: {}", e))
                })
            })
    }

    /// A missing settings file is not an error, the store starts empty.
    pub fn load_or_default(datadir: &PortalDirectory) -> Result<Settings, SettingsError> {
        match Self::from_file(datadir) {
            Ok(s) => Ok(s),
            Err(SettingsError::NotFound) => Ok(Settings::default()),
            Err(e) => Err(e),
        }
    }

    pub fn to_file(&self, datadir: &PortalDirectory) -> Result<(), SettingsError> {
        let mut path = datadir.path().to_path_buf();
        path.push(SETTINGS_FILE_NAME);

        let content = serde_json::to_string_pretty(&self)
            .map_err(|e| SettingsError::WritingFile(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(path, content.as_bytes())
            .map_err(|e| SettingsError::WritingFile(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    NotFound,
    ReadingFile(String),
    WritingFile(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Settings file not found"),
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_roundtrip() {
        let settings = Settings {
            theme: Some(ThemePreference::Light),
            remember_username: Some("jane".to_string()),
            pending_signup_email: None,
            credential: Some("tok".to_string()),
        };
        let content = serde_json::to_string(&settings).unwrap();
        // absent fields are not serialized at all
        assert!(!content.contains("pending_signup_email"));
        let parsed: Settings = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn settings_tolerates_empty_object() {
        let parsed: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Settings::default());
        assert_eq!(parsed.theme.unwrap_or_default(), ThemePreference::Dark);
    }

    #[test]
    fn theme_toggle() {
        assert_eq!(ThemePreference::Dark.toggle(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggle(), ThemePreference::Dark);
    }
}
