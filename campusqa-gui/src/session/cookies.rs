//! The client-owned cookie jar. The browser original relied on an
//! HttpOnly cookie set by the backend; the desktop client keeps its own
//! jar as a JSON file in the data directory.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dir::PortalDirectory;

pub const COOKIES_FILE_NAME: &str = "cookies.json";

const TOKEN_COOKIE: &str = "campusqa_token";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieJar {
    #[serde(default)]
    cookies: BTreeMap<String, String>,
}

impl CookieJar {
    pub fn from_file(datadir: &PortalDirectory) -> Result<Self, CookieError> {
        let mut path = datadir.path().to_path_buf();
        path.push(COOKIES_FILE_NAME);

        match std::fs::read(path) {
            Ok(content) => serde_json::from_slice(&content)
                .map_err(|e| CookieError::ReadingFile(format!("Parsing cookies file: {}", e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CookieJar::default()),
            Err(e) => Err(CookieError::ReadingFile(format!(
                "Reading cookies file: {}",
                e
            ))),
        }
    }

    pub fn to_file(&self, datadir: &PortalDirectory) -> Result<(), CookieError> {
        let mut path = datadir.path().to_path_buf();
        path.push(COOKIES_FILE_NAME);

        let content = serde_json::to_string_pretty(&self)
            .map_err(|e| CookieError::WritingFile(format!("Failed to serialize cookies: {}", e)))?;
        std::fs::write(path, content.as_bytes())
            .map_err(|e| CookieError::WritingFile(e.to_string()))
    }

    pub fn token(&self) -> Option<&str> {
        self.cookies.get(TOKEN_COOKIE).map(|s| s.as_str())
    }

    pub fn set_token(&mut self, token: &str) {
        self.cookies
            .insert(TOKEN_COOKIE.to_string(), token.to_string());
    }

    pub fn clear_token(&mut self) {
        self.cookies.remove(TOKEN_COOKIE);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieError {
    ReadingFile(String),
    WritingFile(String),
}

impl std::fmt::Display for CookieError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jar_roundtrip() {
        let mut jar = CookieJar::default();
        assert_eq!(jar.token(), None);
        jar.set_token("abc");
        let content = serde_json::to_string(&jar).unwrap();
        let parsed: CookieJar = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.token(), Some("abc"));
    }

    #[test]
    fn jar_tolerates_empty_object() {
        let parsed: CookieJar = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, CookieJar::default());
    }
}
