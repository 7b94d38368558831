//! Client-side session handling: the bearer credential, where it comes
//! from and what identity it carries.
//!
//! A credential can reach the client three ways, in priority order: the
//! OAuth callback URL (consumed exactly once and persisted), the cookie
//! jar, and the settings store.

pub mod cookies;
pub mod otp;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

use self::cookies::CookieJar;

/// Opaque bearer token identifying a logged-in user to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: String) -> Self {
        Credential(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the claims carried in the credential's payload segment.
    /// Any shape mismatch is an invalid credential.
    pub fn decode_claims(&self) -> Result<Claims, DecodeError> {
        let payload = self.0.split('.').nth(1).ok_or(DecodeError::Malformed)?;
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| DecodeError::Payload)?;
        serde_json::from_slice(&bytes).map_err(|e| DecodeError::Json(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: UserId,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Not of the expected `header.payload.signature` shape.
    Malformed,
    /// The payload segment is not valid base64url.
    Payload,
    /// The payload is not the expected JSON document.
    Json(String),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Malformed => write!(f, "credential is not of the expected shape"),
            Self::Payload => write!(f, "credential payload is not valid base64url"),
            Self::Json(e) => write!(f, "credential payload is not valid JSON: {}", e),
        }
    }
}

/// A verified (or at least decodable) session: the credential plus the
/// identity its payload carries. The user id is reused by every save call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub credential: Credential,
    pub claims: Claims,
}

impl Session {
    pub fn open(credential: Credential) -> Result<Self, DecodeError> {
        let claims = credential.decode_claims()?;
        Ok(Session { credential, claims })
    }

    pub fn user_id(&self) -> &UserId {
        &self.claims.user_id
    }

    pub fn email(&self) -> Option<&str> {
        self.claims.email.as_deref()
    }
}

/// Where the active credential was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    CallbackUrl,
    Cookie,
    Store,
}

/// The authentication material carried by an OAuth callback URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackAuth {
    pub token: Option<Credential>,
    pub new_user: bool,
    /// The callback URL with the `token` and `new_user` parameters removed,
    /// the equivalent of scrubbing the address bar.
    pub scrubbed_url: String,
}

impl CallbackAuth {
    pub fn parse(url: &str) -> Option<Self> {
        let parsed = reqwest::Url::parse(url).ok()?;
        let mut token = None;
        let mut new_user = false;
        let remaining: Vec<(String, String)> = parsed
            .query_pairs()
            .filter(|(k, v)| match k.as_ref() {
                "token" => {
                    if !v.is_empty() {
                        token = Some(Credential::new(v.to_string()));
                    }
                    false
                }
                "new_user" => {
                    new_user = v == "true";
                    false
                }
                _ => true,
            })
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let mut scrubbed = parsed.clone();
        scrubbed.set_query(None);
        if !remaining.is_empty() {
            scrubbed
                .query_pairs_mut()
                .extend_pairs(remaining.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Some(CallbackAuth {
            token,
            new_user,
            scrubbed_url: scrubbed.to_string(),
        })
    }
}

/// Resolves the active credential. At most one credential is active per
/// launch; the callback URL wins over the cookie jar, which wins over the
/// settings store.
pub fn resolve_credential(
    callback: Option<&CallbackAuth>,
    cookies: &CookieJar,
    settings: &Settings,
) -> Option<(Credential, CredentialSource)> {
    if let Some(token) = callback.and_then(|c| c.token.clone()) {
        return Some((token, CredentialSource::CallbackUrl));
    }
    if let Some(token) = cookies.token() {
        return Some((
            Credential::new(token.to_string()),
            CredentialSource::Cookie,
        ));
    }
    settings
        .credential
        .clone()
        .map(|token| (Credential::new(token), CredentialSource::Store))
}

/// Writes the credential to both persistent stores. Called once when a
/// callback URL is consumed, and after an interactive login.
pub fn persist_credential(
    credential: &Credential,
    settings: &mut Settings,
    cookies: &mut CookieJar,
) {
    settings.credential = Some(credential.as_str().to_string());
    cookies.set_token(credential.as_str());
}

/// Destroys the credential everywhere, on verification failure or logout.
pub fn clear_credential(settings: &mut Settings, cookies: &mut CookieJar) {
    settings.credential = None;
    cookies.clear_token();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.c2ln",
            URL_SAFE_NO_PAD.encode(payload.as_bytes())
        )
    }

    #[test]
    fn claims_decode() {
        let credential =
            Credential::new(token_with_payload(r#"{"user_id":42,"email":"jane@lpu.in"}"#));
        let claims = credential.decode_claims().unwrap();
        assert_eq!(claims.user_id, UserId::Number(42));
        assert_eq!(claims.email.as_deref(), Some("jane@lpu.in"));

        let credential = Credential::new(token_with_payload(r#"{"user_id":"u-42"}"#));
        let claims = credential.decode_claims().unwrap();
        assert_eq!(claims.user_id, UserId::Text("u-42".to_string()));
        assert_eq!(claims.email, None);
    }

    #[test]
    fn claims_decode_failures() {
        assert_eq!(
            Credential::new("garbage".to_string()).decode_claims(),
            Err(DecodeError::Malformed)
        );
        assert_eq!(
            Credential::new("a.!!!.c".to_string()).decode_claims(),
            Err(DecodeError::Payload)
        );
        assert!(matches!(
            Credential::new(token_with_payload("not json")).decode_claims(),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn callback_url_is_scrubbed() {
        let auth = CallbackAuth::parse(
            "https://portal.campusqa.app/callback?token=abc&new_user=true&page=2",
        )
        .unwrap();
        assert_eq!(auth.token, Some(Credential::new("abc".to_string())));
        assert!(auth.new_user);
        assert!(!auth.scrubbed_url.contains("token"));
        assert!(!auth.scrubbed_url.contains("new_user"));
        assert!(auth.scrubbed_url.contains("page=2"));
    }

    #[test]
    fn callback_url_without_token() {
        let auth = CallbackAuth::parse("https://portal.campusqa.app/callback?page=2").unwrap();
        assert_eq!(auth.token, None);
        assert!(!auth.new_user);
        assert!(CallbackAuth::parse("not a url").is_none());
    }

    #[test]
    fn resolution_priority() {
        let callback = CallbackAuth::parse("https://x.test/cb?token=from-url").unwrap();
        let mut cookies = CookieJar::default();
        cookies.set_token("from-cookie");
        let settings = Settings {
            credential: Some("from-store".to_string()),
            ..Settings::default()
        };

        let (credential, source) =
            resolve_credential(Some(&callback), &cookies, &settings).unwrap();
        assert_eq!(credential.as_str(), "from-url");
        assert_eq!(source, CredentialSource::CallbackUrl);

        let (credential, source) = resolve_credential(None, &cookies, &settings).unwrap();
        assert_eq!(credential.as_str(), "from-cookie");
        assert_eq!(source, CredentialSource::Cookie);

        let (credential, source) =
            resolve_credential(None, &CookieJar::default(), &settings).unwrap();
        assert_eq!(credential.as_str(), "from-store");
        assert_eq!(source, CredentialSource::Store);

        assert!(
            resolve_credential(None, &CookieJar::default(), &Settings::default()).is_none()
        );
    }

    #[test]
    fn callback_credential_is_persisted_once() {
        let callback = CallbackAuth::parse("https://x.test/cb?token=abc&new_user=true").unwrap();
        let mut settings = Settings::default();
        let mut cookies = CookieJar::default();

        let (credential, source) =
            resolve_credential(Some(&callback), &cookies, &settings).unwrap();
        assert_eq!(source, CredentialSource::CallbackUrl);
        persist_credential(&credential, &mut settings, &mut cookies);
        assert_eq!(settings.credential.as_deref(), Some("abc"));
        assert_eq!(cookies.token(), Some("abc"));

        // The callback is consumed: the next launch resolves from the stores,
        // without duplicating the persistence.
        let before = settings.clone();
        let (credential, source) = resolve_credential(None, &cookies, &settings).unwrap();
        assert_eq!(credential.as_str(), "abc");
        assert_eq!(source, CredentialSource::Cookie);
        assert_eq!(settings, before);
    }

    #[test]
    fn clearing_destroys_everywhere() {
        let mut settings = Settings::default();
        let mut cookies = CookieJar::default();
        persist_credential(
            &Credential::new("abc".to_string()),
            &mut settings,
            &mut cookies,
        );
        clear_credential(&mut settings, &mut cookies);
        assert_eq!(settings.credential, None);
        assert_eq!(cookies.token(), None);
        assert!(resolve_credential(None, &cookies, &settings).is_none());
    }
}
