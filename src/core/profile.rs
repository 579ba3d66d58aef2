//! # Profile Persistence
//!
//! Keeps the signed-in user across restarts in `~/.cockpit/profile`, with the
//! auth token flag stored alongside it in `~/.cockpit/auth_token`.
//!
//! The profile is sealed before it is written:
//!
//! ```text
//! base64(json(user)) "." base64(hmac_sha256(secret, body))
//! ```
//!
//! The blob is signed, not encrypted: anyone who can read the file can read
//! the user. The tag only stops edits and blobs sealed with another secret.
//!
//! A missing, tampered or unreadable blob is treated as "logged out". It is
//! logged and never surfaces as an error to the UI.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`).

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use log::{debug, info, warn};
use sha2::Sha256;

use crate::core::auth::User;

type HmacSha256 = Hmac<Sha256>;

const PROFILE_FILE: &str = "profile";
const TOKEN_FILE: &str = "auth_token";
const TOKEN_VALUE: &str = "valid_token";

#[derive(Debug)]
pub enum ProfileError {
    Io(io::Error),
    /// Blob is not `body.tag` or either half is not valid base64.
    Malformed,
    /// Tag does not match the body for this secret.
    BadSignature,
    Json(serde_json::Error),
    /// The secret could not be used as an HMAC key.
    Key(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::Io(e) => write!(f, "profile I/O error: {e}"),
            ProfileError::Malformed => write!(f, "profile blob is malformed"),
            ProfileError::BadSignature => write!(f, "profile signature mismatch"),
            ProfileError::Json(e) => write!(f, "profile JSON error: {e}"),
            ProfileError::Key(msg) => write!(f, "profile key error: {msg}"),
        }
    }
}

impl std::error::Error for ProfileError {}

impl From<io::Error> for ProfileError {
    fn from(e: io::Error) -> Self {
        ProfileError::Io(e)
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(e: serde_json::Error) -> Self {
        ProfileError::Json(e)
    }
}

fn mac_for(secret: &str, body: &str) -> Result<HmacSha256, ProfileError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| ProfileError::Key(e.to_string()))?;
    mac.update(body.as_bytes());
    Ok(mac)
}

pub fn seal(user: &User, secret: &str) -> Result<String, ProfileError> {
    let json = serde_json::to_vec(user)?;
    let body = URL_SAFE_NO_PAD.encode(json);
    let tag = URL_SAFE_NO_PAD.encode(mac_for(secret, &body)?.finalize().into_bytes());
    Ok(format!("{body}.{tag}"))
}

pub fn unseal(blob: &str, secret: &str) -> Result<User, ProfileError> {
    let (body, tag) = blob.trim().split_once('.').ok_or(ProfileError::Malformed)?;
    let tag = URL_SAFE_NO_PAD.decode(tag).map_err(|_| ProfileError::Malformed)?;
    mac_for(secret, body)?
        .verify_slice(&tag)
        .map_err(|_| ProfileError::BadSignature)?;
    let json = URL_SAFE_NO_PAD.decode(body).map_err(|_| ProfileError::Malformed)?;
    Ok(serde_json::from_slice(&json)?)
}

/// Returns `~/.cockpit/`.
pub fn default_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cockpit"))
}

fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

/// Sealed user profile plus auth token flag in one directory.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
    secret: String,
}

impl ProfileStore {
    pub fn new(dir: PathBuf, secret: String) -> Self {
        Self { dir, secret }
    }

    fn profile_path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILE)
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    /// Persist the user and set the token flag.
    pub fn save(&self, user: &User) -> Result<(), ProfileError> {
        let blob = seal(user, &self.secret)?;
        atomic_write(&self.profile_path(), &blob)?;
        atomic_write(&self.token_path(), TOKEN_VALUE)?;
        debug!("Profile saved for {}", user.email);
        Ok(())
    }

    /// The stored user, or `None` when absent or unreadable.
    pub fn load(&self) -> Option<User> {
        let path = self.profile_path();
        let blob = match fs::read_to_string(&path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read profile {}: {}", path.display(), e);
                return None;
            }
        };
        match unseal(&blob, &self.secret) {
            Ok(user) => {
                info!("Restored profile for {}", user.email);
                Some(user)
            }
            Err(e) => {
                warn!("Ignoring stored profile: {}", e);
                None
            }
        }
    }

    pub fn has_token(&self) -> bool {
        fs::read_to_string(self.token_path())
            .map(|token| !token.trim().is_empty())
            .unwrap_or(false)
    }

    /// Remove the profile and the token flag.
    pub fn clear(&self) -> Result<(), ProfileError> {
        remove_if_exists(&self.profile_path())?;
        remove_if_exists(&self.token_path())?;
        debug!("Profile cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "1".to_string(),
            name: "Admin".to_string(),
            role: "Admin".to_string(),
            email: "admin@demo.com".to_string(),
        }
    }

    fn temp_store() -> ProfileStore {
        let dir = std::env::temp_dir().join(format!("cockpit-test-{}", uuid::Uuid::new_v4()));
        ProfileStore::new(dir, "test-secret".to_string())
    }

    #[test]
    fn test_unseal_restores_user() {
        let blob = seal(&user(), "k").unwrap();
        assert_eq!(unseal(&blob, "k").unwrap(), user());
    }

    #[test]
    fn test_unseal_rejects_wrong_secret() {
        let blob = seal(&user(), "k").unwrap();
        assert!(matches!(unseal(&blob, "other"), Err(ProfileError::BadSignature)));
    }

    #[test]
    fn test_unseal_rejects_tampered_body() {
        let blob = seal(&user(), "k").unwrap();
        let (_, tag) = blob.split_once('.').unwrap();
        let forged_body = URL_SAFE_NO_PAD.encode(br#"{"id":"1","name":"Eve","role":"Admin","email":"e@x"}"#);
        let forged = format!("{forged_body}.{tag}");
        assert!(matches!(unseal(&forged, "k"), Err(ProfileError::BadSignature)));
    }

    #[test]
    fn test_sealed_body_is_readable_without_secret() {
        let blob = seal(&user(), "k").unwrap();
        let (body, _) = blob.split_once('.').unwrap();
        let json = URL_SAFE_NO_PAD.decode(body).unwrap();
        let plain: User = serde_json::from_slice(&json).unwrap();
        assert_eq!(plain, user());
    }

    #[test]
    fn test_unseal_rejects_garbage() {
        assert!(matches!(unseal("not a blob", "k"), Err(ProfileError::Malformed)));
        assert!(matches!(unseal("abc.%%%", "k"), Err(ProfileError::Malformed)));
    }

    #[test]
    fn test_store_save_load_clear() {
        let store = temp_store();
        assert_eq!(store.load(), None);
        assert!(!store.has_token());

        store.save(&user()).unwrap();
        assert_eq!(store.load(), Some(user()));
        assert!(store.has_token());

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        assert!(!store.has_token());
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn test_store_treats_corrupt_profile_as_logged_out() {
        let store = temp_store();
        fs::create_dir_all(&store.dir).unwrap();
        fs::write(store.profile_path(), "garbage").unwrap();
        assert_eq!(store.load(), None);
    }
}
