//! Bearer credential file storage.
//!
//! Persists the fallback bearer token in ~/.config/scalptrack/credentials.json
//! for environments where the cookie channel is blocked. The cookie session
//! remains the primary credential; this file only ever holds the fallback.

use crate::paths::ScalptrackPaths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Errors that can occur during credential storage operations.
#[derive(Debug)]
pub enum TokenStorageError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON parsing error.
    ParseError(serde_json::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for TokenStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenStorageError::IoError(e) => write!(f, "I/O error: {}", e),
            TokenStorageError::ParseError(e) => write!(f, "JSON parse error: {}", e),
            TokenStorageError::ConfigDirNotFound => {
                write!(f, "Could not determine home directory")
            }
        }
    }
}

impl std::error::Error for TokenStorageError {}

impl From<std::io::Error> for TokenStorageError {
    fn from(e: std::io::Error) -> Self {
        TokenStorageError::IoError(e)
    }
}

impl From<serde_json::Error> for TokenStorageError {
    fn from(e: serde_json::Error) -> Self {
        TokenStorageError::ParseError(e)
    }
}

/// On-disk shape of the credential file.
///
/// One canonical key is used for both reads and removal, so the request
/// path and the 401 cleanup path can never act on different entries.
#[derive(Debug, Serialize, Deserialize)]
struct StoredCredential {
    access_token: String,
}

/// Storage for the bearer credential file (credentials.json).
///
/// Responsibilities:
/// - Load, save and clear the bearer token
/// - Restrict file permissions (600 on Unix)
///
/// Does NOT:
/// - Decide when the token is attached to requests (gateway concern)
/// - Validate the token contents
pub struct TokenStorage {
    path: PathBuf,
}

impl TokenStorage {
    /// Creates a new TokenStorage with the default path
    /// (~/.config/scalptrack/credentials.json).
    pub fn new() -> Result<Self, TokenStorageError> {
        let path = ScalptrackPaths::credentials_file()
            .map_err(|_| TokenStorageError::ConfigDirNotFound)?;
        Ok(Self { path })
    }

    /// Creates a new TokenStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the stored bearer token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(token))`: A credential is present
    /// - `Ok(None)`: No credential file exists (the normal logged-out state)
    /// - `Err(...)`: The file exists but could not be read or parsed
    pub fn load(&self) -> Result<Option<String>, TokenStorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let credential: StoredCredential = serde_json::from_str(&content)?;

        Ok(Some(credential.access_token))
    }

    /// Saves a bearer token, replacing any previous one.
    pub fn save(&self, token: &str) -> Result<(), TokenStorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let credential = StoredCredential {
            access_token: token.to_string(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&credential)?)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// Removes the stored credential.
    ///
    /// Idempotent: clearing when no credential file exists succeeds.
    pub fn clear(&self) -> Result<(), TokenStorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the path to the credential file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_absent_not_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = TokenStorage::with_path(temp_dir.path().join("credentials.json"));

        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let storage = TokenStorage::with_path(temp_dir.path().join("credentials.json"));

        storage.save("tok-123").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            TokenStorage::with_path(temp_dir.path().join("nested/dir/credentials.json"));

        storage.save("tok-456").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("tok-456"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = TokenStorage::with_path(temp_dir.path().join("credentials.json"));

        storage.save("tok-789").unwrap();
        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());

        // Second clear with nothing present still succeeds.
        storage.clear().unwrap();
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("credentials.json");
        fs::write(&file_path, "{ invalid json").unwrap();

        let storage = TokenStorage::with_path(file_path);
        let result = storage.load();

        assert!(matches!(result, Err(TokenStorageError::ParseError(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let storage = TokenStorage::with_path(temp_dir.path().join("credentials.json"));

        storage.save("tok-abc").unwrap();
        let mode = fs::metadata(storage.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
