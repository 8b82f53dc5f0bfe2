//! Unified path management for scalptrack configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/scalptrack/        # Config directory
//! ├── config.toml              # Client configuration (base URL, timeout)
//! └── credentials.json         # Bearer credential (0600 on Unix)
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for scalptrack.
pub struct ScalptrackPaths;

impl ScalptrackPaths {
    /// Returns the scalptrack configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/scalptrack/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("scalptrack"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the bearer credential file.
    ///
    /// # Security Note
    ///
    /// The credential file is written with mode 600 on Unix systems; see
    /// `TokenStorage`.
    pub fn credentials_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("credentials.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_under_config_dir() {
        let dir = ScalptrackPaths::config_dir().unwrap();
        let file = ScalptrackPaths::config_file().unwrap();
        assert!(file.starts_with(&dir));
        assert_eq!(file.file_name().unwrap(), "config.toml");
    }

    #[test]
    fn test_credentials_file_name() {
        let file = ScalptrackPaths::credentials_file().unwrap();
        assert_eq!(file.file_name().unwrap(), "credentials.json");
    }
}
