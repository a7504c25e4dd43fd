//! Session storage for persisting login state.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

/// Stored session data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub api_base: String,
}

/// Get the session file path.
pub fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "squeak").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Save a session to `path`.
///
/// On Unix the file is created with mode 0600 before any data is written.
pub fn save_session(path: &Path, session: &StoredSession) -> Result<()> {
    let json = serde_json::to_string_pretty(session)?;

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).context("Failed to open session file")?;

    // A file left by an older version keeps its mode on open.
    #[cfg(unix)]
    file.set_permissions(fs::Permissions::from_mode(0o600))
        .context("Failed to restrict session file permissions")?;

    file.write_all(json.as_bytes())
        .context("Failed to write session file")?;

    Ok(())
}

/// Load the session stored at `path`, if there is one.
pub fn load_session(path: &Path) -> Result<Option<StoredSession>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path).context("Failed to read session file")?;
    let stored = serde_json::from_str(&json).context("Invalid session file")?;
    Ok(Some(stored))
}

/// Clear the stored session. Returns whether one existed.
pub fn clear_session(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(path).context("Failed to remove session file")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn stored() -> StoredSession {
        StoredSession {
            access_token: "abc".to_string(),
            api_base: "http://localhost:8080".to_string(),
        }
    }

    #[test]
    fn missing_file_is_no_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        assert_eq!(load_session(&path).unwrap(), None);
        assert!(!clear_session(&path).unwrap());
    }

    #[test]
    fn saved_session_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        save_session(&path, &stored()).unwrap();
        assert_eq!(load_session(&path).unwrap(), Some(stored()));

        assert!(clear_session(&path).unwrap());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_private() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        save_session(&path, &stored()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn existing_readable_file_is_tightened() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        save_session(&path, &stored()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(load_session(&path).unwrap(), Some(stored()));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert!(load_session(&path).is_err());
    }
}
