use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub store_file: Option<PathBuf>,
    #[serde(default)]
    pub host_state_file: Option<PathBuf>,
}

impl Settings {
    pub fn host_state_file(&self) -> Option<&Path> {
        self.host_state_file.as_deref()
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(err) => return Err(err.into()),
    };
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load(dir.path().join("settings.json")).unwrap();

        assert!(settings.store_file.is_none());
        assert!(settings.host_state_file().is_none());
    }

    #[test]
    fn unreadable_settings_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::create_dir(&path).unwrap();

        assert!(matches!(load(path), Err(AppError::Io(_))));
    }

    #[test]
    fn reads_partial_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"host_state_file":"/tmp/window.state"}"#).unwrap();

        let settings = load(path).unwrap();
        assert!(settings.store_file.is_none());
        assert_eq!(
            settings.host_state_file(),
            Some(Path::new("/tmp/window.state"))
        );
    }
}
