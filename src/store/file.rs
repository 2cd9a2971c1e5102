use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

use super::StoreModel;
use super::name;
use super::profile::Profile;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(rename = "Settings", default)]
    settings: SettingsSection,
    #[serde(flatten)]
    layouts: BTreeMap<String, LayoutSection>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsSection {
    #[serde(
        rename = "DefaultLayout",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    default_layout: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LayoutSection {
    #[serde(default)]
    state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sha256: Option<String>,
}

impl LayoutSection {
    fn encode(state: &[u8]) -> Self {
        let sha256 = (!state.is_empty()).then(|| state_digest(state));
        Self {
            state: STANDARD.encode(state),
            sha256,
        }
    }

    fn decode(&self) -> Result<Vec<u8>, String> {
        let state = STANDARD
            .decode(self.state.trim())
            .map_err(|err| format!("invalid base64 state: {err}"))?;

        if let Some(expected) = self.sha256.as_deref() {
            if !expected.eq_ignore_ascii_case(&state_digest(&state)) {
                return Err("state checksum mismatch".to_string());
            }
        }

        Ok(state)
    }
}

fn state_digest(state: &[u8]) -> String {
    format!("{:x}", Sha256::digest(state))
}

fn persist_error(path: &Path, err: impl Display) -> AppError {
    AppError::Persist(format!("{}: {err}", path.display()))
}

pub fn load(path: &Path) -> AppResult<StoreModel> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "layout store not found, starting empty");
            return Ok(StoreModel::default());
        }
        Err(err) => return Err(persist_error(path, err)),
    };
    let document: StoreDocument =
        serde_json::from_str(&raw).map_err(|err| persist_error(path, err))?;
    into_model(path, document)
}

fn into_model(path: &Path, document: StoreDocument) -> AppResult<StoreModel> {
    let mut layouts = BTreeMap::new();
    for (section, entry) in document.layouts {
        let valid = name::normalize(&section).is_ok_and(|name| name == section);
        if !valid || name::is_reserved(&section) {
            warn!(section = %section, "dropping layout section with an invalid name");
            continue;
        }

        let state = entry
            .decode()
            .map_err(|reason| persist_error(path, format!("layout `{section}`: {reason}")))?;
        layouts.insert(section.clone(), Profile::with_state(section, state));
    }

    let default_name = match document.settings.default_layout {
        Some(default) if layouts.contains_key(&default) => Some(default),
        Some(default) if default.is_empty() => None,
        Some(default) => {
            warn!(default = %default, "clearing default layout that names a missing layout");
            None
        }
        None => None,
    };

    Ok(StoreModel {
        layouts,
        default_name,
    })
}

pub fn save(path: &Path, model: &StoreModel) -> AppResult<()> {
    let document = StoreDocument {
        settings: SettingsSection {
            default_layout: model.default_name.clone(),
        },
        layouts: model
            .layouts
            .iter()
            .map(|(name, profile)| (name.clone(), LayoutSection::encode(profile.state())))
            .collect(),
    };

    let payload = serde_json::to_string_pretty(&document).map_err(|err| persist_error(path, err))?;
    write_atomic(path, payload.as_bytes()).map_err(|err| persist_error(path, err))?;

    debug!(
        path = %path.display(),
        layouts = model.layouts.len(),
        "layout store written"
    );
    Ok(())
}

/// Replaces `path` with `payload` through a sibling temp file so readers never
/// observe a partially written file.
pub(crate) fn write_atomic(path: &Path, payload: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path_for(path);
    let result = write_and_rename(&temp_path, path, payload);
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result.map_err(|err| io::Error::new(err.kind(), format!("{}: {err}", temp_path.display())))
}

fn write_and_rename(temp_path: &Path, path: &Path, payload: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;

        options.mode(0o600);
    }

    let mut file = options.open(temp_path)?;
    file.write_all(payload)?;
    file.sync_all()?;
    drop(file);

    fs::rename(temp_path, path)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("layouts"));
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
