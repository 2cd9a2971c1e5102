use crate::error::{AppError, AppResult};

/// Section of the store file that holds store-wide settings. It can never be
/// used as a layout name.
pub const SETTINGS_SECTION: &str = "Settings";

pub fn normalize(requested: &str) -> AppResult<String> {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidName(requested.to_string()));
    }

    Ok(trimmed.to_string())
}

pub fn is_reserved(name: &str) -> bool {
    name == SETTINGS_SECTION
}

/// Key used to look up an existing layout. Lookups trim like creation does,
/// so `" Streaming "` addresses `Streaming`.
pub fn lookup_key(requested: &str) -> &str {
    requested.trim()
}
