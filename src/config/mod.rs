pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::Settings;

use std::path::{Path, PathBuf};

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths) -> AppResult<Settings> {
    settings::load(paths.settings_file())
}

/// Command-line flag, then settings file, then the default store location.
pub fn resolve_store_file(flag: Option<PathBuf>, settings: &Settings, paths: &AppPaths) -> PathBuf {
    flag.or_else(|| settings.store_file.clone())
        .unwrap_or_else(|| paths.store_file())
}

/// Command-line flag, then settings file. There is no default host state.
pub fn resolve_host_state_file(flag: Option<PathBuf>, settings: &Settings) -> Option<PathBuf> {
    flag.or_else(|| settings.host_state_file().map(Path::to_path_buf))
}
