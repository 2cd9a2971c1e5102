use std::fs;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "docklayout";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;

        let config_dir = config_root.join(APP_DIR);
        fs::create_dir_all(&config_dir)?;

        Ok(Self { config_dir })
    }

    pub fn from_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn store_file(&self) -> PathBuf {
        self.config_dir.join("layouts.json")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}
