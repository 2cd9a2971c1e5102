use std::path::PathBuf;

use crate::config::{self, AppPaths};
use crate::error::{AppError, AppResult};
use crate::host::FileHost;
use crate::output::Output;
use crate::store::ProfileStore;

#[derive(Debug)]
pub struct AppContext {
    pub store: ProfileStore,
    pub host_state_file: Option<PathBuf>,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        store_file: Option<PathBuf>,
        host_state_file: Option<PathBuf>,
        json: bool,
    ) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths)?;
        let store_file = config::resolve_store_file(store_file, &settings, &paths);
        let host_state_file = config::resolve_host_state_file(host_state_file, &settings);
        let store = ProfileStore::open(store_file)?;
        let output = Output::new(json);

        Ok(Self {
            store,
            host_state_file,
            output,
        })
    }

    pub fn host(&self) -> AppResult<FileHost> {
        self.host_state_file
            .as_ref()
            .map(FileHost::new)
            .ok_or_else(|| {
                AppError::Config(
                    "no host state file configured. pass --host-state or set host_state_file in settings.json"
                        .to_string(),
                )
            })
    }
}
