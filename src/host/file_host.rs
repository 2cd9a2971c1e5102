use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::store::file::write_atomic;

use super::LayoutHost;

/// Host whose layout state lives in a file. Capturing reads the file and
/// applying replaces it.
#[derive(Debug, Clone)]
pub struct FileHost {
    path: PathBuf,
}

impl FileHost {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LayoutHost for FileHost {
    fn capture_state(&mut self) -> Vec<u8> {
        match fs::read(&self.path) {
            Ok(state) => state,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to capture host layout state");
                Vec::new()
            }
        }
    }

    fn apply_state(&mut self, state: &[u8]) -> bool {
        if state.is_empty() {
            warn!(path = %self.path.display(), "refusing to apply an empty layout state");
            return false;
        }

        match write_atomic(&self.path, state) {
            Ok(()) => true,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to apply host layout state");
                false
            }
        }
    }
}
