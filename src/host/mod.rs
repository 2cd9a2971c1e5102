//! Seam between the layout store and the application whose window layout is
//! being captured and applied.

pub mod file_host;

pub use file_host::FileHost;

use tracing::{info, warn};

use crate::store::ProfileStore;

pub trait LayoutHost {
    /// Snapshot of the host's current layout. Empty means the capture failed.
    fn capture_state(&mut self) -> Vec<u8>;

    /// Reconfigures the host from a previously captured state.
    fn apply_state(&mut self, state: &[u8]) -> bool;
}

/// Applies the default layout, if any, when the host becomes ready.
/// Failures are logged and never propagated.
pub fn apply_default_on_startup<H>(store: &ProfileStore, host: &mut H) -> Option<String>
where
    H: LayoutHost + ?Sized,
{
    let name = store.get_default()?.to_string();

    match store.apply(&name, host) {
        Ok(()) => {
            info!(layout = %name, "default layout applied at startup");
            Some(name)
        }
        Err(err) => {
            warn!(layout = %name, error = %err, "failed to apply default layout at startup");
            None
        }
    }
}
