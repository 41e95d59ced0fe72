use crate::downloads::traits::{AssetDownloader, DownloadReceipt};
use crate::models::Layout;
use crate::views::state::DownloadState;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};

/// Message shown to the user when a download fails
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Failed to download assets. Please try again.";

/// Result of a user-initiated download request
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadOutcome {
    Completed(DownloadReceipt),
    /// The external call failed; carries the user-facing message only
    Failed(&'static str),
    /// Another download was already in flight, nothing was issued
    Ignored,
}

/// Drives the download button: at most one download in flight at a time
#[derive(Clone)]
pub struct DownloadController {
    downloader: Arc<dyn AssetDownloader>,
    state: Arc<Mutex<DownloadState>>,
}

impl DownloadController {
    pub fn new(downloader: Arc<dyn AssetDownloader>) -> Self {
        Self {
            downloader,
            state: Arc::new(Mutex::new(DownloadState::Idle)),
        }
    }

    pub fn state(&self) -> DownloadState {
        *self.lock()
    }

    pub async fn request(&self, layout: &Layout) -> DownloadOutcome {
        let Some(_in_flight) = InFlight::begin(&self.state) else {
            info!("Download for layout {} ignored, another is in flight", layout.id);
            return DownloadOutcome::Ignored;
        };

        info!("⬇️  Downloading assets for layout {}", layout.name);
        match self.downloader.download(layout).await {
            Ok(receipt) => {
                info!(
                    "✅ Saved {} files to {}",
                    receipt.files.len(),
                    receipt.directory.display()
                );
                DownloadOutcome::Completed(receipt)
            }
            Err(e) => {
                warn!("Asset download for layout {} failed: {:#}", layout.id, e);
                DownloadOutcome::Failed(DOWNLOAD_FAILED_MESSAGE)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, DownloadState> {
        lock_state(&self.state)
    }
}

fn lock_state(state: &Mutex<DownloadState>) -> MutexGuard<'_, DownloadState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Holds the `Downloading` state; dropping it (completion, cancellation or
/// panic) returns the controller to `Idle`.
struct InFlight<'a> {
    state: &'a Mutex<DownloadState>,
}

impl<'a> InFlight<'a> {
    fn begin(state: &'a Mutex<DownloadState>) -> Option<Self> {
        let began = lock_state(state).try_begin();
        if began {
            Some(Self { state })
        } else {
            None
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        lock_state(self.state).finish();
    }
}
