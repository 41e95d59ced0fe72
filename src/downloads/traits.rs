use crate::models::Layout;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What a finished asset download produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadReceipt {
    pub layout_id: String,
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Fetches and packages the media bundle of a layout.
/// One best-effort attempt per call, no retries and no progress reporting.
#[async_trait]
pub trait AssetDownloader: Send + Sync {
    async fn download(&self, layout: &Layout) -> Result<DownloadReceipt>;
}
