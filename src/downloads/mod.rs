pub mod controller;
pub mod http;
pub mod traits;

pub use controller::{DownloadController, DownloadOutcome, DOWNLOAD_FAILED_MESSAGE};
pub use http::HttpAssetDownloader;
pub use traits::{AssetDownloader, DownloadReceipt};
