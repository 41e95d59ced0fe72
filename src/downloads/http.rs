use crate::downloads::traits::{AssetDownloader, DownloadReceipt};
use crate::models::{Layout, MediaImage};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Downloads a layout's marketing images and floor plan into a local folder
pub struct HttpAssetDownloader {
    client: Client,
    output_dir: PathBuf,
}

impl HttpAssetDownloader {
    pub fn new(output_dir: impl Into<PathBuf>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("property-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(client, output_dir))
    }

    pub fn with_client(client: Client, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
        }
    }

    async fn fetch(&self, image: &MediaImage, target: &Path) -> Result<()> {
        debug!("Fetching {}", image.url);

        let response = self
            .client
            .get(&image.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", image.url))?;

        if !response.status().is_success() {
            warn!("{} returned status: {}", image.url, response.status());
            bail!("Failed to fetch {}: {}", image.url, response.status());
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read response body")?;
        tokio::fs::write(target, &bytes)
            .await
            .with_context(|| format!("Failed to write {}", target.display()))?;

        Ok(())
    }
}

/// Marketing images first, then the floor plan
fn bundle_images(layout: &Layout) -> Vec<&MediaImage> {
    layout
        .marketing_images
        .iter()
        .chain(layout.floor_plan.iter())
        .collect()
}

/// `03-kitchen.png` style name, keeping the url's extension when it has one
fn file_name(index: usize, image: &MediaImage) -> String {
    let path = image.url.split(['?', '#']).next().unwrap_or_default();
    let last = path.rsplit('/').next().unwrap_or_default();
    let ext = match last.rsplit_once('.') {
        Some((_, ext))
            if !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            ext.to_lowercase()
        }
        _ => "jpg".to_string(),
    };
    format!("{:02}-{}.{}", index + 1, path_segment(&image.id), ext)
}

/// Single path component built from an id: only `[A-Za-z0-9-]` survive, the
/// rest become `_`, so ids like `../x` or `/abs` cannot leave the output dir.
fn path_segment(id: &str) -> String {
    let segment: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    if segment.is_empty() {
        "_".to_string()
    } else {
        segment
    }
}

#[async_trait]
impl AssetDownloader for HttpAssetDownloader {
    async fn download(&self, layout: &Layout) -> Result<DownloadReceipt> {
        let images = bundle_images(layout);
        if images.is_empty() {
            bail!("Layout {} has no media to download", layout.id);
        }

        let directory = self.output_dir.join(path_segment(&layout.id));
        tokio::fs::create_dir_all(&directory)
            .await
            .with_context(|| format!("Failed to create {}", directory.display()))?;

        let mut files = Vec::with_capacity(images.len());
        for (index, image) in images.iter().enumerate() {
            let target = directory.join(file_name(index, image));
            self.fetch(image, &target).await?;
            files.push(target);
        }

        let manifest = json!({
            "layoutId": layout.id,
            "layoutName": layout.name,
            "bedrooms": layout.bedrooms,
            "bathrooms": layout.bathrooms,
            "squareFeet": layout.square_feet,
            "baseRent": layout.base_rent,
            "virtualTourUrl": layout.virtual_tour_url,
            "files": files
                .iter()
                .filter_map(|f| f.file_name().map(|n| n.to_string_lossy().into_owned()))
                .collect::<Vec<_>>(),
            "downloadedAt": Utc::now(),
        });
        let manifest_path = directory.join("manifest.json");
        tokio::fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
            .await
            .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

        Ok(DownloadReceipt {
            layout_id: layout.id.clone(),
            directory,
            files,
        })
    }
}
