use crate::models::{MediaItem, Property};
use anyhow::Result;
use async_trait::async_trait;

/// Data-access collaborator the views read from.
/// Implementations hand out read-only snapshots; views never mutate them.
#[async_trait]
pub trait PropertyProvider: Send + Sync {
    /// All properties, in display order
    async fn list_properties(&self) -> Result<Vec<Property>>;

    /// A single property with its nested collections, or `None` if unknown
    async fn get_property(&self, id: &str) -> Result<Option<Property>>;

    /// All assets of the media library
    async fn list_media(&self) -> Result<Vec<MediaItem>>;

    /// Name of the data source
    fn source_name(&self) -> &'static str;
}
