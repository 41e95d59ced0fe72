use crate::models::{MediaCategory, MediaItem};
use crate::views::filters::{filter_media, MediaFilter};
use crate::views::state::MediaViewMode;

/// Media library page: all assets plus the current category and view mode
#[derive(Debug, Clone, Default)]
pub struct MediaLibrary {
    items: Vec<MediaItem>,
    pub filter: MediaFilter,
    pub mode: MediaViewMode,
}

impl MediaLibrary {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn select(&mut self, filter: MediaFilter) {
        self.filter = filter;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn visible(&self) -> Vec<MediaItem> {
        filter_media(&self.items, self.filter)
    }

    /// Item count per category, in category order
    pub fn counts(&self) -> Vec<(MediaCategory, usize)> {
        MediaCategory::ALL
            .into_iter()
            .map(|c| (c, self.items.iter().filter(|i| i.category == c).count()))
            .collect()
    }

    pub fn total_bytes(&self) -> u64 {
        self.items.iter().map(|i| i.size_bytes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{MockProvider, PropertyProvider};

    async fn library() -> MediaLibrary {
        MediaLibrary::new(MockProvider::new().list_media().await.unwrap())
    }

    #[tokio::test]
    async fn test_default_shows_everything_in_grid() {
        let lib = library().await;
        assert_eq!(lib.mode, MediaViewMode::Grid);
        assert_eq!(lib.visible().len(), 6);
    }

    #[tokio::test]
    async fn test_select_category_keeps_order() {
        let mut lib = library().await;
        lib.select(MediaFilter::Category(MediaCategory::Unit));
        let ids: Vec<_> = lib.visible().iter().map(|m| m.image.id.clone()).collect();
        assert_eq!(ids, vec!["laurel-living", "magnolia-living"]);

        lib.toggle_mode();
        assert_eq!(lib.mode, MediaViewMode::List);
    }

    #[tokio::test]
    async fn test_counts_and_size() {
        let lib = library().await;
        assert_eq!(
            lib.counts(),
            vec![
                (MediaCategory::Amenity, 1),
                (MediaCategory::Property, 2),
                (MediaCategory::Unit, 2),
                (MediaCategory::Legal, 1),
            ]
        );
        assert_eq!(lib.total_bytes(), 52_050_000);
    }
}
