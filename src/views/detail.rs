use crate::models::{BuildingFeature, FeatureCategory, Layout, MediaImage, Property, UnitAvailability};
use crate::providers::PropertyProvider;
use crate::routes::PROPERTIES_PATH;
use crate::views::filters::sorted_by_available_date;
use crate::views::state::{DetailTab, DetailViewState};
use anyhow::Result;
use tracing::{debug, info};

/// Property detail view: either the property or an explicit not-found state
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyDetail {
    NotFound { id: String },
    Found(Box<DetailPage>),
}

impl PropertyDetail {
    pub async fn load(provider: &dyn PropertyProvider, id: &str) -> Result<Self> {
        match provider.get_property(id).await? {
            Some(property) => {
                debug!("Loaded property {} ({})", property.id, property.name);
                Ok(PropertyDetail::Found(Box::new(DetailPage::new(property))))
            }
            None => {
                info!("Property {} not found", id);
                Ok(PropertyDetail::NotFound { id: id.to_string() })
            }
        }
    }

    pub fn page(&self) -> Option<&DetailPage> {
        match self {
            PropertyDetail::Found(page) => Some(&**page),
            PropertyDetail::NotFound { .. } => None,
        }
    }

    pub fn page_mut(&mut self) -> Option<&mut DetailPage> {
        match self {
            PropertyDetail::Found(page) => Some(&mut **page),
            PropertyDetail::NotFound { .. } => None,
        }
    }

    /// Navigation link offered by the not-found state
    pub fn back_link(&self) -> &'static str {
        PROPERTIES_PATH
    }
}

/// A layout together with its units in date order
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCard<'a> {
    pub layout: &'a Layout,
    pub units: Vec<UnitAvailability>,
    property_image: Option<&'a MediaImage>,
}

impl<'a> LayoutCard<'a> {
    pub fn immediately_available(&self) -> usize {
        self.units.iter().filter(|u| u.is_immediately_available).count()
    }

    /// First marketing image, else the property's first photo
    pub fn hero_image(&self) -> Option<&'a MediaImage> {
        self.layout.marketing_images.first().or(self.property_image)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailPage {
    pub property: Property,
    pub state: DetailViewState,
}

impl DetailPage {
    pub fn new(property: Property) -> Self {
        Self {
            property,
            state: DetailViewState::default(),
        }
    }

    pub fn select_tab(&mut self, tab: DetailTab) {
        self.state.select_tab(tab);
    }

    /// Open the floor-plan modal for one of this property's layouts
    pub fn open_layout(&mut self, layout_id: &str) -> bool {
        match self.property.layouts().iter().find(|l| l.id == layout_id) {
            Some(layout) => {
                self.state.modal.open(layout.clone());
                true
            }
            None => false,
        }
    }

    pub fn close_layout(&mut self) {
        self.state.modal.close();
    }

    /// Badge count shown on a tab; the overview tab has none
    pub fn tab_count(&self, tab: DetailTab) -> Option<usize> {
        match tab {
            DetailTab::Overview => None,
            DetailTab::Layouts => Some(self.property.layouts().len()),
            DetailTab::Amenities => Some(self.property.common_spaces().len()),
            DetailTab::Gallery => Some(self.property.images.len()),
        }
    }

    pub fn layout_cards(&self) -> Vec<LayoutCard<'_>> {
        let property_image = self.property.images.first();
        self.property
            .layouts()
            .iter()
            .map(|layout| LayoutCard {
                layout,
                units: layout
                    .unit_availability
                    .as_deref()
                    .map(sorted_by_available_date)
                    .unwrap_or_default(),
                property_image,
            })
            .collect()
    }

    /// Non-empty feature groups in category order
    pub fn features_by_category(&self) -> Vec<(FeatureCategory, Vec<&BuildingFeature>)> {
        let features = self.property.building_features();
        FeatureCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let group: Vec<_> = features.iter().filter(|f| f.category == category).collect();
                (!group.is_empty()).then_some((category, group))
            })
            .collect()
    }

    /// Property photos shown on the gallery tab
    pub fn gallery(&self) -> &[MediaImage] {
        &self.property.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockProvider;

    async fn sunset() -> PropertyDetail {
        PropertyDetail::load(&MockProvider::new(), "1").await.unwrap()
    }

    #[tokio::test]
    async fn test_unknown_property_is_not_found() {
        let detail = PropertyDetail::load(&MockProvider::new(), "999").await.unwrap();
        assert_eq!(detail, PropertyDetail::NotFound { id: "999".to_string() });
        assert!(detail.page().is_none());
        assert_eq!(detail.back_link(), "/properties");
    }

    #[tokio::test]
    async fn test_found_starts_on_overview() {
        let detail = sunset().await;
        let page = detail.page().unwrap();
        assert_eq!(page.state.tab, DetailTab::Overview);
        assert!(!page.state.modal.is_open());
    }

    #[tokio::test]
    async fn test_layout_units_sorted_by_date() {
        let detail = sunset().await;
        let cards = detail.page().unwrap().layout_cards();
        assert_eq!(cards.len(), 2);

        let units: Vec<_> = cards[0].units.iter().map(|u| u.unit_number.as_str()).collect();
        assert_eq!(units, vec!["112", "304"]);
        assert_eq!(cards[0].immediately_available(), 1);

        // source order untouched
        let raw = cards[0].layout.unit_availability.as_ref().unwrap();
        assert_eq!(raw[0].unit_number, "304");
    }

    #[tokio::test]
    async fn test_modal_open_and_close() {
        let mut detail = sunset().await;
        let page = detail.page_mut().unwrap();

        assert!(!page.open_layout("nope"));
        assert!(!page.state.modal.is_open());

        assert!(page.open_layout("sunset-2br"));
        assert_eq!(page.state.modal.selected().unwrap().name, "The Magnolia 2BR/2BA");

        page.close_layout();
        assert!(page.state.modal.selected().is_none());
    }

    #[tokio::test]
    async fn test_features_grouped() {
        let detail = sunset().await;
        let groups = detail.page().unwrap().features_by_category();
        let categories: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            categories,
            vec![
                FeatureCategory::Security,
                FeatureCategory::Sustainability,
                FeatureCategory::Convenience
            ]
        );
    }

    #[tokio::test]
    async fn test_gallery_shows_property_photos_only() {
        let detail = sunset().await;
        let ids: Vec<_> = detail
            .page()
            .unwrap()
            .gallery()
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, vec!["sunset-exterior", "sunset-lobby"]);
    }

    #[tokio::test]
    async fn test_tab_counts() {
        let detail = sunset().await;
        let page = detail.page().unwrap();
        assert_eq!(page.tab_count(DetailTab::Overview), None);
        assert_eq!(page.tab_count(DetailTab::Layouts), Some(2));
        assert_eq!(page.tab_count(DetailTab::Amenities), Some(2));
        assert_eq!(page.tab_count(DetailTab::Gallery), Some(2));

        let bare = DetailPage::new(crate::models::fixtures::property("9", "Bare", 10, 5));
        assert_eq!(bare.tab_count(DetailTab::Layouts), Some(0));
        assert_eq!(bare.tab_count(DetailTab::Amenities), Some(0));
        assert_eq!(bare.tab_count(DetailTab::Gallery), Some(0));
    }

    #[tokio::test]
    async fn test_hero_image_falls_back_to_property_photo() {
        let detail = sunset().await;
        let page = detail.page().unwrap();
        let cards = page.layout_cards();
        assert_eq!(cards[0].hero_image().map(|i| i.id.as_str()), Some("laurel-living"));

        let mut property = page.property.clone();
        if let Some(layouts) = property.layouts.as_mut() {
            layouts[0].marketing_images.clear();
        }
        let bare = DetailPage::new(property);
        let cards = bare.layout_cards();
        assert_eq!(cards[0].hero_image().map(|i| i.id.as_str()), Some("sunset-exterior"));

        let mut property = bare.property.clone();
        property.images.clear();
        let empty = DetailPage::new(property);
        assert!(empty.layout_cards()[0].hero_image().is_none());
    }
}
