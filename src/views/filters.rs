use crate::models::{MediaCategory, MediaItem, Property, UnitAvailability};

/// Occupancy percentage at or above which a property counts as high occupancy
pub const HIGH_OCCUPANCY_THRESHOLD: f64 = 90.0;

/// Occupancy band selector for the properties list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OccupancyBand {
    #[default]
    All,
    High,
    Low,
}

impl OccupancyBand {
    pub fn matches(self, occupancy_rate: f64) -> bool {
        match self {
            OccupancyBand::All => true,
            OccupancyBand::High => occupancy_rate >= HIGH_OCCUPANCY_THRESHOLD,
            OccupancyBand::Low => occupancy_rate < HIGH_OCCUPANCY_THRESHOLD,
        }
    }
}

/// Search box and occupancy selector of the properties list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub search: String,
    pub band: OccupancyBand,
}

impl PropertyFilter {
    pub fn new(search: impl Into<String>, band: OccupancyBand) -> Self {
        Self {
            search: search.into(),
            band,
        }
    }

    /// Case-insensitive match against name or formatted address, plus band
    pub fn matches(&self, property: &Property) -> bool {
        let needle = self.search.to_lowercase();
        let text_match = needle.is_empty()
            || property.name.to_lowercase().contains(&needle)
            || property.address.to_string().to_lowercase().contains(&needle);

        text_match && self.band.matches(property.occupancy_rate())
    }
}

/// Properties list contents, keeping "not loaded yet" apart from "no matches"
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyList {
    Loading,
    Loaded(Vec<Property>),
}

impl PropertyList {
    pub fn is_empty_result(&self) -> bool {
        matches!(self, PropertyList::Loaded(items) if items.is_empty())
    }
}

/// Ordered sub-sequence of properties satisfying the filter
pub fn filter_properties(properties: &[Property], filter: &PropertyFilter) -> Vec<Property> {
    properties
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// Media Library category selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaFilter {
    #[default]
    All,
    Category(MediaCategory),
}

impl std::str::FromStr for MediaFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(MediaFilter::All)
        } else {
            Ok(MediaFilter::Category(s.parse()?))
        }
    }
}

pub fn filter_media(items: &[MediaItem], filter: MediaFilter) -> Vec<MediaItem> {
    items
        .iter()
        .filter(|item| match filter {
            MediaFilter::All => true,
            MediaFilter::Category(category) => item.category == category,
        })
        .cloned()
        .collect()
}

/// Units ordered by available date, ascending. Equal dates keep input order.
pub fn sorted_by_available_date(units: &[UnitAvailability]) -> Vec<UnitAvailability> {
    let mut sorted = units.to_vec();
    // sort_by_key is stable
    sorted.sort_by_key(|u| u.available_date);
    sorted
}
