pub mod media;

pub use media::{MediaCategory, MediaItem, MediaKind};

use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of building a property is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    Condo,
    Townhouse,
    MixedUse,
    Other,
}

/// Grouping for property-wide building features
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    Security,
    Technology,
    Sustainability,
    Convenience,
    Other,
}

impl FeatureCategory {
    pub const ALL: [FeatureCategory; 5] = [
        FeatureCategory::Security,
        FeatureCategory::Technology,
        FeatureCategory::Sustainability,
        FeatureCategory::Convenience,
        FeatureCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FeatureCategory::Security => "Security",
            FeatureCategory::Technology => "Technology",
            FeatureCategory::Sustainability => "Sustainability",
            FeatureCategory::Convenience => "Convenience",
            FeatureCategory::Other => "Other",
        }
    }
}

/// Postal address of a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.city, self.state, self.zip)
    }
}

/// An image attached to a property, layout or common space
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaImage {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// A leasable unit tied to a layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnitAvailability {
    pub unit_number: String,
    pub floor: i32,
    pub available_date: NaiveDate,
    /// Stored as supplied; never recomputed from `available_date`.
    pub is_immediately_available: bool,
    pub rent_amount: f64,
    pub deposit_amount: f64,
    #[serde(default)]
    pub special_offer: Option<String>,
}

impl UnitAvailability {
    /// Whether the stored availability flag agrees with the date as of `today`.
    pub fn is_flag_consistent(&self, today: NaiveDate) -> bool {
        !self.is_immediately_available || self.available_date <= today
    }

    /// Whole days from `today` until the unit opens; zero or negative once open.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.available_date - today).num_days()
    }
}

/// Floor-plan / unit-type definition within a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub id: String,
    pub name: String,
    pub description: String,
    pub bedrooms: f32,
    pub bathrooms: f32,
    pub square_feet: u32,
    pub base_rent: f64,
    pub available_units: u32,
    #[serde(default)]
    pub marketing_images: Vec<MediaImage>,
    #[serde(default)]
    pub floor_plan: Option<MediaImage>,
    #[serde(default)]
    pub virtual_tour_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub unit_availability: Option<Vec<UnitAvailability>>,
}

impl Layout {
    /// Image for the floor-plan modal: the plan, else the first marketing image
    pub fn modal_image(&self) -> Option<&MediaImage> {
        self.floor_plan.as_ref().or(self.marketing_images.first())
    }
}

/// Shared amenity area such as a pool or lobby
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommonSpace {
    pub id: String,
    pub name: String,
    pub description: String,
    pub hours_of_operation: String,
    pub requires_reservation: bool,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<MediaImage>,
}

/// Property-wide attribute independent of any unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildingFeature {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: FeatureCategory,
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: Address,
    pub total_units: u32,
    pub occupied_units: u32,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<MediaImage>,
    #[serde(default)]
    pub layouts: Option<Vec<Layout>>,
    #[serde(default)]
    pub common_spaces: Option<Vec<CommonSpace>>,
    #[serde(default)]
    pub building_features: Option<Vec<BuildingFeature>>,
}

impl Property {
    /// Occupied share of units as a percentage
    pub fn occupancy_rate(&self) -> f64 {
        if self.total_units == 0 {
            return 0.0;
        }
        f64::from(self.occupied_units) / f64::from(self.total_units) * 100.0
    }

    pub fn vacant_units(&self) -> u32 {
        self.total_units.saturating_sub(self.occupied_units)
    }

    pub fn layouts(&self) -> &[Layout] {
        self.layouts.as_deref().unwrap_or_default()
    }

    pub fn common_spaces(&self) -> &[CommonSpace] {
        self.common_spaces.as_deref().unwrap_or_default()
    }

    pub fn building_features(&self) -> &[BuildingFeature] {
        self.building_features.as_deref().unwrap_or_default()
    }

    /// Check the structural invariants of a property and everything it owns
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            bail!("property has an empty id");
        }
        if self.occupied_units > self.total_units {
            bail!(
                "property {}: occupied units ({}) exceed total units ({})",
                self.id,
                self.occupied_units,
                self.total_units
            );
        }

        for layout in self.layouts() {
            if layout.id.trim().is_empty() {
                bail!("property {}: layout with empty id", self.id);
            }
            if layout.bedrooms < 0.0 || layout.bathrooms < 0.0 {
                bail!("layout {}: negative bedroom or bathroom count", layout.id);
            }
            if layout.base_rent < 0.0 {
                bail!("layout {}: negative base rent", layout.id);
            }
            for unit in layout.unit_availability.iter().flatten() {
                if unit.rent_amount < 0.0 || unit.deposit_amount < 0.0 {
                    bail!(
                        "layout {} unit {}: negative rent or deposit",
                        layout.id,
                        unit.unit_number
                    );
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn property(id: &str, name: &str, total: u32, occupied: u32) -> Property {
        Property {
            id: id.to_string(),
            name: name.to_string(),
            address: Address {
                street: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip: "62701".to_string(),
            },
            total_units: total,
            occupied_units: occupied,
            property_type: PropertyType::Apartment,
            amenities: vec![],
            images: vec![],
            layouts: None,
            common_spaces: None,
            building_features: None,
        }
    }

    pub fn unit(number: &str, date: &str) -> UnitAvailability {
        UnitAvailability {
            unit_number: number.to_string(),
            floor: 1,
            available_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            is_immediately_available: false,
            rent_amount: 1500.0,
            deposit_amount: 500.0,
            special_offer: None,
        }
    }

    pub fn layout(id: &str) -> Layout {
        Layout {
            id: id.to_string(),
            name: "2BR/2BA".to_string(),
            description: "Corner unit".to_string(),
            bedrooms: 2.0,
            bathrooms: 2.0,
            square_feet: 950,
            base_rent: 1850.0,
            available_units: 2,
            marketing_images: vec![],
            floor_plan: None,
            virtual_tour_url: None,
            features: vec![],
            unit_availability: None,
        }
    }
}
