use crate::models::{
    Address, BuildingFeature, CommonSpace, FeatureCategory, Layout, MediaCategory, MediaImage,
    MediaItem, MediaKind, Property, PropertyType, UnitAvailability,
};
use crate::providers::traits::PropertyProvider;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use tracing::{debug, info};

/// In-memory provider serving a fixed sample portfolio
pub struct MockProvider {
    properties: Vec<Property>,
    media: Vec<MediaItem>,
}

impl MockProvider {
    pub fn new() -> Self {
        info!("📋 Loading sample portfolio");
        Self {
            properties: sample_properties(),
            media: sample_media(),
        }
    }

    /// Provider over caller-supplied data
    pub fn with_data(properties: Vec<Property>, media: Vec<MediaItem>) -> Self {
        Self { properties, media }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyProvider for MockProvider {
    async fn list_properties(&self) -> Result<Vec<Property>> {
        Ok(self.properties.clone())
    }

    async fn get_property(&self, id: &str) -> Result<Option<Property>> {
        debug!("Looking up property {}", id);
        Ok(self.properties.iter().find(|p| p.id == id).cloned())
    }

    async fn list_media(&self) -> Result<Vec<MediaItem>> {
        Ok(self.media.clone())
    }

    fn source_name(&self) -> &'static str {
        "Sample data"
    }
}

fn image(id: &str, title: &str) -> MediaImage {
    MediaImage {
        id: id.to_string(),
        url: format!("https://images.example.com/{}.jpg", id),
        thumbnail_url: Some(format!("https://images.example.com/{}_thumb.jpg", id)),
        title: Some(title.to_string()),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn address(street: &str, city: &str, state: &str, zip: &str) -> Address {
    Address {
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip: zip.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            name: "Sunset Apartments".to_string(),
            address: address("123 Sunset Blvd", "Los Angeles", "CA", "90028"),
            total_units: 50,
            occupied_units: 46,
            property_type: PropertyType::Apartment,
            amenities: strings(&["Pool", "Fitness Center", "Parking", "Pet Friendly"]),
            images: vec![
                image("sunset-exterior", "Exterior"),
                image("sunset-lobby", "Lobby"),
            ],
            layouts: Some(vec![
                Layout {
                    id: "sunset-1br".to_string(),
                    name: "The Laurel 1BR/1BA".to_string(),
                    description: "Open-concept one bedroom with a private balcony.".to_string(),
                    bedrooms: 1.0,
                    bathrooms: 1.0,
                    square_feet: 750,
                    base_rent: 1850.0,
                    available_units: 2,
                    marketing_images: vec![
                        image("laurel-living", "Living room"),
                        image("laurel-kitchen", "Kitchen"),
                    ],
                    floor_plan: Some(image("laurel-plan", "Floor plan")),
                    virtual_tour_url: Some("https://tours.example.com/laurel".to_string()),
                    features: strings(&["Balcony", "In-unit laundry", "Stainless appliances"]),
                    unit_availability: Some(vec![
                        UnitAvailability {
                            unit_number: "304".to_string(),
                            floor: 3,
                            available_date: date(2024, 8, 1),
                            is_immediately_available: false,
                            rent_amount: 1895.0,
                            deposit_amount: 500.0,
                            special_offer: None,
                        },
                        UnitAvailability {
                            unit_number: "112".to_string(),
                            floor: 1,
                            available_date: date(2024, 6, 15),
                            is_immediately_available: true,
                            rent_amount: 1850.0,
                            deposit_amount: 500.0,
                            special_offer: Some("First month free".to_string()),
                        },
                    ]),
                },
                Layout {
                    id: "sunset-2br".to_string(),
                    name: "The Magnolia 2BR/2BA".to_string(),
                    description: "Corner unit with split bedrooms and walk-in closets.".to_string(),
                    bedrooms: 2.0,
                    bathrooms: 2.0,
                    square_feet: 1100,
                    base_rent: 2650.0,
                    available_units: 1,
                    marketing_images: vec![image("magnolia-living", "Living room")],
                    floor_plan: Some(image("magnolia-plan", "Floor plan")),
                    virtual_tour_url: None,
                    features: strings(&["Corner unit", "Walk-in closets"]),
                    unit_availability: Some(vec![UnitAvailability {
                        unit_number: "508".to_string(),
                        floor: 5,
                        available_date: date(2024, 9, 1),
                        is_immediately_available: false,
                        rent_amount: 2700.0,
                        deposit_amount: 750.0,
                        special_offer: None,
                    }]),
                },
            ]),
            common_spaces: Some(vec![
                CommonSpace {
                    id: "sunset-pool".to_string(),
                    name: "Rooftop Pool".to_string(),
                    description: "Heated saltwater pool with cabanas.".to_string(),
                    hours_of_operation: "7:00 AM - 10:00 PM".to_string(),
                    requires_reservation: false,
                    features: strings(&["Cabanas", "Grill stations"]),
                    images: vec![image("sunset-pool", "Pool deck")],
                },
                CommonSpace {
                    id: "sunset-lounge".to_string(),
                    name: "Resident Lounge".to_string(),
                    description: "Event space with a catering kitchen.".to_string(),
                    hours_of_operation: "24/7".to_string(),
                    requires_reservation: true,
                    features: strings(&["Catering kitchen", "Projector"]),
                    images: vec![],
                },
            ]),
            building_features: Some(vec![
                BuildingFeature {
                    id: "sunset-access".to_string(),
                    name: "Keyless Entry".to_string(),
                    description: "Smartphone-based access control.".to_string(),
                    category: FeatureCategory::Security,
                },
                BuildingFeature {
                    id: "sunset-solar".to_string(),
                    name: "Solar Panels".to_string(),
                    description: "Rooftop array offsetting common-area power.".to_string(),
                    category: FeatureCategory::Sustainability,
                },
                BuildingFeature {
                    id: "sunset-lockers".to_string(),
                    name: "Package Lockers".to_string(),
                    description: "Secure 24/7 parcel pickup.".to_string(),
                    category: FeatureCategory::Convenience,
                },
            ]),
        },
        Property {
            id: "2".to_string(),
            name: "Riverside Manor".to_string(),
            address: address("456 River Rd", "Portland", "OR", "97201"),
            total_units: 75,
            occupied_units: 66,
            property_type: PropertyType::Condo,
            amenities: strings(&["Parking", "Storage", "River View"]),
            images: vec![image("riverside-exterior", "Exterior")],
            layouts: None,
            common_spaces: None,
            building_features: None,
        },
        Property {
            id: "3".to_string(),
            name: "Oak Park Townhomes".to_string(),
            address: address("789 Oak Ave", "Austin", "TX", "78701"),
            total_units: 24,
            occupied_units: 23,
            property_type: PropertyType::Townhouse,
            amenities: strings(&["Private Garage", "Playground"]),
            images: vec![],
            layouts: None,
            common_spaces: None,
            building_features: None,
        },
        Property {
            id: "4".to_string(),
            name: "Harbor Lofts".to_string(),
            address: address("12 Harbor Way", "Seattle", "WA", "98101"),
            total_units: 40,
            occupied_units: 30,
            property_type: PropertyType::MixedUse,
            amenities: strings(&["Coworking", "Bike Storage"]),
            images: vec![image("harbor-exterior", "Exterior")],
            layouts: None,
            common_spaces: None,
            building_features: None,
        },
    ]
}

fn sample_media() -> Vec<MediaItem> {
    let item = |id: &str,
                title: &str,
                kind: MediaKind,
                category: MediaCategory,
                property: &str,
                day: u32,
                size_bytes: u64| {
        let mut image = image(id, title);
        match kind {
            MediaKind::Image => {}
            MediaKind::Video => image.url = format!("https://media.example.com/{}.mp4", id),
            MediaKind::Document => image.url = format!("https://docs.example.com/{}.pdf", id),
        }
        MediaItem {
            image,
            kind,
            category,
            property_id: Some(property.to_string()),
            uploaded_at: Utc
                .with_ymd_and_hms(2024, 5, day, 12, 0, 0)
                .single()
                .unwrap_or_default(),
            size_bytes,
        }
    };

    vec![
        item("sunset-exterior", "Sunset exterior", MediaKind::Image, MediaCategory::Property, "1", 2, 2_400_000),
        item("sunset-pool", "Rooftop pool", MediaKind::Image, MediaCategory::Amenity, "1", 5, 1_800_000),
        item("laurel-living", "Laurel living room", MediaKind::Image, MediaCategory::Unit, "1", 9, 1_200_000),
        item("riverside-lease", "Riverside lease template", MediaKind::Document, MediaCategory::Legal, "2", 11, 350_000),
        item("riverside-drone", "Riverside drone footage", MediaKind::Video, MediaCategory::Property, "2", 14, 45_000_000),
        item("magnolia-living", "Magnolia living room", MediaKind::Image, MediaCategory::Unit, "1", 20, 1_300_000),
    ]
}
