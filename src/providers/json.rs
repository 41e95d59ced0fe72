use crate::models::{MediaItem, Property};
use crate::providers::traits::PropertyProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// On-disk snapshot layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

/// Provider backed by a JSON snapshot read once at startup
pub struct JsonProvider {
    snapshot: Snapshot,
}

impl JsonProvider {
    /// Load and validate a snapshot file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading property snapshot from {}", path.display());

        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;

        Self::from_json(&contents)
            .with_context(|| format!("Invalid snapshot {}", path.display()))
    }

    /// Parse and validate a snapshot from a JSON string
    pub fn from_json(contents: &str) -> Result<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(contents).context("Failed to parse snapshot JSON")?;

        for property in &snapshot.properties {
            property.validate()?;
        }
        warn_on_stale_flags(&snapshot.properties);

        debug!(
            "Snapshot holds {} properties and {} media items",
            snapshot.properties.len(),
            snapshot.media.len()
        );

        Ok(Self { snapshot })
    }
}

/// Availability flags are trusted as stored; disagreements are only reported.
fn warn_on_stale_flags(properties: &[Property]) {
    let today = Utc::now().date_naive();
    for property in properties {
        for layout in property.layouts() {
            for unit in layout.unit_availability.iter().flatten() {
                if !unit.is_flag_consistent(today) {
                    warn!(
                        "Unit {} in layout {} is flagged immediately available but opens on {}",
                        unit.unit_number, layout.id, unit.available_date
                    );
                }
            }
        }
    }
}

#[async_trait]
impl PropertyProvider for JsonProvider {
    async fn list_properties(&self) -> Result<Vec<Property>> {
        Ok(self.snapshot.properties.clone())
    }

    async fn get_property(&self, id: &str) -> Result<Option<Property>> {
        Ok(self.snapshot.properties.iter().find(|p| p.id == id).cloned())
    }

    async fn list_media(&self) -> Result<Vec<MediaItem>> {
        Ok(self.snapshot.media.clone())
    }

    fn source_name(&self) -> &'static str {
        "JSON snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaKind;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "properties": [{
            "id": "1",
            "name": "Sunset Apartments",
            "address": {"street": "123 Sunset Blvd", "city": "Los Angeles", "state": "CA", "zip": "90028"},
            "totalUnits": 50,
            "occupiedUnits": 46,
            "type": "apartment",
            "layouts": [{
                "id": "l1",
                "name": "1BR",
                "description": "One bedroom",
                "bedrooms": 1,
                "bathrooms": 1,
                "squareFeet": 700,
                "baseRent": 1500,
                "availableUnits": 1,
                "unitAvailability": [{
                    "unitNumber": "101",
                    "floor": 1,
                    "availableDate": "2024-06-01",
                    "isImmediatelyAvailable": true,
                    "rentAmount": 1500,
                    "depositAmount": 500
                }]
            }]
        }],
        "media": [{
            "id": "m1",
            "url": "https://cdn.example.com/m1.jpg",
            "title": "Lease",
            "type": "document",
            "category": "legal",
            "propertyId": "1",
            "uploadedAt": "2024-05-01T12:00:00Z",
            "sizeBytes": 2048
        }]
    }"#;

    #[tokio::test]
    async fn test_load_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let provider = JsonProvider::load(file.path()).await.unwrap();
        let props = provider.list_properties().await.unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].layouts()[0].unit_availability.as_ref().unwrap().len(), 1);

        let media = provider.list_media().await.unwrap();
        assert_eq!(media[0].image.title.as_deref(), Some("Lease"));
        assert_eq!(media[0].kind, MediaKind::Document);
        assert!(provider.get_property("2").await.unwrap().is_none());
    }

    #[test]
    fn test_rejects_invalid_occupancy() {
        let bad = SNAPSHOT.replace("\"occupiedUnits\": 46", "\"occupiedUnits\": 60");
        let err = JsonProvider::from_json(&bad).err().unwrap();
        assert!(err.to_string().contains("exceed total units"));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let bad = SNAPSHOT.replace("\"category\": \"legal\"", "\"category\": \"floorplan\"");
        assert!(JsonProvider::from_json(&bad).is_err());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = JsonProvider::load("/nonexistent/snapshot.json").await;
        assert!(result.is_err());
    }
}
