use crate::models::{MediaItem, Property};
use crate::views::filters::OccupancyBand;

/// Portfolio-wide numbers shown on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_properties: usize,
    pub total_units: u64,
    pub occupied_units: u64,
    pub high_occupancy: usize,
    pub low_occupancy: usize,
    /// Most recent uploads first
    pub recent_media: Vec<MediaItem>,
}

impl DashboardSummary {
    pub fn new(properties: &[Property], media: &[MediaItem], recent_limit: usize) -> Self {
        let mut recent_media = media.to_vec();
        recent_media.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        recent_media.truncate(recent_limit);

        Self {
            total_properties: properties.len(),
            total_units: properties.iter().map(|p| u64::from(p.total_units)).sum(),
            occupied_units: properties.iter().map(|p| u64::from(p.occupied_units)).sum(),
            high_occupancy: count_in_band(properties, OccupancyBand::High),
            low_occupancy: count_in_band(properties, OccupancyBand::Low),
            recent_media,
        }
    }

    pub fn vacant_units(&self) -> u64 {
        self.total_units.saturating_sub(self.occupied_units)
    }

    /// Unit-weighted occupancy across the portfolio, as a percentage
    pub fn occupancy_rate(&self) -> f64 {
        if self.total_units == 0 {
            return 0.0;
        }
        self.occupied_units as f64 / self.total_units as f64 * 100.0
    }
}

fn count_in_band(properties: &[Property], band: OccupancyBand) -> usize {
    properties
        .iter()
        .filter(|p| band.matches(p.occupancy_rate()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::property;
    use crate::providers::{MockProvider, PropertyProvider};

    #[tokio::test]
    async fn test_summary_of_sample_portfolio() {
        let provider = MockProvider::new();
        let properties = provider.list_properties().await.unwrap();
        let media = provider.list_media().await.unwrap();

        let summary = DashboardSummary::new(&properties, &media, 3);
        assert_eq!(summary.total_properties, 4);
        assert_eq!(summary.total_units, 189);
        assert_eq!(summary.occupied_units, 165);
        assert_eq!(summary.vacant_units(), 24);
        assert_eq!(summary.high_occupancy + summary.low_occupancy, 4);
        assert_eq!(summary.high_occupancy, 2);

        let recent: Vec<_> = summary.recent_media.iter().map(|m| m.image.id.as_str()).collect();
        assert_eq!(recent, vec!["magnolia-living", "riverside-drone", "riverside-lease"]);
    }

    #[test]
    fn test_unit_totals_exceed_u32() {
        let big = u32::MAX / 2 + 1;
        let properties = vec![
            property("1", "Tower A", big, big),
            property("2", "Tower B", big, big - 1),
        ];

        let summary = DashboardSummary::new(&properties, &[], 0);
        assert_eq!(summary.total_units, 2 * u64::from(big));
        assert_eq!(summary.total_units, u64::from(u32::MAX) + 1);
        assert_eq!(summary.occupied_units, 2 * u64::from(big) - 1);
        assert_eq!(summary.vacant_units(), 1);
        assert!(summary.occupancy_rate() > 99.9);
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = DashboardSummary::new(&[], &[], 5);
        assert_eq!(summary.occupancy_rate(), 0.0);
        assert!(summary.recent_media.is_empty());
    }
}
