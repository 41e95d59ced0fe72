pub mod dashboard;
pub mod detail;
pub mod filters;
pub mod media_library;
pub mod state;

pub use dashboard::DashboardSummary;
pub use detail::{DetailPage, LayoutCard, PropertyDetail};
pub use filters::{
    filter_media, filter_properties, sorted_by_available_date, MediaFilter, OccupancyBand,
    PropertyFilter, PropertyList,
};
pub use media_library::MediaLibrary;
pub use state::{DetailTab, DetailViewState, DownloadState, LayoutSelection, MediaViewMode};
