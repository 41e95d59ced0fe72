/// Listing page, also the target of the detail view's back link
pub const PROPERTIES_PATH: &str = "/properties";

/// Top-level view a path maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Properties,
    MediaLibrary,
    PropertyDetail(String),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_start_matches('/').trim_end_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] => Route::Dashboard,
            ["properties"] => Route::Properties,
            ["media"] => Route::MediaLibrary,
            ["properties", id] if !id.is_empty() => Route::PropertyDetail(id.to_string()),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Properties => PROPERTIES_PATH.to_string(),
            Route::MediaLibrary => "/media".to_string(),
            Route::PropertyDetail(id) => format!("{}/{}", PROPERTIES_PATH, id),
            Route::NotFound => "/404".to_string(),
        }
    }
}
