use crate::models::Layout;

/// Tab selector of the property detail view. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Overview,
    Layouts,
    Amenities,
    Gallery,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Layouts,
        DetailTab::Amenities,
        DetailTab::Gallery,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Layouts => "Floor Plans",
            DetailTab::Amenities => "Amenities",
            DetailTab::Gallery => "Gallery",
        }
    }
}

/// Layout shown in the floor-plan modal, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSelection {
    selected: Option<Layout>,
}

impl LayoutSelection {
    pub fn open(&mut self, layout: Layout) {
        self.selected = Some(layout);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Click on the backdrop outside the modal body
    pub fn click_outside(&mut self) {
        self.close();
    }

    pub fn selected(&self) -> Option<&Layout> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

/// In-flight status of the asset download
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DownloadState {
    #[default]
    Idle,
    Downloading,
}

impl DownloadState {
    /// Move to `Downloading`. Returns false (and changes nothing) if already there.
    pub fn try_begin(&mut self) -> bool {
        match self {
            DownloadState::Idle => {
                *self = DownloadState::Downloading;
                true
            }
            DownloadState::Downloading => false,
        }
    }

    pub fn finish(&mut self) {
        *self = DownloadState::Idle;
    }

    /// Download button is disabled while a download runs
    pub fn is_control_disabled(self) -> bool {
        self == DownloadState::Downloading
    }
}

/// Grid or list presentation in the media library
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaViewMode {
    #[default]
    Grid,
    List,
}

impl MediaViewMode {
    pub fn toggled(self) -> Self {
        match self {
            MediaViewMode::Grid => MediaViewMode::List,
            MediaViewMode::List => MediaViewMode::Grid,
        }
    }
}

/// Transient UI state of the property detail view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailViewState {
    pub tab: DetailTab,
    pub modal: LayoutSelection,
}

impl DetailViewState {
    pub fn select_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }
}
