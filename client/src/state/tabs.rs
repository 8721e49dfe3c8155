//! Tab selection for the dashboard and gallery pages.
//!
//! Exactly one tab is active at a time. Selection lives only in memory; a
//! reload starts again at the page's default tab.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

/// A tab identifier with a stable DOM key and a button label.
pub trait TabId: Copy + Eq + Send + Sync + 'static {
    /// Every tab of this kind, in button order.
    const ALL: &'static [Self];

    /// Key used for the panel id (`<key>-tab`) and `data-tab`.
    fn key(self) -> &'static str;

    fn label(self) -> &'static str;

    fn panel_id(self) -> String {
        format!("{}-tab", self.key())
    }
}

/// Tabs of the live dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LiveTab {
    #[default]
    Overview,
    Maps,
    Comparison,
    Data,
}

impl TabId for LiveTab {
    const ALL: &'static [Self] = &[Self::Overview, Self::Maps, Self::Comparison, Self::Data];

    fn key(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Maps => "maps",
            Self::Comparison => "comparison",
            Self::Data => "data",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Maps => "Interactive Maps",
            Self::Comparison => "Comparison",
            Self::Data => "Data & Methods",
        }
    }
}

/// Tabs of the static gallery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GalleryTab {
    #[default]
    Slides,
    About,
}

impl TabId for GalleryTab {
    const ALL: &'static [Self] = &[Self::Slides, Self::About];

    fn key(self) -> &'static str {
        match self {
            Self::Slides => "slides",
            Self::About => "about",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Slides => "Presentation",
            Self::About => "About",
        }
    }
}

/// The active tab of one tab group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabState<T: TabId> {
    active: T,
}

impl<T: TabId> TabState<T> {
    pub fn new(active: T) -> Self {
        Self { active }
    }

    pub fn active(&self) -> T {
        self.active
    }

    /// Activate `tab`, deactivating every other.
    pub fn select(&mut self, tab: T) {
        self.active = tab;
    }

    pub fn is_active(&self, tab: T) -> bool {
        self.active == tab
    }
}
