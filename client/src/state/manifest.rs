//! Map manifests: the ordered descriptor list behind the card grid.
//!
//! DESIGN
//! ======
//! The live dashboard builds descriptors from `/api/maps` entries, deriving
//! the human title from the file stem and the blurb from a description table
//! that is plain data. The gallery uses a fixed slide list compiled into the
//! binary. Both land in the same [`ManifestState`], whose [`ListView`] is the
//! single source for what the list container shows: one placeholder, or one
//! card per descriptor.

#[cfg(test)]
#[path = "manifest_test.rs"]
mod manifest_test;

use std::collections::HashMap;

use crate::net::error::FetchError;
use crate::net::types::MapEntry;

pub const LOADING_MAPS_TEXT: &str = "Loading maps...";
pub const NO_REMOTE_MAPS_TEXT: &str = "No maps available yet. Run the pipeline to generate maps.";
pub const NO_STATIC_MAPS_TEXT: &str = "No maps available";
pub const MAPS_ERROR_TEXT: &str = "Error loading maps";

/// Blurb for maps the description table does not know.
pub const FALLBACK_DESCRIPTION: &str = "Interactive map visualization";

/// Descriptions for the maps the pipeline is known to generate.
pub const DEFAULT_DESCRIPTIONS: &[(&str, &str)] = &[
    ("hermits_peak_interactive_map", "Full interactive map with all layers and controls"),
    (
        "hermits_peak_comparison_map",
        "Side-by-side comparison of LANDFIRE baseline vs Enhanced fuel map",
    ),
];

/// Metadata identifying one viewable map artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapDescriptor {
    /// Unique key (file stem).
    pub name: String,
    pub url: String,
    pub display_name: String,
    pub description: String,
}

impl MapDescriptor {
    /// Build a descriptor for a listed map.
    pub fn from_entry(entry: &MapEntry, descriptions: &DescriptionTable) -> Self {
        Self {
            name: entry.name.clone(),
            url: entry.url.clone(),
            display_name: format_map_name(&entry.name),
            description: descriptions.describe(&entry.name).to_owned(),
        }
    }
}

/// `hermits_peak_comparison_map` becomes `Hermits Peak Comparison Map`.
///
/// Underscores become spaces and the first letter of each word is
/// upper-cased; the rest of each word is kept as written.
pub fn format_map_name(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for ch in spaced.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

// =============================================================================
// DESCRIPTION TABLE
// =============================================================================

/// Map-name → description lookup with a generic fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DescriptionTable {
    entries: HashMap<String, String>,
    fallback: String,
}

impl DescriptionTable {
    pub fn new<I, K, V>(entries: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            fallback: fallback.into(),
        }
    }

    pub fn describe(&self, name: &str) -> &str {
        self.entries.get(name).map_or(self.fallback.as_str(), String::as_str)
    }
}

impl Default for DescriptionTable {
    fn default() -> Self {
        Self::new(DEFAULT_DESCRIPTIONS.iter().copied(), FALLBACK_DESCRIPTION)
    }
}

// =============================================================================
// STATIC SLIDES
// =============================================================================

/// One entry of the compiled-in gallery manifest.
#[derive(Clone, Copy, Debug)]
pub struct StaticSlide {
    pub name: &'static str,
    pub url: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
}

pub const STATIC_SLIDES: &[StaticSlide] = &[
    StaticSlide {
        name: "01_overview",
        url: "/maps/01_overview.html",
        display_name: "Project Overview",
        description: "Problem, solution, and key results at a glance",
    },
    StaticSlide {
        name: "02_change_detection",
        url: "/maps/02_change_detection.html",
        display_name: "Change Detection",
        description: "Satellite-detected vegetation stress from 2020-2022",
    },
    StaticSlide {
        name: "03_prediction",
        url: "/maps/03_prediction.html",
        display_name: "Prediction Comparison",
        description: "LANDFIRE baseline vs enhanced fuel map",
    },
    StaticSlide {
        name: "04_validation",
        url: "/maps/04_validation.html",
        display_name: "Validation Results",
        description: "Quantitative proof of 43% improvement",
    },
    StaticSlide {
        name: "05_summary",
        url: "/maps/05_summary.html",
        display_name: "Complete Summary",
        description: "Key takeaways and operational applications",
    },
];

impl From<&StaticSlide> for MapDescriptor {
    fn from(slide: &StaticSlide) -> Self {
        Self {
            name: slide.name.to_owned(),
            url: slide.url.to_owned(),
            display_name: slide.display_name.to_owned(),
            description: slide.description.to_owned(),
        }
    }
}

// =============================================================================
// LIST STATE
// =============================================================================

/// Where a manifest came from; decides the empty-list wording.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ManifestSource {
    #[default]
    Remote,
    Static,
}

impl ManifestSource {
    pub fn empty_text(self) -> &'static str {
        match self {
            Self::Remote => NO_REMOTE_MAPS_TEXT,
            Self::Static => NO_STATIC_MAPS_TEXT,
        }
    }
}

/// Lifecycle of the list container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MapListState {
    #[default]
    Loading,
    Loaded(Vec<MapDescriptor>),
    Failed,
}

/// What the list container renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListView<'a> {
    Placeholder(&'static str),
    Cards(&'a [MapDescriptor]),
}

/// Manifest for one page, plus the epoch of the newest load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManifestState {
    pub source: ManifestSource,
    pub list: MapListState,
    epoch: u64,
}

impl ManifestState {
    /// The compiled-in gallery manifest. Cannot fail.
    pub fn from_static(slides: &[StaticSlide]) -> Self {
        Self {
            source: ManifestSource::Static,
            list: MapListState::Loaded(slides.iter().map(MapDescriptor::from).collect()),
            epoch: 0,
        }
    }

    /// Start a remote (re)load. The previous card set stays in memory but is
    /// replaced by the loading placeholder until the result lands.
    pub fn begin_load(&mut self) -> u64 {
        self.epoch += 1;
        self.source = ManifestSource::Remote;
        self.list = MapListState::Loading;
        self.epoch
    }

    /// Apply the result of the load started at `epoch`.
    ///
    /// Returns `false` and leaves the state untouched when a newer load has
    /// started since.
    pub fn finish_load(
        &mut self,
        epoch: u64,
        result: Result<Vec<MapEntry>, FetchError>,
        descriptions: &DescriptionTable,
    ) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.list = match result {
            Ok(entries) => {
                MapListState::Loaded(entries.iter().map(|e| MapDescriptor::from_entry(e, descriptions)).collect())
            }
            Err(e) if e.is_network() => {
                leptos::logging::warn!("map listing request failed: {e}");
                MapListState::Failed
            }
            Err(e) => {
                leptos::logging::error!("map listing unreadable: {e}");
                MapListState::Failed
            }
        };
        true
    }

    pub fn view(&self) -> ListView<'_> {
        match &self.list {
            MapListState::Loading => ListView::Placeholder(LOADING_MAPS_TEXT),
            MapListState::Failed => ListView::Placeholder(MAPS_ERROR_TEXT),
            MapListState::Loaded(maps) if maps.is_empty() => ListView::Placeholder(self.source.empty_text()),
            MapListState::Loaded(maps) => ListView::Cards(maps),
        }
    }

    /// Short count shown beside the list heading; empty when there are no cards.
    pub fn count_text(&self) -> String {
        match self.descriptors().len() {
            0 => String::new(),
            1 => "1 map".to_owned(),
            n => format!("{n} maps"),
        }
    }

    pub fn descriptors(&self) -> &[MapDescriptor] {
        match &self.list {
            MapListState::Loaded(maps) => maps,
            MapListState::Loading | MapListState::Failed => &[],
        }
    }
}
