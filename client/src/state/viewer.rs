//! The single map viewer region and its load protocol.
//!
//! DESIGN
//! ======
//! All viewer mutations go through [`ViewerState::set_content`], which
//! replaces the previous content wholesale; nothing patches a fragment in
//! place. Each selection opens a new epoch and hands out a [`LoadTicket`]; a
//! fetch result is applied only while its ticket is still current, so a slow
//! response for an earlier click can never overwrite a newer selection.
//!
//! Fragment loads move `Idle -> Loading -> {Rendered | Failed}` and any new
//! selection restarts at `Loading`. Embeds jump straight to `Rendered`.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::net::error::FetchError;
use crate::util::fragment::MapFragments;

/// DOM id of the viewer region, used as the scroll target.
pub const VIEWER_REGION_ID: &str = "mapViewer";

pub const IDLE_TEXT: &str = "Select a map above to view it here.";
pub const LOADING_TEXT: &str = "Loading map...";
pub const FAILED_TEXT: &str = "Error loading map. Please try again.";

/// Fixed height of the embedded map frame, in CSS pixels.
pub const EMBED_HEIGHT_PX: u32 = 600;

/// What the viewer region currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewerContent {
    #[default]
    Idle,
    Loading,
    /// A map document shown in an embedded frame.
    Embed { url: String },
    /// Pieces lifted from a fetched slide.
    Fragments(MapFragments),
    Failed,
}

/// Coarse load phase, derived from the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Rendered,
    Failed,
}

/// Proof that a fetch was started for the selection made at `epoch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
    url: String,
}

impl LoadTicket {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Owner of the viewer region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewerState {
    content: ViewerContent,
    active_url: Option<String>,
    epoch: u64,
    /// Bumped whenever the region should be scrolled into view.
    pub scroll_seq: u64,
}

impl ViewerState {
    pub fn content(&self) -> &ViewerContent {
        &self.content
    }

    /// URL of the map currently selected, if any.
    pub fn active_url(&self) -> Option<&str> {
        self.active_url.as_deref()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn phase(&self) -> LoadPhase {
        match self.content {
            ViewerContent::Idle => LoadPhase::Idle,
            ViewerContent::Loading => LoadPhase::Loading,
            ViewerContent::Embed { .. } | ViewerContent::Fragments(_) => LoadPhase::Rendered,
            ViewerContent::Failed => LoadPhase::Failed,
        }
    }

    /// Replace whatever the viewer shows with `content`.
    pub fn set_content(&mut self, content: ViewerContent) {
        self.content = content;
    }

    /// Show `url` in the embedded frame and request a scroll.
    pub fn embed(&mut self, url: &str) {
        self.select(url);
        self.set_content(ViewerContent::Embed { url: url.to_owned() });
        self.scroll_seq += 1;
    }

    /// Start a fragment load for `url`: show the loading placeholder and
    /// return the ticket the result must present.
    pub fn begin_load(&mut self, url: &str) -> LoadTicket {
        self.select(url);
        self.set_content(ViewerContent::Loading);
        LoadTicket { epoch: self.epoch, url: url.to_owned() }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.epoch == self.epoch
    }

    /// Apply the outcome of the load behind `ticket`.
    ///
    /// A current ticket replaces the loading placeholder with the fragments
    /// or the error placeholder and requests a scroll either way. A stale
    /// ticket changes nothing and returns `false`.
    pub fn finish_load(&mut self, ticket: &LoadTicket, result: Result<MapFragments, FetchError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match result {
            Ok(fragments) => self.set_content(ViewerContent::Fragments(fragments)),
            Err(e) => {
                leptos::logging::error!("error loading map {}: {e}", ticket.url);
                self.set_content(ViewerContent::Failed);
            }
        }
        self.scroll_seq += 1;
        true
    }

    fn select(&mut self, url: &str) {
        self.epoch += 1;
        self.active_url = Some(url.to_owned());
    }
}
