//! Presentation gallery: built-in slide list with fragment extraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! No API calls. Selecting a slide fetches its HTML, parses it off-page and
//! shows only its title, image and description in the viewer. The viewer's
//! load ticket keeps a late response from overwriting a newer selection.

use leptos::prelude::*;

use crate::components::map_list::MapList;
use crate::components::map_viewer::MapViewer;
use crate::components::tab_bar::{TabBar, TabPanel};
use crate::state::manifest::{ManifestState, STATIC_SLIDES};
use crate::state::tabs::{GalleryTab, TabState};
use crate::state::viewer::ViewerState;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let tabs = RwSignal::new(TabState::<GalleryTab>::default());
    let manifest = RwSignal::new(ManifestState::from_static(STATIC_SLIDES));
    let viewer = RwSignal::new(ViewerState::default());

    let on_view = Callback::new(move |url: String| load_slide(viewer, url));

    view! {
        <div class="dashboard dashboard--static">
            <header class="dashboard__header">
                <h1>"Wildfire Fuel Mapping"</h1>
                <p class="dashboard__subtitle">"Project presentation"</p>
                <a class="dashboard__switch" href="/">"Live dashboard"</a>
            </header>

            <TabBar tabs=tabs/>

            <TabPanel tabs=tabs tab=GalleryTab::Slides>
                <MapList manifest=manifest viewer=viewer on_view=on_view action_label="View"/>
                <MapViewer viewer=viewer/>
            </TabPanel>

            <TabPanel tabs=tabs tab=GalleryTab::About>
                <h2>"About"</h2>
                <p>
                    "Each slide is a pre-rendered page from the analysis pipeline. The gallery "
                    "shows its headline, figure and summary without loading the page itself."
                </p>
            </TabPanel>
        </div>
    }
}

/// Fetch one slide and swap its fragments into the viewer.
fn load_slide(viewer: RwSignal<ViewerState>, url: String) {
    let Some(ticket) = viewer.try_update(|v| v.begin_load(&url)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::util::fragment::{BrowserDocument, PRESENTATION_ROOT, extract_fragments};

        let result = crate::net::api::fetch_document(ticket.url())
            .await
            .and_then(|html| BrowserDocument::parse(&html))
            .map(|doc| extract_fragments(&doc, PRESENTATION_ROOT));
        if let Ok(fragments) = &result
            && fragments.is_empty()
        {
            leptos::logging::warn!("slide {} has no title, image or description", ticket.url());
        }
        viewer.update(|v| {
            let current = v.epoch();
            if !v.finish_load(&ticket, result) {
                leptos::logging::log!(
                    "discarding stale slide {} (epoch {}, current {current})",
                    ticket.url(),
                    ticket.epoch()
                );
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ticket;
    }
}
