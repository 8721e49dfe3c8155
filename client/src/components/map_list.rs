//! List container for the map cards.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::map_card::MapCard;
use crate::state::manifest::{ListView, ManifestState};
use crate::state::viewer::ViewerState;

/// Renders either a single placeholder or one card per descriptor. A new
/// manifest replaces the whole set.
#[component]
pub fn MapList(
    manifest: RwSignal<ManifestState>,
    viewer: RwSignal<ViewerState>,
    on_view: Callback<String>,
    #[prop(default = "View Map")] action_label: &'static str,
) -> impl IntoView {
    view! {
        <div id="mapsList" class="maps-list">
            {move || {
                manifest.with(|m| match m.view() {
                    ListView::Placeholder(text) => view! { <div class="loading">{text}</div> }.into_any(),
                    ListView::Cards(cards) => cards
                        .iter()
                        .cloned()
                        .map(|descriptor| {
                            let url = descriptor.url.clone();
                            let active = Signal::derive(move || viewer.with(|v| v.active_url() == Some(url.as_str())));
                            view! { <MapCard descriptor=descriptor on_view=on_view active=active action_label=action_label/> }
                        })
                        .collect_view()
                        .into_any(),
                })
            }}
        </div>
    }
}
