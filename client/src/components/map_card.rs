//! Summary card for one map descriptor.

use leptos::prelude::*;

use crate::state::manifest::MapDescriptor;

/// A card with the map's title, blurb and a button that hands its URL to
/// `on_view`. All text is rendered as escaped text nodes.
#[component]
pub fn MapCard(
    descriptor: MapDescriptor,
    on_view: Callback<String>,
    #[prop(into)] active: Signal<bool>,
    #[prop(default = "View Map")] action_label: &'static str,
) -> impl IntoView {
    let MapDescriptor { name, url, display_name, description } = descriptor;
    view! {
        <div class="map-card" class:map-card--active=move || active.get() data-map=name>
            <h4>{display_name}</h4>
            <p>{description}</p>
            <button
                class="map-card-button"
                data-url=url.clone()
                on:click=move |_| on_view.run(url.clone())
            >
                {action_label}
            </button>
        </div>
    }
}
