//! The viewer region: placeholder, embedded frame, or extracted slide.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `ViewerState` and re-renders the whole region whenever its content
//! changes. Scrolling is driven by `ViewerState::scroll_seq` through a memo,
//! so it happens once per completed load, after the new content is in the DOM.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::state::viewer::{EMBED_HEIGHT_PX, FAILED_TEXT, IDLE_TEXT, LOADING_TEXT, LoadPhase, VIEWER_REGION_ID, ViewerContent, ViewerState};
use crate::util::fragment::MapFragments;

#[component]
pub fn MapViewer(viewer: RwSignal<ViewerState>) -> impl IntoView {
    // Memoized so content changes that leave the sequence alone don't scroll.
    let scroll_seq = Memo::new(move |_| viewer.with(|v| v.scroll_seq));
    Effect::new(move || {
        if scroll_seq.get() > 0 {
            crate::util::scroll::scroll_into_view(VIEWER_REGION_ID);
        }
    });
    let busy = move || if viewer.with(|v| v.phase() == LoadPhase::Loading) { "true" } else { "false" };

    view! {
        <div id=VIEWER_REGION_ID class="map-viewer" aria-live="polite" aria-busy=busy>
            {move || content_view(viewer.with(|v| v.content().clone()))}
        </div>
    }
}

fn content_view(content: ViewerContent) -> AnyView {
    match content {
        ViewerContent::Idle => placeholder(IDLE_TEXT),
        ViewerContent::Loading => placeholder(LOADING_TEXT),
        ViewerContent::Failed => placeholder(FAILED_TEXT),
        ViewerContent::Embed { url } => view! {
            <iframe
                src=url
                title="Map viewer"
                style=format!("width: 100%; height: {EMBED_HEIGHT_PX}px; border: none;")
            ></iframe>
        }
        .into_any(),
        ViewerContent::Fragments(fragments) => fragments_view(fragments),
    }
}

fn placeholder(text: &'static str) -> AnyView {
    view! { <div class="loading">{text}</div> }.into_any()
}

/// Wrapper per extracted piece; absent pieces emit no node at all.
fn fragments_view(fragments: MapFragments) -> AnyView {
    let MapFragments { title_html, image, description_html } = fragments;
    view! {
        {title_html.map(|html| view! { <div class="map-viewer-title" inner_html=html></div> })}
        {image.map(|img| {
            view! {
                <div class="map-viewer-image">
                    <img src=img.src alt=img.alt/>
                </div>
            }
        })}
        {description_html.map(|html| view! { <div class="map-viewer-description" inner_html=html></div> })}
    }
    .into_any()
}
