//! Tab buttons and the panels they switch between.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both pages own a `RwSignal<TabState<T>>`; buttons write the selection and
//! panels derive their visibility from it, so exactly one of each is active.

use leptos::prelude::*;

use crate::state::tabs::{TabId, TabState};

/// Row of tab buttons, one per `T::ALL` entry.
#[component]
pub fn TabBar<T>(tabs: RwSignal<TabState<T>>) -> impl IntoView
where
    T: TabId,
{
    view! {
        <nav class="tab-bar" role="tablist">
            {T::ALL
                .iter()
                .copied()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-button"
                            class:active=move || tabs.with(|s| s.is_active(tab))
                            role="tab"
                            aria-selected=move || if tabs.with(|s| s.is_active(tab)) { "true" } else { "false" }
                            aria-controls=tab.panel_id()
                            data-tab=tab.key()
                            on:click=move |_| tabs.update(|s| s.select(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Content panel shown only while `tab` is active.
#[component]
pub fn TabPanel<T>(tabs: RwSignal<TabState<T>>, tab: T, children: Children) -> impl IntoView
where
    T: TabId,
{
    view! {
        <section
            id=tab.panel_id()
            class="tab-content"
            class:active=move || tabs.with(|s| s.is_active(tab))
            role="tabpanel"
            hidden=move || !tabs.with(|s| s.is_active(tab))
        >
            {children()}
        </section>
    }
}
