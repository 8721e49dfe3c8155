//! Live dashboard: statistics and generated maps from the JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page fires three independent requests (statistics, map
//! listing, health probe). They race freely; each writes only its own
//! region. Selecting a map embeds it directly in the viewer frame.

use leptos::prelude::*;

use crate::components::map_list::MapList;
use crate::components::map_viewer::MapViewer;
use crate::components::stats_panels::{ComparisonStats, DataStats, FireContext, HeaderStats};
use crate::components::tab_bar::{TabBar, TabPanel};
use crate::state::manifest::{DescriptionTable, ManifestState};
use crate::state::stats::StatsState;
use crate::state::tabs::{LiveTab, TabState};
use crate::state::viewer::ViewerState;

#[component]
pub fn LiveDashboardPage() -> impl IntoView {
    let tabs = RwSignal::new(TabState::<LiveTab>::default());
    let manifest = RwSignal::new(ManifestState::default());
    let stats = RwSignal::new(StatsState::default());
    let viewer = RwSignal::new(ViewerState::default());
    let descriptions = StoredValue::new(DescriptionTable::default());

    load_statistics(stats);
    load_manifest(manifest, descriptions);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async {
        crate::net::api::check_health().await;
    });

    let on_view = Callback::new(move |url: String| viewer.update(|v| v.embed(&url)));
    let on_refresh = move |_| load_manifest(manifest, descriptions);

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>"Wildfire Fuel Mapping"</h1>
                <p class="dashboard__subtitle">
                    "Satellite-enhanced fuel hazard for the Hermits Peak-Calf Canyon Fire"
                </p>
                <HeaderStats stats=stats/>
                <a class="dashboard__switch" href="/gallery">"Presentation view"</a>
            </header>

            <TabBar tabs=tabs/>

            <TabPanel tabs=tabs tab=LiveTab::Overview>
                <h2>"Overview"</h2>
                <p>
                    "LANDFIRE fuel models are refreshed every few years, while vegetation stress "
                    "changes every season. The enhanced map adjusts baseline fuel hazard with "
                    "satellite change detection and is validated against observed burn severity."
                </p>
                <FireContext stats=stats/>
            </TabPanel>

            <TabPanel tabs=tabs tab=LiveTab::Maps>
                <div class="maps-toolbar">
                    <h2>"Interactive Maps"</h2>
                    <span class="maps-toolbar__count">{move || manifest.with(ManifestState::count_text)}</span>
                    <button class="btn maps-toolbar__refresh" on:click=on_refresh>"Refresh"</button>
                </div>
                <MapList manifest=manifest viewer=viewer on_view=on_view/>
                <MapViewer viewer=viewer/>
            </TabPanel>

            <TabPanel tabs=tabs tab=LiveTab::Comparison>
                <h2>"Baseline vs Enhanced"</h2>
                <ComparisonStats stats=stats/>
            </TabPanel>

            <TabPanel tabs=tabs tab=LiveTab::Data>
                <h2>"Data & Methods"</h2>
                <DataStats stats=stats/>
            </TabPanel>
        </div>
    }
}

/// Fetch `/api/stats` once and rebuild every statistics region from it.
fn load_statistics(stats: RwSignal<StatsState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_stats().await {
            Ok(snapshot) => stats.update(|s| s.apply(&snapshot)),
            Err(e) => {
                leptos::logging::error!("error loading statistics: {e}");
                stats.update(|s| s.fail(e.to_string()));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = stats;
    }
}

/// (Re)load the map listing. Only the newest load may write the list.
fn load_manifest(manifest: RwSignal<ManifestState>, descriptions: StoredValue<DescriptionTable>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(epoch) = manifest.try_update(ManifestState::begin_load) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_maps().await;
            descriptions.with_value(|table| {
                manifest.update(|m| {
                    if !m.finish_load(epoch, result, table) {
                        leptos::logging::log!("discarding stale map listing (epoch {epoch})");
                    }
                });
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (manifest, descriptions);
    }
}
