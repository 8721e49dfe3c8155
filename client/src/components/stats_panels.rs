//! Statistics regions of the live dashboard.
//!
//! Each component reads the shared `StatsState`; the formatted strings are
//! computed once per snapshot in `StatsView`.

use leptos::prelude::*;

use crate::state::stats::StatsState;

/// Three headline figures in the page header.
#[component]
pub fn HeaderStats(stats: RwSignal<StatsState>) -> impl IntoView {
    view! {
        <div id="headerStats" class="header-stats" class:header-stats--pending=move || !stats.with(|s| s.loaded)>
            {move || {
                stats.with(|s| {
                    s.view
                        .header
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat-card">
                                    <div class="stat-value">{stat.value.clone()}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}

/// Baseline vs enhanced correlation side by side.
#[component]
pub fn ComparisonStats(stats: RwSignal<StatsState>) -> impl IntoView {
    view! {
        <div class="comparison-grid">
            <div class="comparison-card comparison-card--baseline">
                <h3>"LANDFIRE Baseline"</h3>
                <div class="comparison-value" id="baselineCorr">
                    {move || stats.with(|s| s.view.comparison.baseline_correlation.clone())}
                </div>
                <div class="comparison-label">"Correlation with burn severity"</div>
            </div>
            <div class="comparison-card comparison-card--enhanced">
                <h3>"Enhanced Fuel Map"</h3>
                <div class="comparison-value" id="enhancedCorr">
                    {move || stats.with(|s| s.view.comparison.enhanced_correlation.clone())}
                </div>
                <div class="comparison-label">"Correlation with burn severity"</div>
            </div>
            <div class="comparison-card comparison-card--improvement">
                <h3>"Improvement"</h3>
                <div class="comparison-value" id="improvementValue">
                    {move || stats.with(|s| s.view.comparison.improvement.clone())}
                </div>
                <div class="comparison-label">"Relative gain over baseline"</div>
            </div>
        </div>
    }
}

/// Raw validation numbers.
#[component]
pub fn DataStats(stats: RwSignal<StatsState>) -> impl IntoView {
    let row = move |label: &'static str, id: &'static str, pick: fn(&StatsState) -> String| {
        view! {
            <tr>
                <th scope="row">{label}</th>
                <td id=id>{move || stats.with(pick)}</td>
            </tr>
        }
    };

    view! {
        <table class="data-table">
            <tbody>
                {row("Sample Size", "sampleSize", |s| s.view.data.sample_size.clone())}
                {row("Baseline Correlation", "baselineCorr2", |s| s.view.data.baseline_correlation.clone())}
                {row("Enhanced Correlation", "enhancedCorr2", |s| s.view.data.enhanced_correlation.clone())}
                {row("Relative Improvement", "improvement", |s| s.view.data.improvement.clone())}
                {row("Detection Rate", "detectionRate", |s| s.view.data.detection_rate.clone())}
            </tbody>
        </table>
    }
}

/// Context about the fire the validation was run against.
#[component]
pub fn FireContext(stats: RwSignal<StatsState>) -> impl IntoView {
    view! {
        <dl class="fire-info">
            <dt>"Fire"</dt>
            <dd id="fireName">{move || stats.with(|s| s.view.fire.fire_name.clone())}</dd>
            <dt>"Year"</dt>
            <dd id="fireYear">{move || stats.with(|s| s.view.fire.fire_year.clone())}</dd>
            <dt>"Burned Area"</dt>
            <dd id="fireSize">{move || stats.with(|s| s.view.fire.fire_size.clone())}</dd>
            <dt>"Estimated Damage"</dt>
            <dd id="fireDamage">{move || stats.with(|s| s.view.fire.fire_damage.clone())}</dd>
        </dl>
        <Show when=move || stats.with(|s| s.error.is_some())>
            <p class="stats-error">"Statistics unavailable; showing placeholders."</p>
        </Show>
    }
}
