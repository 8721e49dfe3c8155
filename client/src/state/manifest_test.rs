use super::*;

fn entry(name: &str) -> MapEntry {
    MapEntry { name: name.to_owned(), url: format!("/maps/{name}.html"), filename: Some(format!("{name}.html")) }
}

// =============================================================
// format_map_name
// =============================================================

#[test]
fn format_map_name_title_cases_words() {
    assert_eq!(format_map_name("hermits_peak_interactive_map"), "Hermits Peak Interactive Map");
    assert_eq!(format_map_name("01_overview"), "01 Overview");
}

#[test]
fn format_map_name_keeps_inner_capitals() {
    assert_eq!(format_map_name("landfire_FBFM40_layer"), "Landfire FBFM40 Layer");
}

#[test]
fn format_map_name_treats_punctuation_as_word_break() {
    assert_eq!(format_map_name("pre-fire_ndvi"), "Pre-Fire Ndvi");
    assert_eq!(format_map_name(""), "");
}

// =============================================================
// DescriptionTable
// =============================================================

#[test]
fn default_table_knows_pipeline_maps() {
    let table = DescriptionTable::default();
    assert_eq!(table.describe("hermits_peak_interactive_map"), "Full interactive map with all layers and controls");
    assert_eq!(
        table.describe("hermits_peak_comparison_map"),
        "Side-by-side comparison of LANDFIRE baseline vs Enhanced fuel map"
    );
}

#[test]
fn unknown_names_fall_back() {
    let table = DescriptionTable::default();
    assert_eq!(table.describe("burn_severity_map"), FALLBACK_DESCRIPTION);
}

#[test]
fn custom_table_overrides_entries_and_fallback() {
    let table = DescriptionTable::new([("burn_severity_map", "dNBR severity classes")], "Generic");
    assert_eq!(table.describe("burn_severity_map"), "dNBR severity classes");
    assert_eq!(table.describe("hermits_peak_interactive_map"), "Generic");
}

#[test]
fn empty_table_always_falls_back() {
    let table = DescriptionTable::new(Vec::<(String, String)>::new(), "n/a");
    assert_eq!(table.describe("anything"), "n/a");
}

// =============================================================
// MapDescriptor
// =============================================================

#[test]
fn descriptor_from_entry_derives_display_fields() {
    let d = MapDescriptor::from_entry(&entry("hermits_peak_comparison_map"), &DescriptionTable::default());
    assert_eq!(d.name, "hermits_peak_comparison_map");
    assert_eq!(d.url, "/maps/hermits_peak_comparison_map.html");
    assert_eq!(d.display_name, "Hermits Peak Comparison Map");
    assert_eq!(d.description, "Side-by-side comparison of LANDFIRE baseline vs Enhanced fuel map");
}

#[test]
fn descriptor_construction_is_idempotent() {
    let table = DescriptionTable::default();
    let e = entry("burn_severity");
    assert_eq!(MapDescriptor::from_entry(&e, &table), MapDescriptor::from_entry(&e, &table));
}

// =============================================================
// ManifestState
// =============================================================

#[test]
fn default_state_shows_loading_placeholder() {
    let state = ManifestState::default();
    assert_eq!(state.view(), ListView::Placeholder(LOADING_MAPS_TEXT));
    assert!(state.descriptors().is_empty());
}

#[test]
fn empty_remote_listing_shows_single_placeholder() {
    let mut state = ManifestState::default();
    let epoch = state.begin_load();
    assert!(state.finish_load(epoch, Ok(Vec::new()), &DescriptionTable::default()));
    assert_eq!(state.view(), ListView::Placeholder(NO_REMOTE_MAPS_TEXT));
}

#[test]
fn failed_listing_shows_error_placeholder() {
    let mut state = ManifestState::default();
    let epoch = state.begin_load();
    assert!(state.finish_load(epoch, Err(FetchError::Network("offline".into())), &DescriptionTable::default()));
    assert_eq!(state.view(), ListView::Placeholder(MAPS_ERROR_TEXT));
    assert_eq!(state.list, MapListState::Failed);
}

#[test]
fn undecodable_listing_shows_same_error_placeholder() {
    let table = DescriptionTable::default();
    let mut state = ManifestState::default();
    let epoch = state.begin_load();
    assert!(state.finish_load(epoch, Err(FetchError::Parse("expected array".into())), &table));
    assert_eq!(state.view(), ListView::Placeholder(MAPS_ERROR_TEXT));

    let epoch = state.begin_load();
    assert!(state.finish_load(epoch, Err(FetchError::Status(500)), &table));
    assert_eq!(state.view(), ListView::Placeholder(MAPS_ERROR_TEXT));
}

#[test]
fn listing_of_n_maps_yields_n_cards_keyed_by_url() {
    let mut state = ManifestState::default();
    let epoch = state.begin_load();
    let entries = vec![entry("a_map"), entry("b_map"), entry("c_map")];
    state.finish_load(epoch, Ok(entries.clone()), &DescriptionTable::default());

    let ListView::Cards(cards) = state.view() else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), entries.len());
    for (card, source) in cards.iter().zip(&entries) {
        assert_eq!(card.url, source.url);
    }
    let urls: std::collections::HashSet<_> = cards.iter().map(|c| c.url.as_str()).collect();
    assert_eq!(urls.len(), 3);
}

#[test]
fn reload_replaces_previous_card_set() {
    let table = DescriptionTable::default();
    let mut state = ManifestState::default();
    let first = state.begin_load();
    state.finish_load(first, Ok(vec![entry("a"), entry("b")]), &table);

    let second = state.begin_load();
    assert_eq!(state.view(), ListView::Placeholder(LOADING_MAPS_TEXT));
    state.finish_load(second, Ok(vec![entry("c")]), &table);
    assert_eq!(state.descriptors().len(), 1);
    assert_eq!(state.descriptors()[0].name, "c");
}

#[test]
fn stale_listing_is_discarded() {
    let table = DescriptionTable::default();
    let mut state = ManifestState::default();
    let stale = state.begin_load();
    let fresh = state.begin_load();

    assert!(state.finish_load(fresh, Ok(vec![entry("fresh")]), &table));
    assert!(!state.finish_load(stale, Ok(vec![entry("stale_a"), entry("stale_b")]), &table));
    assert_eq!(state.descriptors().len(), 1);
    assert_eq!(state.descriptors()[0].name, "fresh");
}

#[test]
fn static_manifest_lists_five_slides_in_order() {
    let state = ManifestState::from_static(STATIC_SLIDES);
    assert_eq!(state.source, ManifestSource::Static);
    let names: Vec<_> = state.descriptors().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["01_overview", "02_change_detection", "03_prediction", "04_validation", "05_summary"]);
    assert_eq!(state.descriptors()[3].display_name, "Validation Results");
}

#[test]
fn empty_static_manifest_uses_static_wording() {
    let state = ManifestState::from_static(&[]);
    assert_eq!(state.view(), ListView::Placeholder(NO_STATIC_MAPS_TEXT));
}

#[test]
fn count_text_tracks_loaded_cards() {
    let table = DescriptionTable::default();
    let mut state = ManifestState::default();
    assert_eq!(state.count_text(), "");

    let epoch = state.begin_load();
    state.finish_load(epoch, Ok(vec![entry("a")]), &table);
    assert_eq!(state.count_text(), "1 map");

    let epoch = state.begin_load();
    state.finish_load(epoch, Ok(vec![entry("a"), entry("b"), entry("c")]), &table);
    assert_eq!(state.count_text(), "3 maps");

    let epoch = state.begin_load();
    state.finish_load(epoch, Err(FetchError::Status(503)), &table);
    assert_eq!(state.count_text(), "");
}
