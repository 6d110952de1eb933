//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Freight Calculator".into());

    // Estimate summary
    t.insert("estimate.route".into(), "Route".into());
    t.insert("estimate.distance".into(), "Distance".into());
    t.insert("estimate.axles".into(), "Axles".into());
    t.insert("estimate.trip_type".into(), "Trip type".into());
    t.insert("estimate.amount".into(), "Estimated freight".into());
    t.insert("estimate.saved".into(), "Saved to history".into());
    t.insert("estimate.not_saved".into(), "Not saved (--no-save)".into());
    t.insert("estimate.one_way".into(), "One way".into());
    t.insert("estimate.round_trip".into(), "Round trip".into());

    // History
    t.insert("history.title".into(), "Calculation history".into());
    t.insert("history.empty".into(), "No calculations recorded yet".into());
    t.insert("history.date".into(), "Date".into());
    t.insert("history.origin".into(), "Origin".into());
    t.insert("history.destination".into(), "Destination".into());
    t.insert("history.cleared".into(), "History cleared".into());
    t.insert("history.clear_confirm".into(), "Use --yes to confirm clearing the history".into());

    // Statistics
    t.insert("stats.title".into(), "Statistics".into());
    t.insert("stats.no_data".into(), "No data to summarize".into());
    t.insert("stats.window".into(), "Records considered".into());
    t.insert("stats.mean".into(), "Average".into());
    t.insert("stats.min".into(), "Minimum".into());
    t.insert("stats.max".into(), "Maximum".into());

    // Export
    t.insert("export.done".into(), "History exported to".into());

    // Errors
    t.insert("error.validation".into(), "Invalid input".into());
    t.insert("error.place_not_found".into(), "Place not found".into());
    t.insert("error.geocoding".into(), "Could not look up the place".into());
    t.insert("error.storage".into(), "Could not save the history".into());
    t.insert("error.export".into(), "Export failed".into());

    t
}
