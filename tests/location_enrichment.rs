//! Location enrichment through the full pipeline.

mod common;

use std::sync::Arc;

use common::{good_fix, lte_observation, RecordingCellularListener};
use netsurvey::survey::{LocationCache, SurveyRecordProcessor};
use netsurvey::telemetry::{technology, LocationFix};

#[test]
fn records_carry_the_fix_only_while_one_is_cached() {
    let location = Arc::new(LocationCache::with_defaults());
    let processor = SurveyRecordProcessor::new(Arc::clone(&location), "device-1");
    let listener = Arc::new(RecordingCellularListener::default());
    processor.register_cellular_listener(listener.clone());

    // No fix yet: no positional fields at all.
    processor.on_cell_info_update(&[lte_observation(true, 101)], technology::LTE);

    location.on_location_changed(good_fix());
    processor.on_cell_info_update(&[lte_observation(true, 101)], technology::LTE);

    // An inaccurate fix clears the cache; subsequent records lose the location.
    location.on_location_changed(LocationFix {
        accuracy: 500.0,
        ..good_fix()
    });
    processor.on_cell_info_update(&[lte_observation(true, 101)], technology::LTE);

    let records = listener.lte_records();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].latitude, None);
    assert_eq!(records[0].longitude, None);
    assert_eq!(records[0].altitude, None);

    assert_eq!(records[1].latitude, Some(35.2271));
    assert_eq!(records[1].longitude, Some(-80.8431));
    assert_eq!(records[1].altitude, Some(228.0));

    assert_eq!(records[2].latitude, None);
    assert_eq!(records[2].longitude, None);
    assert_eq!(records[2].altitude, None);

    // All-or-nothing: every record is either fully positioned or not at all.
    for record in &records {
        assert_eq!(record.latitude.is_some(), record.longitude.is_some());
        assert_eq!(record.latitude.is_some(), record.altitude.is_some());
    }
}
