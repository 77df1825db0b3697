//! Record numbering and scan-group sequencing across batches.

mod common;

use std::sync::Arc;

use common::{lte_observation, wifi_scan_result, RecordingCellularListener, RecordingWifiListener};
use netsurvey::survey::{LocationCache, SurveyRecordProcessor};
use netsurvey::telemetry::technology;

fn processor() -> SurveyRecordProcessor {
    SurveyRecordProcessor::new(Arc::new(LocationCache::with_defaults()), "device-1")
}

#[test]
fn record_numbers_are_contiguous_within_and_across_batches() {
    let processor = processor();
    let listener = Arc::new(RecordingCellularListener::default());
    processor.register_cellular_listener(listener.clone());

    processor.on_cell_info_update(
        &[
            lte_observation(true, 101),
            lte_observation(false, 102),
            lte_observation(false, 103),
        ],
        technology::LTE,
    );
    processor.on_cell_info_update(&[lte_observation(true, 104)], technology::LTE);

    let numbers: Vec<i32> = listener
        .lte_records()
        .iter()
        .map(|record| record.record_number)
        .collect();
    assert_eq!(numbers, vec![0, 1, 2, 3]);
}

#[test]
fn group_number_is_shared_within_a_batch_and_increases_between_batches() {
    let processor = processor();
    let listener = Arc::new(RecordingCellularListener::default());
    processor.register_cellular_listener(listener.clone());

    processor.on_cell_info_update(
        &[lte_observation(true, 101), lte_observation(false, 102)],
        technology::LTE,
    );
    processor.on_cell_info_update(
        &[lte_observation(true, 101), lte_observation(false, 103)],
        technology::LTE,
    );

    let groups: Vec<i32> = listener
        .lte_records()
        .iter()
        .map(|record| record.group_number)
        .collect();
    assert_eq!(groups, vec![0, 0, 1, 1]);
}

#[test]
fn empty_cellular_batch_still_consumes_a_group_number() {
    let processor = processor();
    let listener = Arc::new(RecordingCellularListener::default());
    processor.register_cellular_listener(listener.clone());

    processor.on_cell_info_update(&[lte_observation(true, 101)], technology::LTE);
    processor.on_cell_info_update(&[], technology::LTE);
    processor.on_cell_info_update(&[lte_observation(true, 101)], technology::LTE);

    let groups: Vec<i32> = listener
        .lte_records()
        .iter()
        .map(|record| record.group_number)
        .collect();
    // The empty batch advanced the counter exactly once, so the third batch
    // carries group 2, not 1.
    assert_eq!(groups, vec![0, 2]);
}

#[test]
fn fully_rejected_batch_still_consumes_a_group_number() {
    let processor = processor();
    let listener = Arc::new(RecordingCellularListener::default());
    processor.register_cellular_listener(listener.clone());

    processor.on_cell_info_update(&[lte_observation(true, 101)], technology::LTE);
    processor.on_cell_info_update(
        &[netsurvey::telemetry::CellObservation {
            serving: false,
            telemetry: netsurvey::telemetry::CellTelemetry::Lte(
                netsurvey::telemetry::LteCellTelemetry::default(),
            ),
        }],
        technology::LTE,
    );
    processor.on_cell_info_update(&[lte_observation(true, 101)], technology::LTE);

    let groups: Vec<i32> = listener
        .lte_records()
        .iter()
        .map(|record| record.group_number)
        .collect();
    assert_eq!(groups, vec![0, 2]);
}

#[test]
fn record_numbers_are_shared_between_cellular_and_wifi() {
    let processor = processor();
    let cellular = Arc::new(RecordingCellularListener::default());
    let wifi = Arc::new(RecordingWifiListener::default());
    processor.register_cellular_listener(cellular.clone());
    processor.register_wifi_listener(wifi.clone());

    processor.on_cell_info_update(&[lte_observation(true, 101)], technology::LTE);
    processor.on_wifi_scan_update(&[wifi_scan_result(0), wifi_scan_result(1)]);

    assert_eq!(cellular.lte_records()[0].record_number, 0);
    let batches = wifi.batches.lock().unwrap();
    let wifi_numbers: Vec<i32> = batches[0].iter().map(|w| w.record.record_number).collect();
    assert_eq!(wifi_numbers, vec![1, 2]);
}
