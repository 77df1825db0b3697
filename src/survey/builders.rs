//! Per-technology record builders.
//!
//! Each builder extracts the raw fields, runs the matching validator, and only
//! then claims a record number and assembles the canonical record. Optional
//! technology fields are set only when they differ from the platform's unset
//! sentinel for that specific field; the sentinel conventions are inconsistent
//! across fields and are preserved here exactly as the platform documents
//! them.

use std::sync::Arc;

use chrono::Utc;

use crate::protobuf::records::{
    CdmaRecord, EncryptionType, GsmRecord, LteRecord, UmtsRecord, WifiBeaconRecord,
};
use crate::survey::calculations::{channel_from_frequency, lte_bandwidth_from_khz};
use crate::survey::location::LocationCache;
use crate::survey::sequence::Sequencer;
use crate::survey::validators;
use crate::survey::wifi;
use crate::survey::WifiRecordWrapper;
use crate::telemetry::{
    CdmaCellTelemetry, GsmCellTelemetry, LteCellTelemetry, UmtsCellTelemetry, WifiScanResult,
    UNSET,
};

/// Builds canonical records from raw telemetry, stamping them with device
/// identity, mission id, sequencing metadata, and the latest location fix.
pub struct RecordFactory {
    device_id: String,
    mission_id: String,
    location: Arc<LocationCache>,
    sequencer: Arc<Sequencer>,
}

/// `Some(value)` unless the value equals the common [`UNSET`] sentinel.
fn unless_unset(value: i32) -> Option<i32> {
    (value != UNSET).then_some(value)
}

/// `Some(value)` unless the value equals [`UNSET`] or the field's additional
/// sentinel (`-1` or `0`, depending on the field).
fn unless_unset_or(value: i32, also_unset: i32) -> Option<i32> {
    (value != UNSET && value != also_unset).then_some(value)
}

fn now_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

impl RecordFactory {
    pub fn new(
        device_id: impl Into<String>,
        mission_id: impl Into<String>,
        location: Arc<LocationCache>,
        sequencer: Arc<Sequencer>,
    ) -> Self {
        RecordFactory {
            device_id: device_id.into(),
            mission_id: mission_id.into(),
            location,
            sequencer,
        }
    }

    /// Latitude, longitude, and altitude from the latest fix; `None` when no
    /// acceptable fix is cached. Always applied all-or-nothing from one fix.
    fn location_fields(&self) -> Option<(f64, f64, f32)> {
        self.location
            .latest()
            .map(|fix| (fix.latitude, fix.longitude, fix.altitude as f32))
    }

    pub fn gsm_record(&self, serving: bool, raw: &GsmCellTelemetry) -> Option<GsmRecord> {
        if !validators::validate_gsm(raw) {
            return None;
        }

        let mut record = GsmRecord {
            device_serial_number: self.device_id.clone(),
            device_time: now_millis(),
            mission_id: self.mission_id.clone(),
            record_number: self.sequencer.next_record_number(),
            group_number: self.sequencer.current_group(),
            serving_cell: Some(serving),
            ..GsmRecord::default()
        };
        if let Some(provider) = &raw.provider {
            record.provider = provider.clone();
        }
        if let Some((latitude, longitude, altitude)) = self.location_fields() {
            record.latitude = Some(latitude);
            record.longitude = Some(longitude);
            record.altitude = Some(altitude);
        }

        // Although the platform documents i32::MAX as the unset value, -1 shows
        // up in practice for TA and CID, and 0 for MCC, MNC, and LAC.
        record.mcc = unless_unset_or(raw.mcc, 0);
        record.mnc = unless_unset_or(raw.mnc, 0);
        record.lac = unless_unset_or(raw.lac, 0);
        record.ci = unless_unset_or(raw.cid, -1);
        record.arfcn = Some(raw.arfcn);
        record.bsic = Some(raw.bsic);
        record.signal_strength = Some(raw.signal_strength as f32);
        record.ta = unless_unset_or(raw.timing_advance, -1);

        Some(record)
    }

    pub fn cdma_record(&self, serving: bool, raw: &CdmaCellTelemetry) -> Option<CdmaRecord> {
        if !validators::validate_cdma(raw) {
            return None;
        }

        let mut record = CdmaRecord {
            device_serial_number: self.device_id.clone(),
            device_time: now_millis(),
            mission_id: self.mission_id.clone(),
            record_number: self.sequencer.next_record_number(),
            group_number: self.sequencer.current_group(),
            serving_cell: Some(serving),
            ..CdmaRecord::default()
        };
        if let Some(provider) = &raw.provider {
            record.provider = provider.clone();
        }
        if let Some((latitude, longitude, altitude)) = self.location_fields() {
            record.latitude = Some(latitude);
            record.longitude = Some(longitude);
            record.altitude = Some(altitude);
        }

        record.sid = unless_unset(raw.sid);
        record.nid = unless_unset(raw.nid);
        record.bsid = unless_unset(raw.bsid);
        record.signal_strength = Some(raw.signal_strength as f32);
        // The platform reports Ec/Io in dB*10, so convert to the actual value.
        record.ecio = Some(raw.ecio as f32 / 10.0);

        Some(record)
    }

    pub fn umts_record(&self, serving: bool, raw: &UmtsCellTelemetry) -> Option<UmtsRecord> {
        if !validators::validate_umts(raw) {
            return None;
        }

        let mut record = UmtsRecord {
            device_serial_number: self.device_id.clone(),
            device_time: now_millis(),
            mission_id: self.mission_id.clone(),
            record_number: self.sequencer.next_record_number(),
            group_number: self.sequencer.current_group(),
            serving_cell: Some(serving),
            ..UmtsRecord::default()
        };
        if let Some(provider) = &raw.provider {
            record.provider = provider.clone();
        }
        if let Some((latitude, longitude, altitude)) = self.location_fields() {
            record.latitude = Some(latitude);
            record.longitude = Some(longitude);
            record.altitude = Some(altitude);
        }

        record.mcc = unless_unset(raw.mcc);
        record.mnc = unless_unset(raw.mnc);
        record.lac = unless_unset(raw.lac);
        record.ci = unless_unset(raw.cid);
        record.uarfcn = Some(raw.uarfcn);
        record.psc = Some(raw.psc);
        record.signal_strength = Some(raw.signal_strength as f32);

        Some(record)
    }

    pub fn lte_record(&self, serving: bool, raw: &LteCellTelemetry) -> Option<LteRecord> {
        if !validators::validate_lte(raw) {
            return None;
        }

        let mut record = LteRecord {
            device_serial_number: self.device_id.clone(),
            device_time: now_millis(),
            mission_id: self.mission_id.clone(),
            record_number: self.sequencer.next_record_number(),
            group_number: self.sequencer.current_group(),
            serving_cell: Some(serving),
            ..LteRecord::default()
        };
        if let Some(provider) = &raw.provider {
            record.provider = provider.clone();
        }
        if let Some((latitude, longitude, altitude)) = self.location_fields() {
            record.latitude = Some(latitude);
            record.longitude = Some(longitude);
            record.altitude = Some(altitude);
        }

        record.mcc = unless_unset(raw.mcc);
        record.mnc = unless_unset(raw.mnc);
        record.tac = unless_unset(raw.tac);
        record.ci = unless_unset(raw.ci);
        record.earfcn = Some(raw.earfcn);
        record.pci = Some(raw.pci);
        record.rsrp = Some(raw.rsrp as f32);
        record.rsrq = unless_unset(raw.rsrq).map(|rsrq| rsrq as f32);
        record.ta = unless_unset(raw.timing_advance);

        if raw.bandwidth_khz != UNSET {
            if let Some(bandwidth) = lte_bandwidth_from_khz(raw.bandwidth_khz) {
                record.lte_bandwidth = bandwidth as i32;
            }
        }

        Some(record)
    }

    pub fn wifi_beacon_record(&self, scan: &WifiScanResult) -> Option<WifiRecordWrapper> {
        if !validators::validate_wifi_beacon(scan) {
            return None;
        }

        let mut record = WifiBeaconRecord {
            device_serial_number: self.device_id.clone(),
            device_time: now_millis(),
            mission_id: self.mission_id.clone(),
            record_number: self.sequencer.next_record_number(),
            ..WifiBeaconRecord::default()
        };
        if let Some((latitude, longitude, altitude)) = self.location_fields() {
            record.latitude = Some(latitude);
            record.longitude = Some(longitude);
            record.altitude = Some(altitude);
        }

        record.bssid = scan.bssid.clone();
        record.ssid = scan.ssid.clone();
        record.signal_strength = Some(scan.signal_level as f32);

        let channel = channel_from_frequency(scan.frequency);
        if channel != -1 {
            record.channel = Some(channel as i32);
        }
        if scan.frequency != -1 && scan.frequency != 0 {
            record.frequency = Some(scan.frequency);
        }

        if !scan.capabilities.is_empty() {
            let encryption = wifi::encryption_type(&scan.capabilities);
            if encryption != EncryptionType::EncUnknown {
                record.encryption_type = encryption as i32;
            }
            record.wps = Some(wifi::supports_wps(&scan.capabilities));
        }

        Some(WifiRecordWrapper {
            record,
            capabilities: scan.capabilities.clone(),
        })
    }
}
