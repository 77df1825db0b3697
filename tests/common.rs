//! Test utilities & fixtures.
//! Recording listeners capture everything the processor dispatches so tests can
//! assert on sequencing, grouping, and delivery without real consumers.

use std::sync::Mutex;

use anyhow::Result;

use netsurvey::protobuf::records::{CdmaRecord, GsmRecord, LteRecord, UmtsRecord};
use netsurvey::survey::{
    CellularSurveyRecordListener, NetworkDetailsSurface, WifiRecordWrapper,
    WifiSurveyRecordListener,
};
use netsurvey::telemetry::{
    CellObservation, CellTelemetry, GsmCellTelemetry, LocationFix, LteCellTelemetry,
    WifiScanResult,
};

/// An LTE observation that passes validation.
#[allow(dead_code)]
pub fn lte_observation(serving: bool, pci: i32) -> CellObservation {
    CellObservation {
        serving,
        telemetry: CellTelemetry::Lte(LteCellTelemetry {
            earfcn: 5_230,
            pci,
            rsrp: -98,
            ..LteCellTelemetry::default()
        }),
    }
}

/// A GSM observation that passes validation.
#[allow(dead_code)]
pub fn gsm_observation(serving: bool) -> CellObservation {
    CellObservation {
        serving,
        telemetry: CellTelemetry::Gsm(GsmCellTelemetry {
            arfcn: 42,
            bsic: 21,
            signal_strength: -85,
            ..GsmCellTelemetry::default()
        }),
    }
}

/// A Wi-Fi scan result that passes validation.
#[allow(dead_code)]
pub fn wifi_scan_result(index: u8) -> WifiScanResult {
    WifiScanResult {
        bssid: format!("00:11:22:33:44:{index:02x}"),
        ssid: format!("ap-{index}"),
        signal_level: -60,
        frequency: 2_437,
        capabilities: "[WPA2-PSK-CCMP][RSN][ESS]".to_string(),
    }
}

/// A fix the default location cache accepts.
#[allow(dead_code)]
pub fn good_fix() -> LocationFix {
    LocationFix {
        latitude: 35.2271,
        longitude: -80.8431,
        altitude: 228.0,
        accuracy: 8.0,
        provider: "gps".to_string(),
    }
}

/// Captures every cellular record delivered to it.
#[derive(Default)]
pub struct RecordingCellularListener {
    pub gsm: Mutex<Vec<GsmRecord>>,
    pub cdma: Mutex<Vec<CdmaRecord>>,
    pub umts: Mutex<Vec<UmtsRecord>>,
    pub lte: Mutex<Vec<LteRecord>>,
}

#[allow(dead_code)]
impl RecordingCellularListener {
    pub fn total(&self) -> usize {
        self.gsm.lock().unwrap().len()
            + self.cdma.lock().unwrap().len()
            + self.umts.lock().unwrap().len()
            + self.lte.lock().unwrap().len()
    }

    pub fn lte_records(&self) -> Vec<LteRecord> {
        self.lte.lock().unwrap().clone()
    }
}

impl CellularSurveyRecordListener for RecordingCellularListener {
    fn on_gsm_record(&self, record: &GsmRecord) -> Result<()> {
        self.gsm.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn on_cdma_record(&self, record: &CdmaRecord) -> Result<()> {
        self.cdma.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn on_umts_record(&self, record: &UmtsRecord) -> Result<()> {
        self.umts.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn on_lte_record(&self, record: &LteRecord) -> Result<()> {
        self.lte.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Captures every Wi-Fi batch notification.
#[derive(Default)]
pub struct RecordingWifiListener {
    pub batches: Mutex<Vec<Vec<WifiRecordWrapper>>>,
}

impl WifiSurveyRecordListener for RecordingWifiListener {
    fn on_wifi_beacon_records(&self, records: &[WifiRecordWrapper]) -> Result<()> {
        self.batches.lock().unwrap().push(records.to_vec());
        Ok(())
    }
}

/// Captures UI side-channel updates.
#[derive(Default)]
pub struct RecordingSurface {
    pub technologies: Mutex<Vec<String>>,
    pub lte_updates: Mutex<Vec<Option<LteRecord>>>,
}

impl NetworkDetailsSurface for RecordingSurface {
    fn on_current_technology(&self, technology: &str) {
        self.technologies.lock().unwrap().push(technology.to_string());
    }

    fn on_lte_serving_cell(&self, record: Option<&LteRecord>) {
        self.lte_updates.lock().unwrap().push(record.cloned());
    }
}
