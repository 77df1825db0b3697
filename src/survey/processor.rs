//! The survey record processor: batch entry points, build gating, and fan-out.

use std::sync::{Arc, Mutex, RwLock};

use chrono::Local;
use log::{debug, error, trace, warn};

use crate::logutil::escape_log;
use crate::protobuf::records::{CdmaRecord, GsmRecord, LteRecord, UmtsRecord};
use crate::survey::builders::RecordFactory;
use crate::survey::listeners::{
    CellularSurveyRecordListener, ListenerRegistry, NetworkDetailsSurface,
    WifiSurveyRecordListener,
};
use crate::survey::location::LocationCache;
use crate::survey::sequence::Sequencer;
use crate::telemetry::{technology, CellObservation, CellTelemetry, WifiScanResult};

/// Default prefix for generated mission ids.
pub const MISSION_ID_PREFIX: &str = "NS ";

/// Timestamp format used in generated mission ids.
const MISSION_ID_TIME_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Consumes raw cell-info and Wi-Fi scan batches, converts them to canonical
/// protobuf records, and notifies registered listeners.
///
/// One processor instance owns one survey session: the mission id and the
/// sequencing counters live exactly as long as the processor. Cellular and
/// Wi-Fi batches are serialized independently, so at most one batch per
/// category is mid-processing at any instant while the two categories may
/// proceed concurrently.
pub struct SurveyRecordProcessor {
    device_id: String,
    mission_id: String,
    factory: RecordFactory,
    sequencer: Arc<Sequencer>,
    cellular_listeners: ListenerRegistry<dyn CellularSurveyRecordListener>,
    wifi_listeners: ListenerRegistry<dyn WifiSurveyRecordListener>,
    ui_surface: RwLock<Option<Arc<dyn NetworkDetailsSurface>>>,
    cellular_batch_lock: Mutex<()>,
    wifi_batch_lock: Mutex<()>,
}

impl SurveyRecordProcessor {
    /// Create a processor for a new survey session. The mission id is
    /// generated once, from the device id and the session start time.
    pub fn new(location: Arc<LocationCache>, device_id: impl Into<String>) -> Self {
        SurveyRecordProcessor::with_mission_prefix(location, device_id, MISSION_ID_PREFIX)
    }

    pub fn with_mission_prefix(
        location: Arc<LocationCache>,
        device_id: impl Into<String>,
        mission_id_prefix: &str,
    ) -> Self {
        let device_id = device_id.into();
        let mission_id = format!(
            "{mission_id_prefix}{device_id} {}",
            Local::now().format(MISSION_ID_TIME_FORMAT)
        );
        let sequencer = Arc::new(Sequencer::new());
        let factory = RecordFactory::new(
            device_id.clone(),
            mission_id.clone(),
            location,
            Arc::clone(&sequencer),
        );
        SurveyRecordProcessor {
            device_id,
            mission_id,
            factory,
            sequencer,
            cellular_listeners: ListenerRegistry::new(),
            wifi_listeners: ListenerRegistry::new(),
            ui_surface: RwLock::new(None),
            cellular_batch_lock: Mutex::new(()),
            wifi_batch_lock: Mutex::new(()),
        }
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn mission_id(&self) -> &str {
        &self.mission_id
    }

    pub fn register_cellular_listener(&self, listener: Arc<dyn CellularSurveyRecordListener>) {
        self.cellular_listeners.register(listener);
    }

    pub fn unregister_cellular_listener(&self, listener: &Arc<dyn CellularSurveyRecordListener>) {
        self.cellular_listeners.unregister(listener);
    }

    pub fn register_wifi_listener(&self, listener: Arc<dyn WifiSurveyRecordListener>) {
        self.wifi_listeners.register(listener);
    }

    pub fn unregister_wifi_listener(&self, listener: &Arc<dyn WifiSurveyRecordListener>) {
        self.wifi_listeners.unregister(listener);
    }

    /// A UI surface became visible and wants serving-cell updates.
    pub fn on_ui_visible(&self, surface: Arc<dyn NetworkDetailsSurface>) {
        *super::write_lock(&self.ui_surface) = Some(surface);
    }

    /// The UI surface is gone; stop sending it updates.
    pub fn on_ui_hidden(&self) {
        *super::write_lock(&self.ui_surface) = None;
    }

    /// True if a UI surface or any listener still needs this processor.
    /// Callers use this to stop polling hardware nothing reads.
    pub fn is_being_used(&self) -> bool {
        self.ui_visible() || !self.cellular_listeners.is_empty() || !self.wifi_listeners.is_empty()
    }

    /// True if any Wi-Fi survey record listener is registered.
    pub fn is_wifi_being_used(&self) -> bool {
        !self.wifi_listeners.is_empty()
    }

    /// Process one cellular poll pass. Batches are serialized and handled in
    /// submission order; the scan-group counter advances exactly once per
    /// call, even for an empty batch.
    pub fn on_cell_info_update(&self, batch: &[CellObservation], current_technology: &str) {
        let _serialized = super::lock(&self.cellular_batch_lock);

        if log::log_enabled!(log::Level::Trace) {
            trace!("current_technology={}", escape_log(current_technology));
            for observation in batch {
                trace!("cell observation: {observation:?}");
            }
        }

        self.update_current_technology_ui(current_technology);

        self.sequencer.advance_group();

        if batch.is_empty() {
            self.update_lte_ui(None);
            return;
        }

        for observation in batch {
            self.process_cell_observation(observation);
        }
    }

    /// Process one Wi-Fi scan pass. Records that fail validation are dropped;
    /// if nothing survives, no batch notification is dispatched at all.
    pub fn on_wifi_scan_update(&self, scan_results: &[WifiScanResult]) {
        let _serialized = super::lock(&self.wifi_batch_lock);

        if log::log_enabled!(log::Level::Trace) {
            for scan_result in scan_results {
                trace!(
                    "scan result: bssid={} ssid={} level={} capabilities={}",
                    scan_result.bssid,
                    escape_log(&scan_result.ssid),
                    scan_result.signal_level,
                    escape_log(&scan_result.capabilities)
                );
            }
        }

        let wrapped: Vec<_> = scan_results
            .iter()
            .filter_map(|scan_result| self.factory.wifi_beacon_record(scan_result))
            .collect();

        if wrapped.is_empty() {
            debug!("No Wi-Fi beacon records were built from the scan pass; skipping dispatch");
            return;
        }

        for listener in self.wifi_listeners.snapshot().iter() {
            if let Err(e) = listener.on_wifi_beacon_records(&wrapped) {
                error!("Unable to notify a Wi-Fi survey record listener: {e:#}");
            }
        }
    }

    fn ui_visible(&self) -> bool {
        super::read_lock(&self.ui_surface).is_some()
    }

    fn process_cell_observation(&self, observation: &CellObservation) {
        let serving = observation.serving;
        let is_lte = matches!(observation.telemetry, CellTelemetry::Lte(_));

        // Only take the time to build a record when something will consume it:
        // a registered listener, or the UI surface watching the LTE serving cell.
        if self.cellular_listeners.is_empty() && !(serving && is_lte && self.ui_visible()) {
            return;
        }

        match &observation.telemetry {
            CellTelemetry::Lte(raw) => match self.factory.lte_record(serving, raw) {
                Some(record) => {
                    if serving {
                        self.update_lte_ui(Some(&record));
                    }
                    self.notify_lte_listeners(&record);
                }
                None => {
                    warn!("Could not build an LTE survey record from the cell observation");
                    if serving {
                        self.update_lte_ui(None);
                    }
                }
            },
            CellTelemetry::Gsm(raw) => {
                if let Some(record) = self.factory.gsm_record(serving, raw) {
                    self.notify_gsm_listeners(&record);
                }
            }
            CellTelemetry::Cdma(raw) => {
                if let Some(record) = self.factory.cdma_record(serving, raw) {
                    self.notify_cdma_listeners(&record);
                }
            }
            CellTelemetry::Umts(raw) => {
                if let Some(record) = self.factory.umts_record(serving, raw) {
                    self.notify_umts_listeners(&record);
                }
            }
            CellTelemetry::Unknown => {
                debug!("Skipping a cell observation with an unknown technology");
            }
        }
    }

    fn notify_gsm_listeners(&self, record: &GsmRecord) {
        for listener in self.cellular_listeners.snapshot().iter() {
            if let Err(e) = listener.on_gsm_record(record) {
                error!("Unable to notify a cellular survey record listener: {e:#}");
            }
        }
    }

    fn notify_cdma_listeners(&self, record: &CdmaRecord) {
        for listener in self.cellular_listeners.snapshot().iter() {
            if let Err(e) = listener.on_cdma_record(record) {
                error!("Unable to notify a cellular survey record listener: {e:#}");
            }
        }
    }

    fn notify_umts_listeners(&self, record: &UmtsRecord) {
        for listener in self.cellular_listeners.snapshot().iter() {
            if let Err(e) = listener.on_umts_record(record) {
                error!("Unable to notify a cellular survey record listener: {e:#}");
            }
        }
    }

    fn notify_lte_listeners(&self, record: &LteRecord) {
        for listener in self.cellular_listeners.snapshot().iter() {
            if let Err(e) = listener.on_lte_record(record) {
                error!("Unable to notify a cellular survey record listener: {e:#}");
            }
        }
    }

    /// Push the current technology label to the UI surface. When the active
    /// technology is not LTE, the serving-cell panel is cleared so it never
    /// shows data from a previous technology.
    fn update_current_technology_ui(&self, current_technology: &str) {
        let surface = super::read_lock(&self.ui_surface).clone();
        let Some(surface) = surface else {
            trace!("Skipping the current technology UI update because no surface is visible");
            return;
        };

        if current_technology != technology::LTE && current_technology != technology::LTE_CA {
            surface.on_lte_serving_cell(None);
        }
        surface.on_current_technology(current_technology);
    }

    fn update_lte_ui(&self, record: Option<&LteRecord>) {
        let surface = super::read_lock(&self.ui_surface).clone();
        let Some(surface) = surface else {
            trace!("Skipping the serving cell UI update because no surface is visible");
            return;
        };
        surface.on_lte_serving_cell(record);
    }
}
