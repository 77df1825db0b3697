//! The survey record processing pipeline.
//!
//! Raw platform telemetry flows in through [`SurveyRecordProcessor`], gets
//! validated ([`validators`]), converted to canonical protobuf records
//! ([`builders`]) with sequencing metadata ([`Sequencer`]) and location
//! enrichment ([`LocationCache`]), and is fanned out to registered listeners
//! ([`listeners`]) with per-item and per-listener failure isolation.

pub mod builders;
pub mod calculations;
pub mod listeners;
pub mod location;
pub mod processor;
pub mod sequence;
pub mod validators;
pub mod wifi;

pub use builders::RecordFactory;
pub use listeners::{
    CellularSurveyRecordListener, ListenerRegistry, NetworkDetailsSurface,
    WifiSurveyRecordListener,
};
pub use location::LocationCache;
pub use processor::SurveyRecordProcessor;
pub use sequence::Sequencer;

use crate::protobuf::records::WifiBeaconRecord;

/// A built Wi-Fi beacon record together with the original capability string.
/// Downstream log formatting needs the raw capability text, which is not
/// carried on the canonical record itself.
#[derive(Debug, Clone)]
pub struct WifiRecordWrapper {
    pub record: WifiBeaconRecord,
    pub capabilities: String,
}

/// Lock acquisition that survives poisoning. No invariant here spans a panic:
/// every guarded section either swaps a complete snapshot or holds a unit
/// serialization token, so recovering the inner value is always safe.
pub(crate) fn lock<T>(mutex: &std::sync::Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) fn read_lock<T>(lock: &std::sync::RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) fn write_lock<T>(lock: &std::sync::RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
