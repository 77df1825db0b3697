//! Listener traits and the copy-on-write fan-out registry.

use std::sync::{Arc, RwLock};

use anyhow::Result;

use crate::protobuf::records::{CdmaRecord, GsmRecord, LteRecord, UmtsRecord};
use crate::survey::WifiRecordWrapper;

/// A consumer of cellular survey records (logger, network sender, ...).
///
/// Callbacks are invoked synchronously on the batch-processing thread, so
/// implementations must buffer or hand off internally rather than block.
/// A returned error is logged and never affects other listeners.
pub trait CellularSurveyRecordListener: Send + Sync {
    fn on_gsm_record(&self, record: &GsmRecord) -> Result<()> {
        let _ = record;
        Ok(())
    }

    fn on_cdma_record(&self, record: &CdmaRecord) -> Result<()> {
        let _ = record;
        Ok(())
    }

    fn on_umts_record(&self, record: &UmtsRecord) -> Result<()> {
        let _ = record;
        Ok(())
    }

    fn on_lte_record(&self, record: &LteRecord) -> Result<()> {
        let _ = record;
        Ok(())
    }
}

/// A consumer of Wi-Fi beacon survey records. One callback per scan cycle
/// carries the full list of wrapped records for that cycle.
pub trait WifiSurveyRecordListener: Send + Sync {
    fn on_wifi_beacon_records(&self, records: &[WifiRecordWrapper]) -> Result<()>;
}

/// The UI side channel: the latest LTE serving-cell record (or `None` as an
/// explicit "no data" signal) plus the currently active technology label.
/// Installed only while a UI surface is visible.
pub trait NetworkDetailsSurface: Send + Sync {
    fn on_current_technology(&self, technology: &str);
    fn on_lte_serving_cell(&self, record: Option<&LteRecord>);
}

/// A thread-safe listener set with copy-on-write snapshot semantics.
///
/// Registration and removal swap in a fresh immutable snapshot, so a dispatch
/// iterating an already-taken snapshot is never affected by concurrent
/// mutation: a listener registered mid-dispatch is only seen by later
/// dispatches. Listener identity is the `Arc` allocation, matching set
/// semantics without requiring `Eq` on trait objects.
pub struct ListenerRegistry<L: ?Sized> {
    snapshot: RwLock<Arc<Vec<Arc<L>>>>,
}

impl<L: ?Sized> ListenerRegistry<L> {
    pub fn new() -> Self {
        ListenerRegistry {
            snapshot: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Add a listener. Re-registering the same `Arc` is a no-op.
    pub fn register(&self, listener: Arc<L>) {
        let mut current = super::write_lock(&self.snapshot);
        if current.iter().any(|existing| Arc::ptr_eq(existing, &listener)) {
            return;
        }
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(listener);
        *current = Arc::new(next);
    }

    /// Remove a listener by identity. Unknown listeners are ignored.
    pub fn unregister(&self, listener: &Arc<L>) {
        let mut current = super::write_lock(&self.snapshot);
        if !current.iter().any(|existing| Arc::ptr_eq(existing, listener)) {
            return;
        }
        let next: Vec<Arc<L>> = current
            .iter()
            .filter(|existing| !Arc::ptr_eq(existing, listener))
            .cloned()
            .collect();
        *current = Arc::new(next);
    }

    /// A stable snapshot for iteration; unaffected by later mutation.
    pub fn snapshot(&self) -> Arc<Vec<Arc<L>>> {
        Arc::clone(&super::read_lock(&self.snapshot))
    }

    pub fn is_empty(&self) -> bool {
        super::read_lock(&self.snapshot).is_empty()
    }

    pub fn len(&self) -> usize {
        super::read_lock(&self.snapshot).len()
    }
}

impl<L: ?Sized> Default for ListenerRegistry<L> {
    fn default() -> Self {
        ListenerRegistry::new()
    }
}
