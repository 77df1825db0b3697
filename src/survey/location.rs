//! Cache for the most recent high-confidence position fix.

use std::sync::Mutex;

use log::{debug, info};

use crate::telemetry::LocationFix;

/// Accuracy gate for cached fixes, in meters. This is the number that WiGLE
/// Wi-Fi uses.
pub const DEFAULT_ACCURACY_THRESHOLD_METERS: f32 = 32.0;

/// The primary positioning provider accepted by default.
pub const DEFAULT_PROVIDER: &str = "gps";

/// Holds the latest acceptable position fix for record enrichment.
///
/// A fix is accepted only when it comes from the primary provider and its
/// reported accuracy is within the configured threshold. On an accuracy
/// violation or loss of the provider the cache is cleared rather than left
/// stale; callers must treat "no location" as a legitimate steady state.
#[derive(Debug)]
pub struct LocationCache {
    latest: Mutex<Option<LocationFix>>,
    provider: String,
    accuracy_threshold: f32,
}

impl LocationCache {
    pub fn new(provider: impl Into<String>, accuracy_threshold: f32) -> Self {
        LocationCache {
            latest: Mutex::new(None),
            provider: provider.into(),
            accuracy_threshold,
        }
    }

    pub fn with_defaults() -> Self {
        LocationCache::new(DEFAULT_PROVIDER, DEFAULT_ACCURACY_THRESHOLD_METERS)
    }

    /// Handle a new fix pushed by the platform location service.
    pub fn on_location_changed(&self, fix: LocationFix) {
        let mut latest = super::lock(&self.latest);
        if fix.provider == self.provider && fix.accuracy <= self.accuracy_threshold {
            *latest = Some(fix);
        } else {
            debug!(
                "Rejecting location fix from provider '{}' with accuracy {} m; clearing the cache",
                fix.provider, fix.accuracy
            );
            *latest = None;
        }
    }

    pub fn on_provider_enabled(&self, provider: &str) {
        info!("Location provider ({provider}) has been enabled");
    }

    /// Clears the cache when the primary provider goes away.
    pub fn on_provider_disabled(&self, provider: &str) {
        info!("Location provider ({provider}) has been disabled");
        if provider == self.provider {
            *super::lock(&self.latest) = None;
        }
    }

    /// The most recent acceptable fix, if any.
    pub fn latest(&self) -> Option<LocationFix> {
        super::lock(&self.latest).clone()
    }

    pub fn clear(&self) {
        *super::lock(&self.latest) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(provider: &str, accuracy: f32) -> LocationFix {
        LocationFix {
            latitude: 35.2271,
            longitude: -80.8431,
            altitude: 228.0,
            accuracy,
            provider: provider.to_string(),
        }
    }

    #[test]
    fn accepts_accurate_primary_fix() {
        let cache = LocationCache::with_defaults();
        cache.on_location_changed(fix("gps", 10.0));
        assert!(cache.latest().is_some());
    }

    #[test]
    fn inaccurate_fix_clears_the_cache() {
        let cache = LocationCache::with_defaults();
        cache.on_location_changed(fix("gps", 10.0));
        cache.on_location_changed(fix("gps", 100.0));
        assert!(cache.latest().is_none());
    }

    #[test]
    fn secondary_provider_fix_clears_the_cache() {
        let cache = LocationCache::with_defaults();
        cache.on_location_changed(fix("gps", 10.0));
        cache.on_location_changed(fix("network", 5.0));
        assert!(cache.latest().is_none());
    }

    #[test]
    fn provider_loss_clears_the_cache() {
        let cache = LocationCache::with_defaults();
        cache.on_location_changed(fix("gps", 10.0));
        cache.on_provider_disabled("network");
        assert!(cache.latest().is_some());
        cache.on_provider_disabled("gps");
        assert!(cache.latest().is_none());
    }
}
