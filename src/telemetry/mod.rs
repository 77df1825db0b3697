//! Raw platform telemetry input model.
//!
//! These types stand in for the platform's cell-info class hierarchy and Wi-Fi
//! scan result objects. Integer fields follow the platform convention of
//! carrying a sentinel when a value was never reported; [`UNSET`] is the common
//! sentinel, with some fields additionally using `-1` or `0` (the builders and
//! validators special-case those per field).

/// Common platform sentinel for "value not reported".
pub const UNSET: i32 = i32::MAX;

/// Labels for the currently active radio access technology, as reported by the
/// platform service-state callback and forwarded to the UI side channel.
pub mod technology {
    pub const GSM: &str = "GSM";
    pub const CDMA: &str = "CDMA";
    pub const UMTS: &str = "UMTS";
    pub const LTE: &str = "LTE";
    pub const LTE_CA: &str = "LTE-CA";
    pub const UNKNOWN: &str = "Unknown";
}

/// One cell-tower reading plus the serving/neighbor flag.
#[derive(Debug, Clone)]
pub struct CellObservation {
    /// True when the device is registered/camped on this cell.
    pub serving: bool,
    pub telemetry: CellTelemetry,
}

/// Technology-tagged raw cell telemetry, resolved once at batch-entry time.
#[derive(Debug, Clone)]
pub enum CellTelemetry {
    Gsm(GsmCellTelemetry),
    Cdma(CdmaCellTelemetry),
    Umts(UmtsCellTelemetry),
    Lte(LteCellTelemetry),
    /// A technology this pipeline does not understand; always skipped.
    Unknown,
}

#[derive(Debug, Clone)]
pub struct GsmCellTelemetry {
    pub mcc: i32,
    pub mnc: i32,
    pub lac: i32,
    pub cid: i32,
    pub arfcn: i32,
    pub bsic: i32,
    /// Signal strength in dBm.
    pub signal_strength: i32,
    pub timing_advance: i32,
    pub provider: Option<String>,
}

impl Default for GsmCellTelemetry {
    fn default() -> Self {
        GsmCellTelemetry {
            mcc: UNSET,
            mnc: UNSET,
            lac: UNSET,
            cid: UNSET,
            arfcn: UNSET,
            bsic: UNSET,
            signal_strength: UNSET,
            timing_advance: UNSET,
            provider: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CdmaCellTelemetry {
    pub sid: i32,
    pub nid: i32,
    pub bsid: i32,
    /// Signal strength in dBm.
    pub signal_strength: i32,
    /// Ec/Io in dB*10, per the platform convention.
    pub ecio: i32,
    pub provider: Option<String>,
}

impl Default for CdmaCellTelemetry {
    fn default() -> Self {
        CdmaCellTelemetry {
            sid: UNSET,
            nid: UNSET,
            bsid: UNSET,
            signal_strength: UNSET,
            ecio: UNSET,
            provider: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UmtsCellTelemetry {
    pub mcc: i32,
    pub mnc: i32,
    pub lac: i32,
    pub cid: i32,
    pub uarfcn: i32,
    pub psc: i32,
    /// Signal strength in dBm.
    pub signal_strength: i32,
    pub provider: Option<String>,
}

impl Default for UmtsCellTelemetry {
    fn default() -> Self {
        UmtsCellTelemetry {
            mcc: UNSET,
            mnc: UNSET,
            lac: UNSET,
            cid: UNSET,
            uarfcn: UNSET,
            psc: UNSET,
            signal_strength: UNSET,
            provider: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LteCellTelemetry {
    pub mcc: i32,
    pub mnc: i32,
    pub tac: i32,
    /// 28-bit cell identity.
    pub ci: i32,
    pub earfcn: i32,
    pub pci: i32,
    /// Reference signal received power in dBm.
    pub rsrp: i32,
    /// Reference signal received quality in dB.
    pub rsrq: i32,
    pub timing_advance: i32,
    /// Cell bandwidth in kHz (e.g. 10_000 for a 10 MHz carrier).
    pub bandwidth_khz: i32,
    pub provider: Option<String>,
}

impl Default for LteCellTelemetry {
    fn default() -> Self {
        LteCellTelemetry {
            mcc: UNSET,
            mnc: UNSET,
            tac: UNSET,
            ci: UNSET,
            earfcn: UNSET,
            pci: UNSET,
            rsrp: UNSET,
            rsrq: UNSET,
            timing_advance: UNSET,
            bandwidth_khz: UNSET,
            provider: None,
        }
    }
}

/// One access point from a Wi-Fi scan pass.
#[derive(Debug, Clone)]
pub struct WifiScanResult {
    pub bssid: String,
    pub ssid: String,
    /// Received signal level in dBm; [`UNSET`] when not reported.
    pub signal_level: i32,
    /// Center frequency in MHz; `-1` or `0` when not reported.
    pub frequency: i32,
    /// Raw capability string, e.g. `[WPA2-PSK-CCMP][ESS][WPS]`.
    pub capabilities: String,
}

impl Default for WifiScanResult {
    fn default() -> Self {
        WifiScanResult {
            bssid: String::new(),
            ssid: String::new(),
            signal_level: UNSET,
            frequency: -1,
            capabilities: String::new(),
        }
    }
}

/// A position fix as pushed by the platform location service.
#[derive(Debug, Clone)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Altitude above the WGS84 ellipsoid, in meters.
    pub altitude: f64,
    /// Estimated horizontal accuracy radius in meters.
    pub accuracy: f32,
    /// Identity of the positioning provider that produced this fix.
    pub provider: String,
}
