//! Per-technology minimum-field validation.
//!
//! Each predicate decides whether a raw reading carries enough information to
//! be worth emitting as a record. The platform reports "value not reported"
//! inconsistently: [`UNSET`] (`i32::MAX`) everywhere, with `-1` additionally
//! used for the channel-number family and a few identity fields. Rejection
//! logs a debug diagnostic and the reading simply produces no record.

use log::debug;

use crate::telemetry::{
    CdmaCellTelemetry, GsmCellTelemetry, LteCellTelemetry, UmtsCellTelemetry, WifiScanResult,
    UNSET,
};

pub fn validate_gsm(raw: &GsmCellTelemetry) -> bool {
    if raw.arfcn == UNSET || raw.arfcn == -1 {
        debug!("The ARFCN is required to build a GSM survey record");
        return false;
    }
    if raw.bsic == UNSET || raw.bsic == -1 {
        debug!("The BSIC is required to build a GSM survey record");
        return false;
    }
    if raw.signal_strength == UNSET {
        debug!("The signal strength is required to build a GSM survey record");
        return false;
    }
    true
}

pub fn validate_cdma(raw: &CdmaCellTelemetry) -> bool {
    if raw.signal_strength == UNSET {
        debug!("The signal strength is required to build a CDMA survey record");
        return false;
    }
    if raw.ecio == UNSET {
        debug!("The Ec/Io is required to build a CDMA survey record");
        return false;
    }
    true
}

pub fn validate_umts(raw: &UmtsCellTelemetry) -> bool {
    if raw.uarfcn == UNSET || raw.uarfcn == -1 {
        debug!("The UARFCN is required to build a UMTS survey record");
        return false;
    }
    if raw.psc == UNSET || raw.psc == -1 {
        debug!("The PSC is required to build a UMTS survey record");
        return false;
    }
    if raw.signal_strength == UNSET {
        debug!("The signal strength is required to build a UMTS survey record");
        return false;
    }
    true
}

pub fn validate_lte(raw: &LteCellTelemetry) -> bool {
    if raw.earfcn == UNSET || raw.earfcn == -1 {
        debug!("The EARFCN is required to build an LTE survey record");
        return false;
    }
    if raw.pci == UNSET || raw.pci == -1 {
        debug!("The PCI is required to build an LTE survey record");
        return false;
    }
    if raw.rsrp == UNSET {
        debug!("The RSRP is required to build an LTE survey record");
        return false;
    }
    true
}

pub fn validate_wifi_beacon(scan: &WifiScanResult) -> bool {
    if scan.bssid.is_empty() {
        debug!("The BSSID is required to build a Wi-Fi beacon survey record");
        return false;
    }
    if scan.signal_level == UNSET {
        debug!("The signal strength is required to build a Wi-Fi beacon survey record");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_unset_gsm_is_rejected() {
        assert!(!validate_gsm(&GsmCellTelemetry::default()));
    }

    #[test]
    fn gsm_requires_each_field() {
        let valid = GsmCellTelemetry {
            arfcn: 42,
            bsic: 21,
            signal_strength: -85,
            ..GsmCellTelemetry::default()
        };
        assert!(validate_gsm(&valid));

        assert!(!validate_gsm(&GsmCellTelemetry { arfcn: -1, ..valid.clone() }));
        assert!(!validate_gsm(&GsmCellTelemetry { bsic: UNSET, ..valid.clone() }));
        assert!(!validate_gsm(&GsmCellTelemetry {
            signal_strength: UNSET,
            ..valid
        }));
    }

    #[test]
    fn all_unset_cdma_is_rejected() {
        assert!(!validate_cdma(&CdmaCellTelemetry::default()));
    }

    #[test]
    fn all_unset_umts_is_rejected() {
        assert!(!validate_umts(&UmtsCellTelemetry::default()));
    }

    #[test]
    fn lte_rejects_negative_one_channel() {
        let raw = LteCellTelemetry {
            earfcn: -1,
            pci: 101,
            rsrp: -95,
            ..LteCellTelemetry::default()
        };
        assert!(!validate_lte(&raw));
    }

    #[test]
    fn all_unset_lte_is_rejected() {
        assert!(!validate_lte(&LteCellTelemetry::default()));
    }

    #[test]
    fn wifi_requires_bssid_and_level() {
        assert!(!validate_wifi_beacon(&WifiScanResult::default()));
        assert!(!validate_wifi_beacon(&WifiScanResult {
            bssid: "00:11:22:33:44:55".to_string(),
            ..WifiScanResult::default()
        }));
        assert!(validate_wifi_beacon(&WifiScanResult {
            bssid: "00:11:22:33:44:55".to_string(),
            signal_level: -60,
            ..WifiScanResult::default()
        }));
    }
}
