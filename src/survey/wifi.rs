//! Wi-Fi capability string parsing.
//!
//! Scan results report security as a bracketed capability string such as
//! `[WPA2-PSK-CCMP][RSN][ESS][WPS]`. The record carries a coarse encryption
//! classification plus a WPS flag; the raw string is preserved on the
//! [`WifiRecordWrapper`](super::WifiRecordWrapper) for downstream formatting.

use crate::protobuf::records::EncryptionType;

/// Classify the encryption in use from a raw capability string.
pub fn encryption_type(capabilities: &str) -> EncryptionType {
    if capabilities.contains("WEP") {
        return EncryptionType::EncWep;
    }

    // "WPA" is a substring of "WPA2"/"WPA3", so plain WPA is only recognized
    // when followed by a closing bracket or a cipher suite separator.
    let has_wpa = capabilities.contains("WPA]") || capabilities.contains("WPA-");
    let has_wpa2 = capabilities.contains("WPA2");
    let has_wpa3 = capabilities.contains("WPA3") || capabilities.contains("SAE");

    if has_wpa && has_wpa2 {
        EncryptionType::EncWpaWpa2
    } else if has_wpa3 {
        EncryptionType::EncWpa3
    } else if has_wpa2 {
        EncryptionType::EncWpa2
    } else if has_wpa {
        EncryptionType::EncWpa
    } else if !capabilities.contains("RSN") && !capabilities.contains("EAP") {
        EncryptionType::EncOpen
    } else {
        EncryptionType::EncUnknown
    }
}

/// True when the access point advertises Wi-Fi Protected Setup.
pub fn supports_wps(capabilities: &str) -> bool {
    capabilities.contains("WPS")
}
