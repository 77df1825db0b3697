//! Pure derived-value computations on cell identifiers and channel numbers.

use crate::protobuf::records::LteBandwidth;

/// Largest valid 28-bit LTE cell identity.
pub const MAX_LTE_CELL_ID: i32 = 268_435_455;

pub fn is_valid_cell_id(cell_id: i32) -> bool {
    (0..=MAX_LTE_CELL_ID).contains(&cell_id)
}

/// The LTE cell identity is 28 bits long; the high 20 bits are the macro
/// eNodeB ID.
pub fn enodeb_id_from_cell_id(cell_id: i32) -> i32 {
    cell_id >> 8
}

/// The low 8 bits of the 28-bit LTE cell identity are the sector ID.
pub fn sector_id_from_cell_id(cell_id: i32) -> i32 {
    cell_id & 0xFF
}

/// Primary synchronization sequence index derived from the PCI.
pub fn primary_sync_sequence(pci: i32) -> i32 {
    pci % 3
}

/// Secondary synchronization sequence index derived from the PCI.
pub fn secondary_sync_sequence(pci: i32) -> i32 {
    pci / 3
}

/// Map a reported LTE carrier bandwidth in kHz onto the record enum. Returns
/// `None` for values outside the six standardized bandwidths.
pub fn lte_bandwidth_from_khz(bandwidth_khz: i32) -> Option<LteBandwidth> {
    match bandwidth_khz {
        1_400 => Some(LteBandwidth::Mhz14),
        3_000 => Some(LteBandwidth::Mhz3),
        5_000 => Some(LteBandwidth::Mhz5),
        10_000 => Some(LteBandwidth::Mhz10),
        15_000 => Some(LteBandwidth::Mhz15),
        20_000 => Some(LteBandwidth::Mhz20),
        _ => None,
    }
}

/// Convert an 802.11 center frequency in MHz to its channel number, or `-1`
/// when the frequency does not map onto a known channel.
pub fn channel_from_frequency(frequency_mhz: i32) -> i16 {
    match frequency_mhz {
        2_484 => 14,
        f @ 2_412..=2_472 if (f - 2_412) % 5 == 0 => ((f - 2_407) / 5) as i16,
        f @ 5_170..=5_895 if (f - 5_000) % 5 == 0 => ((f - 5_000) / 5) as i16,
        _ => -1,
    }
}
