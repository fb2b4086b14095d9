//! Interpreter for the pre-decoded advertisement path (CoreBluetooth-style input)

use std::collections::HashMap;

use tracing::warn;

use crate::{btuuid, AdvertisementData};

/// A pre-decoded advertisement, as CoreBluetooth surfaces it to scan callbacks.
///
/// Every field maps to one key of the platform's `advertisementData` dictionary; the key names
/// are the platform's contract, not this crate's. Absent keys leave the corresponding record
/// field at its default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvDictionary {
    /// `kCBAdvDataLocalName`
    pub local_name: Option<String>,
    /// `kCBAdvDataTxPowerLevel`
    pub tx_power_level: Option<i32>,
    /// `kCBAdvDataServiceUUIDs`
    pub service_uuids: Vec<String>,
    /// `kCBAdvDataServiceData`, keyed by service UUID string
    pub service_data: HashMap<String, Vec<u8>>,
    /// `kCBAdvDataManufacturerData`: the little-endian company identifier followed by the
    /// manufacturer payload
    pub manufacturer_data: Option<Vec<u8>>,
}

impl AdvertisementData {
    /// Decodes a pre-decoded advertisement dictionary.
    ///
    /// The host has already split the payload by field, so no tokenization is performed and
    /// nothing here can fail: a manufacturer data blob too short to hold its company identifier
    /// is ignored rather than rejected. This path never populates the flags or unknown-field
    /// maps, which CoreBluetooth does not surface.
    pub fn from_dictionary(dict: &AdvDictionary) -> Self {
        let mut adv = AdvertisementData::default();

        if let Some(name) = &dict.local_name {
            adv.local_name = Some(name.clone());
        }
        if let Some(level) = dict.tx_power_level {
            adv.tx_power_level = level;
        }

        for uuid in &dict.service_uuids {
            adv.services.push(uuid.to_lowercase());
        }

        for (uuid, data) in &dict.service_data {
            // Keys in this path are platform-supplied strings already in display order; no
            // byte-order normalization.
            adv.service_data.insert(uuid.to_lowercase(), data.clone());
        }

        match &dict.manufacturer_data {
            Some(blob) if blob.len() >= 2 => {
                // 2-byte keys always format
                if let Ok(key) = btuuid::format_uuid(&btuuid::reversed(&blob[..2])) {
                    adv.manufacturer_data.insert(key, blob[2..].to_vec());
                }
            }
            Some(blob) => {
                warn!(
                    "ignoring {} byte manufacturer data blob with no company id",
                    blob.len()
                );
            }
            None => {}
        }

        adv
    }
}
