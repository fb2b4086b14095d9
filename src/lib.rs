#![warn(missing_docs)]

//! Bleadv is a cross-platform [Bluetooth Low Energy] (BLE) advertisement decoder for [Rust].
//!
//! BLE platforms surface advertisement payloads in two fundamentally different shapes. The Android
//! stack hands applications the raw advertisement bytes as length-prefixed AD structures (Core
//! Specification, Vol 3, Part C, §11), while CoreBluetooth pre-parses the payload and surfaces a
//! dictionary of named fields. The goal of Bleadv is to decode either shape into one normalized,
//! queryable [`AdvertisementData`] record with canonical lowercase UUID strings, so application
//! code never has to care which platform a scan result came from.
//!
//! [Rust]: https://www.rust-lang.org/
//! [Bluetooth Low Energy]: https://www.bluetooth.com/specifications/specs/
//!
//! # Usage
//!
//! ```rust
//! use bleadv::{AdvertisementData, ScanInput};
//!
//! let bytes = [
//!     0x02, 0x01, 0x06, // flags
//!     0x03, 0x03, 0x0d, 0x18, // complete list of 16-bit service UUIDs
//!     0x05, 0x09, b'h', b'e', b'a', b'r', // complete local name
//! ];
//!
//! let adv = AdvertisementData::decode(ScanInput::AdBytes(&bytes))?;
//! assert_eq!(adv.local_name(), Some("hear"));
//! assert_eq!(adv.services()[0], "180d");
//! assert_eq!(adv.flags(), 0x06);
//! # Ok::<(), bleadv::DecodeError>(())
//! ```
//!
//! # Overview
//!
//! The primary functions provided by Bleadv are:
//!
//! - Decoding advertisements:
//!   - [Tokenizing][AdStructures] a raw length-prefixed advertisement buffer into AD structures
//!   - [Decoding the raw byte stream][AdvertisementData::from_ad_bytes] (Android-style input)
//!   - [Decoding a pre-parsed dictionary][AdvertisementData::from_dictionary] (CoreBluetooth-style
//!     input)
//! - Normalizing identifiers:
//!   - [Formatting][btuuid::format_uuid] 16-, 32-, and 128-bit UUID bytes as canonical lowercase
//!     strings
//!   - [Expanding][btuuid::expand_uuid] canonical strings onto the Bluetooth Base UUID
//! - Carrying the surrounding scan snapshot:
//!   - [`Peripheral`] with its identity fields and pass-through GATT metadata
//!
//! Decoding is best-effort: AD types this crate does not interpret are preserved verbatim in the
//! record's [unknown-field map][AdvertisementData::unknown], and a structurally invalid field
//! aborts only the remainder of the decode — the partially populated record stays available
//! through [`DecodeError::partial`].
//!
//! Decoding is a pure, synchronous function of its input. Each call owns its working buffers and
//! the returned record owns all of its payloads, so records may outlive the input buffer and
//! independent decodes may run concurrently without locking.
//!
//! # Feature flags
//!
//! The `serde` feature is available to enable serializing/deserializing the decoded record and
//! input schema types.

pub mod btuuid;
pub mod error;

mod ad;
mod android;
mod corebluetooth;
mod peripheral;

use std::collections::HashMap;

use uuid::Uuid;

pub use ad::{AdStructure, AdStructures, AdType};
pub use corebluetooth::AdvDictionary;
pub use error::{DecodeError, Error};
pub use peripheral::{Characteristic, CharacteristicProperties, Peripheral};

/// Convenience alias for a result with [`Error`]
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// One advertisement snapshot, tagged with the platform shape it was delivered in
///
/// The variant is the platform discriminator: it alone selects which interpreter runs, no runtime
/// inspection of the payload is performed.
#[derive(Debug, Clone, Copy)]
pub enum ScanInput<'a> {
    /// Raw length-prefixed AD structures, as the Android BLE stack delivers them
    /// (`ScanRecord.getBytes()`)
    AdBytes(&'a [u8]),
    /// A pre-decoded advertisement dictionary, as CoreBluetooth delivers it
    Dictionary(&'a AdvDictionary),
}

/// Data included in a Bluetooth advertisement or scan response, decoded into canonical form.
///
/// A record is built once by [`decode`][AdvertisementData::decode] and read-only afterwards. Every
/// UUID key is a canonical lowercase hex string (see [`btuuid::format_uuid`]) and every byte
/// payload is an owned copy, so the record's lifetime is independent of the buffer it was decoded
/// from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvertisementData {
    pub(crate) local_name: Option<String>,
    pub(crate) tx_power_level: i32,
    pub(crate) flags: u8,
    pub(crate) services: Vec<String>,
    pub(crate) service_data: HashMap<String, Vec<u8>>,
    pub(crate) manufacturer_data: HashMap<String, Vec<u8>>,
    pub(crate) unknown: HashMap<u8, Vec<u8>>,
}

impl AdvertisementData {
    /// Decodes one advertisement snapshot into a record.
    ///
    /// The interpreter is selected by the [`ScanInput`] variant. On error, the fields decoded
    /// before the fault remain available through [`DecodeError::partial`].
    pub fn decode(input: ScanInput<'_>) -> Result<Self, DecodeError> {
        match input {
            ScanInput::AdBytes(data) => Self::from_ad_bytes(data),
            ScanInput::Dictionary(dict) => Ok(Self::from_dictionary(dict)),
        }
    }

    /// The (possibly shortened) local name of the device (CSS §A.1.2)
    pub fn local_name(&self) -> Option<&str> {
        self.local_name.as_deref()
    }

    /// Transmitted power level (CSS §A.1.5), or 0 if the advertisement did not carry one
    ///
    /// The raw path reads this field as an unsigned byte; the dictionary path copies the
    /// platform's signed integer verbatim.
    pub fn tx_power_level(&self) -> i32 {
        self.tx_power_level
    }

    /// Advertising flags bitfield (CSS §A.1.3), or 0 if absent
    ///
    /// Only the raw path populates this; CoreBluetooth does not surface flag bits.
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Advertised GATT service UUIDs (CSS §A.1.1), in encounter order
    ///
    /// Duplicates are preserved as advertised.
    pub fn services(&self) -> &[String] {
        &self.services
    }

    /// Service associated data (CSS §A.1.11) for one service UUID
    pub fn service_data(&self, uuid: &str) -> Option<&[u8]> {
        self.service_data.get(uuid).map(Vec::as_slice)
    }

    /// All service associated data, keyed by service UUID
    pub fn service_data_map(&self) -> &HashMap<String, Vec<u8>> {
        &self.service_data
    }

    /// Manufacturer specific data (CSS §A.1.4), keyed by the company identifier's canonical hex
    /// string
    pub fn manufacturer_data(&self) -> &HashMap<String, Vec<u8>> {
        &self.manufacturer_data
    }

    /// Payloads of AD types this crate does not interpret, keyed by raw type code
    ///
    /// Only the raw path populates this; CoreBluetooth does not surface unrecognized fields.
    pub fn unknown(&self) -> &HashMap<u8, Vec<u8>> {
        &self.unknown
    }

    /// Advertised service UUIDs expanded to full 128-bit [`Uuid`]s
    ///
    /// 16- and 32-bit entries are placed on the Bluetooth Base UUID. Entries that are not
    /// canonical UUID strings are skipped.
    pub fn service_uuids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.services.iter().filter_map(|s| btuuid::expand_uuid(s))
    }
}
