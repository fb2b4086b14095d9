//! The peripheral surface: identity fields, the decoded advertisement, and pass-through GATT
//! metadata

use crate::AdvertisementData;

/// A remote BLE peripheral observed during a scan
///
/// Identity fields and characteristic metadata are pass-throughs from the platform; only the
/// advertisement payload is decoded by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Peripheral {
    id: String,
    name: Option<String>,
    rssi: Option<i16>,
    advertisement: AdvertisementData,
    characteristics: Vec<Characteristic>,
}

impl Peripheral {
    /// Creates a peripheral from one scan snapshot.
    pub fn new(
        id: impl Into<String>,
        name: Option<String>,
        rssi: Option<i16>,
        advertisement: AdvertisementData,
        characteristics: Vec<Characteristic>,
    ) -> Self {
        Peripheral {
            id: id.into(),
            name,
            rssi,
            advertisement,
            characteristics,
        }
    }

    /// This peripheral's platform identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The name the OS reports for this peripheral, if any
    ///
    /// This can differ from the advertised local name; some platforms cache or override it.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The signal strength in dBm of the received advertisement packet
    pub fn rssi(&self) -> Option<i16> {
        self.rssi
    }

    /// The decoded advertisement payload
    pub fn advertisement(&self) -> &AdvertisementData {
        &self.advertisement
    }

    /// GATT characteristic metadata reported by the platform
    pub fn characteristics(&self) -> &[Characteristic] {
        &self.characteristics
    }
}

/// GATT characteristic metadata, copied field-by-field from the platform's already-structured
/// entries
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Characteristic {
    /// UUID of the service this characteristic belongs to
    pub service_uuid: String,
    /// UUID of the characteristic
    pub uuid: String,
    /// The characteristic's properties
    pub properties: CharacteristicProperties,
    /// Descriptor UUIDs reported for this characteristic
    pub descriptors: Vec<String>,
}

/// GATT characteristic properties as defined in the Bluetooth Core Specification, Vol 3, Part G,
/// §3.3.1.1. Extended properties are also included as defined in §3.3.3.1.
#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacteristicProperties {
    pub broadcast: bool,
    pub read: bool,
    pub write_without_response: bool,
    pub write: bool,
    pub notify: bool,
    pub indicate: bool,
    pub authenticated_signed_writes: bool,
    pub extended_properties: bool,
    pub reliable_write: bool,
    pub writable_auxiliaries: bool,
}

impl CharacteristicProperties {
    /// Raw transmutation from [`u32`].
    ///
    /// Extended properties are in the upper bits.
    pub fn from_bits(bits: u32) -> Self {
        CharacteristicProperties {
            broadcast: (bits & (1 << 0)) != 0,
            read: (bits & (1 << 1)) != 0,
            write_without_response: (bits & (1 << 2)) != 0,
            write: (bits & (1 << 3)) != 0,
            notify: (bits & (1 << 4)) != 0,
            indicate: (bits & (1 << 5)) != 0,
            authenticated_signed_writes: (bits & (1 << 6)) != 0,
            extended_properties: (bits & (1 << 7)) != 0,
            reliable_write: (bits & (1 << 8)) != 0,
            writable_auxiliaries: (bits & (1 << 9)) != 0,
        }
    }

    /// Raw transmutation to [`u32`].
    ///
    /// Extended properties are in the upper bits.
    pub fn to_bits(self) -> u32 {
        u32::from(self.broadcast)
            | (u32::from(self.read) << 1)
            | (u32::from(self.write_without_response) << 2)
            | (u32::from(self.write) << 3)
            | (u32::from(self.notify) << 4)
            | (u32::from(self.indicate) << 5)
            | (u32::from(self.authenticated_signed_writes) << 6)
            | (u32::from(self.extended_properties) << 7)
            | (u32::from(self.reliable_write) << 8)
            | (u32::from(self.writable_auxiliaries) << 9)
    }
}
