//! Canonical UUID strings for Bluetooth advertisement fields

use std::fmt::Write as _;

use uuid::Uuid;

use crate::error::ErrorKind;
use crate::{Error, Result};

/// This is the Bluetooth Base UUID. It is used with 16-bit and 32-bit UUIDs
/// [defined](https://www.bluetooth.com/specifications/assigned-numbers/) by the Bluetooth SIG.
pub const BLUETOOTH_BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805f9b34fb;

/// Const function to create a 16-bit Bluetooth UUID
pub const fn bluetooth_uuid_from_u16(uuid: u16) -> Uuid {
    Uuid::from_u128(((uuid as u128) << 96) | BLUETOOTH_BASE_UUID)
}

/// Const function to create a 32-bit Bluetooth UUID
pub const fn bluetooth_uuid_from_u32(uuid: u32) -> Uuid {
    Uuid::from_u128(((uuid as u128) << 96) | BLUETOOTH_BASE_UUID)
}

/// Formats `bytes` as a canonical lowercase hex UUID string.
///
/// A 16-byte slice is dash-grouped as `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`; 2- and 4-byte
/// slices render as plain 4- and 8-character hex strings. The byte content itself is not
/// validated. Any other length fails with [`InvalidLength`][ErrorKind::InvalidLength].
pub fn format_uuid(bytes: &[u8]) -> Result<String> {
    if !matches!(bytes.len(), 2 | 4 | 16) {
        return Err(Error::new(
            ErrorKind::InvalidLength,
            format!("{} byte UUID", bytes.len()),
        ));
    }

    let mut uuid = String::with_capacity(if bytes.len() == 16 { 36 } else { bytes.len() * 2 });
    for (i, b) in bytes.iter().enumerate() {
        if bytes.len() == 16 && matches!(i, 4 | 6 | 8 | 10) {
            uuid.push('-');
        }
        let _ = write!(uuid, "{b:02x}");
    }
    Ok(uuid)
}

/// Returns a copy of `bytes` in reversed order.
///
/// Converts a little-endian wire field into the big-endian order used by canonical UUID and
/// company-identifier strings. An empty slice is a no-op and never fails.
pub fn reversed(bytes: &[u8]) -> Vec<u8> {
    let mut out = bytes.to_vec();
    out.reverse();
    out
}

/// Expands a canonical UUID string into a full 128-bit [`Uuid`].
///
/// 4- and 8-character strings are parsed as 16- and 32-bit Bluetooth UUIDs and placed on
/// [`BLUETOOTH_BASE_UUID`]; 36-character strings are parsed directly. Returns `None` for anything
/// else.
pub fn expand_uuid(uuid: &str) -> Option<Uuid> {
    match uuid.len() {
        4 => u16::from_str_radix(uuid, 16).ok().map(bluetooth_uuid_from_u16),
        8 => u32::from_str_radix(uuid, 16).ok().map(bluetooth_uuid_from_u32),
        36 => Uuid::parse_str(uuid).ok(),
        _ => None,
    }
}
