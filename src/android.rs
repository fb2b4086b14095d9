//! Field interpreter for the raw advertisement path (Android-style input)

use tracing::debug;

use crate::ad::{AdStructures, AdType};
use crate::error::{DecodeError, Error, ErrorKind};
use crate::{btuuid, AdvertisementData};

impl AdvertisementData {
    /// Decodes raw length-prefixed AD structures, as delivered by the Android BLE stack.
    ///
    /// Decoding is best-effort: unrecognized AD types are preserved in the
    /// [unknown-field map][AdvertisementData::unknown] and decoding continues. A structurally
    /// invalid field aborts the decode and returns the record populated so far inside the error.
    pub fn from_ad_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        let mut adv = AdvertisementData::default();

        for field in AdStructures::new(data) {
            let field = match field {
                Ok(field) => field,
                Err(err) => return Err(DecodeError::new(err, adv)),
            };
            if let Err(err) = adv.apply(field.code, field.data) {
                return Err(DecodeError::new(err, adv));
            }
        }

        debug!(
            "decoded {} AD bytes: {} services, {} unknown fields",
            data.len(),
            adv.services.len(),
            adv.unknown.len()
        );
        Ok(adv)
    }

    fn apply(&mut self, code: u8, data: &[u8]) -> crate::Result<()> {
        let Ok(ad_type) = AdType::try_from(code) else {
            debug!("storing unhandled AD type {code:#04x} ({} bytes)", data.len());
            self.unknown.insert(code, data.to_vec());
            return Ok(());
        };

        match ad_type {
            AdType::Flags => self.flags = first_byte(code, data)?,
            AdType::IncompleteServices16 | AdType::CompleteServices16 => self.extend_services(data, 2)?,
            AdType::IncompleteServices32 | AdType::CompleteServices32 => self.extend_services(data, 4)?,
            AdType::IncompleteServices128 | AdType::CompleteServices128 => self.extend_services(data, 16)?,
            AdType::ShortenedLocalName | AdType::CompleteLocalName => {
                self.local_name = Some(String::from_utf8_lossy(data).into_owned());
            }
            AdType::TxPowerLevel => self.tx_power_level = i32::from(first_byte(code, data)?),
            AdType::ServiceData => {
                // Service-data keys keep their wire order; only manufacturer-data keys are
                // reversed.
                let (uuid, value) = split_keyed(code, data)?;
                self.service_data.insert(btuuid::format_uuid(uuid)?, value.to_vec());
            }
            AdType::ManufacturerData => {
                let (company, value) = split_keyed(code, data)?;
                let key = btuuid::format_uuid(&btuuid::reversed(company))?;
                self.manufacturer_data.insert(key, value.to_vec());
            }
        }

        Ok(())
    }

    fn extend_services(&mut self, data: &[u8], width: usize) -> crate::Result<()> {
        if data.len() % width != 0 {
            return Err(Error::new(
                ErrorKind::MalformedField,
                format!("{} byte service list is not a multiple of {width}", data.len()),
            ));
        }

        for chunk in data.chunks_exact(width) {
            self.services.push(btuuid::format_uuid(&btuuid::reversed(chunk))?);
        }
        Ok(())
    }
}

fn first_byte(code: u8, data: &[u8]) -> crate::Result<u8> {
    data.first().copied().ok_or_else(|| {
        Error::new(
            ErrorKind::MalformedField,
            format!("empty payload for AD type {code:#04x}"),
        )
    })
}

fn split_keyed(code: u8, data: &[u8]) -> crate::Result<(&[u8], &[u8])> {
    if data.len() < 2 {
        return Err(Error::new(
            ErrorKind::MalformedField,
            format!("AD type {code:#04x} needs a 2 byte key, got {} bytes", data.len()),
        ));
    }
    Ok(data.split_at(2))
}
