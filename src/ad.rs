//! Tokenizer for the raw advertising data (AD) structure format

use num_enum::TryFromPrimitive;

use crate::error::ErrorKind;
use crate::{Error, Result};

/// AD type codes interpreted by this crate. See the Bluetooth Assigned Numbers, §2.3 for the full
/// registry.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive)]
pub enum AdType {
    /// Advertising flags bitfield
    Flags = 0x01,
    /// Incomplete list of 16-bit service UUIDs
    IncompleteServices16 = 0x02,
    /// Complete list of 16-bit service UUIDs
    CompleteServices16 = 0x03,
    /// Incomplete list of 32-bit service UUIDs
    IncompleteServices32 = 0x04,
    /// Complete list of 32-bit service UUIDs
    CompleteServices32 = 0x05,
    /// Incomplete list of 128-bit service UUIDs
    IncompleteServices128 = 0x06,
    /// Complete list of 128-bit service UUIDs
    CompleteServices128 = 0x07,
    /// Shortened local name
    ShortenedLocalName = 0x08,
    /// Complete local name
    CompleteLocalName = 0x09,
    /// Transmitted power level
    TxPowerLevel = 0x0a,
    /// Service data with a 16-bit service UUID key
    ServiceData = 0x16,
    /// Manufacturer specific data
    ManufacturerData = 0xff,
}

/// One AD structure: a raw type code and its payload, borrowed from the advertisement buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdStructure<'a> {
    /// The raw AD type code
    pub code: u8,
    /// The field payload
    pub data: &'a [u8],
}

/// Iterator over the length-prefixed AD structures of a raw advertisement buffer.
///
/// Each structure is one length byte `L`, one type byte, and `L - 1` payload bytes. A zero length
/// byte terminates the stream and the remainder of the buffer is ignored, as is reaching the end
/// of the buffer. A structure whose declared payload extends past the end of the buffer yields
/// [`TruncatedRecord`][ErrorKind::TruncatedRecord] and ends iteration.
#[derive(Debug, Clone)]
pub struct AdStructures<'a> {
    data: &'a [u8],
}

impl<'a> AdStructures<'a> {
    /// Creates a tokenizer over `data`.
    pub fn new(data: &'a [u8]) -> Self {
        AdStructures { data }
    }

    fn fail(&mut self, message: String) -> Option<Result<AdStructure<'a>>> {
        self.data = &[];
        Some(Err(Error::new(ErrorKind::TruncatedRecord, message)))
    }
}

impl<'a> Iterator for AdStructures<'a> {
    type Item = Result<AdStructure<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, rest) = self.data.split_first()?;
        if len == 0 {
            self.data = &[];
            return None;
        }

        let Some((&code, rest)) = rest.split_first() else {
            return self.fail(format!("{len} byte structure with no type byte"));
        };

        let payload_len = usize::from(len) - 1;
        if rest.len() < payload_len {
            return self.fail(format!(
                "{payload_len} byte payload declared, {} bytes remaining",
                rest.len()
            ));
        }

        let (data, rest) = rest.split_at(payload_len);
        self.data = rest;
        Some(Ok(AdStructure { code, data }))
    }
}
