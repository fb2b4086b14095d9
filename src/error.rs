//! Bleadv errors

use crate::AdvertisementData;

/// The error type for advertisement decoding operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, message: String) -> Self {
        Error { kind, message }
    }

    /// Returns the corresponding [ErrorKind] for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message for this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", &self.kind)
        } else {
            write!(f, "{}: {}", &self.kind, &self.message)
        }
    }
}

impl std::error::Error for Error {}

/// A list of general categories of decode error.
#[non_exhaustive]
#[derive(Debug, displaydoc::Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// a declared field length exceeds the remaining buffer
    TruncatedRecord,
    /// a field payload does not match its declared shape
    MalformedField,
    /// a UUID was built from a byte count other than 2, 4, or 16
    InvalidLength,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error {
            kind,
            message: String::new(),
        }
    }
}

/// The error type for a failed decode, carrying the partially populated record.
///
/// A fault aborts only the remainder of the decode: every field populated before it is preserved
/// and can be recovered through [`partial`][DecodeError::partial] or
/// [`into_partial`][DecodeError::into_partial] for diagnostics. No partial record is ever
/// silently discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    error: Error,
    partial: AdvertisementData,
}

impl DecodeError {
    pub(crate) fn new(error: Error, partial: AdvertisementData) -> Self {
        DecodeError { error, partial }
    }

    /// Returns the corresponding [ErrorKind] for this error.
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    /// Returns the message for this error.
    pub fn message(&self) -> &str {
        self.error.message()
    }

    /// The record as populated up to the point of the fault.
    pub fn partial(&self) -> &AdvertisementData {
        &self.partial
    }

    /// Consumes the error, returning the partially populated record.
    pub fn into_partial(self) -> AdvertisementData {
        self.partial
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
