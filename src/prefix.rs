//! The typed lookup key: a hardware address's first three octets.

use std::fmt;
use std::str::FromStr;

use crate::errors::OuiError;

/// The organizationally unique identifier of a hardware address.
///
/// Stored as raw bytes; the canonical text form is lowercase `xx:xx:xx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OuiPrefix([u8; 3]);

impl OuiPrefix {
    pub const fn new(a: u8, b: u8, c: u8) -> Self {
        Self([a, b, c])
    }

    pub const fn octets(&self) -> [u8; 3] {
        self.0
    }

    /// Extracts the prefix from a colon-delimited hardware address.
    ///
    /// The first three colon-separated segments must each be exactly two
    /// hex digits; case does not matter. Anything past the third segment
    /// is ignored, so a bare prefix (`"00:1a:11"`) and a full address
    /// (`"00:1A:11:22:33:44"`) are both accepted.
    ///
    /// This is the strict counterpart of the lenient lookup: where the
    /// lookup treats malformed input as "no match", this returns an error.
    pub fn from_address(addr: &str) -> Result<Self, OuiError> {
        let mut segments = addr.split(':');
        let mut octets = [0u8; 3];
        for octet in &mut octets {
            *octet = segments
                .next()
                .and_then(parse_octet)
                .ok_or_else(|| OuiError::InvalidAddressFormat(addr.to_string()))?;
        }
        Ok(Self(octets))
    }
}

/// Parses one address segment: exactly two ASCII hex digits.
///
/// Segment length matters. A one-digit group like `"f"` is not padded to
/// `"0f"`; the registered keys are two digits per group and a shorter
/// group can never equal one of them.
fn parse_octet(segment: &str) -> Option<u8> {
    let bytes = segment.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(segment, 16).ok()
}

impl FromStr for OuiPrefix {
    type Err = OuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_address(s)
    }
}

impl fmt::Display for OuiPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}")
    }
}
