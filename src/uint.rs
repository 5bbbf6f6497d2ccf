use crate::base64::{decode, PADDED, UNPADDED};
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const UINT_LEN: usize = 8;

/// Byte order used to serialize a `u64` before encoding.
///
/// Big-endian values sort numerically once encoded; little-endian values round-trip but do not.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    #[default]
    Big,
    Little,
}

impl Endianness {
    pub const fn to_bytes(self, value: u64) -> [u8; UINT_LEN] {
        match self {
            Endianness::Big => value.to_be_bytes(),
            Endianness::Little => value.to_le_bytes(),
        }
    }

    pub const fn from_bytes(self, bytes: [u8; UINT_LEN]) -> u64 {
        match self {
            Endianness::Big => u64::from_be_bytes(bytes),
            Endianness::Little => u64::from_le_bytes(bytes),
        }
    }
}

impl FromStr for Endianness {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "big" => Ok(Endianness::Big),
            "little" => Ok(Endianness::Little),
            _ => Err(ParseError::new(value, "big or little")),
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Big => write!(f, "big"),
            Endianness::Little => write!(f, "little"),
        }
    }
}

pub fn encode_uint(value: u64, endianness: Endianness) -> String {
    PADDED.encode_uint(value, endianness)
}

pub fn decode_uint(input: impl AsRef<[u8]>, endianness: Endianness) -> Result<u64, decode::Error> {
    PADDED.decode_uint(input, endianness)
}

pub fn encode_uint_no_pad(value: u64, endianness: Endianness) -> String {
    UNPADDED.encode_uint(value, endianness)
}

pub fn decode_uint_no_pad(input: impl AsRef<[u8]>, endianness: Endianness) -> Result<u64, decode::Error> {
    UNPADDED.decode_uint(input, endianness)
}
