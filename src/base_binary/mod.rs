pub mod decode;
pub mod encode;

pub use crate::base_common::Alphabet;
pub use decode::Decoder;
pub use encode::Encoder;

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const PAD: u8 = b'=';

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    #[default]
    Padded,
    Unpadded,
}

impl Padding {
    pub const fn is_padded(self) -> bool {
        matches!(self, Padding::Padded)
    }
}

impl FromStr for Padding {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "padded" => Ok(Padding::Padded),
            "unpadded" => Ok(Padding::Unpadded),
            _ => Err(ParseError::new(value, "padded or unpadded")),
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Padding::Padded => write!(f, "padded"),
            Padding::Unpadded => write!(f, "unpadded"),
        }
    }
}

const fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

// Number of symbols that encode a whole number of bytes.
pub(crate) const fn block_len(bits: usize) -> usize {
    8 / gcd(bits, 8)
}

// A trailing group of `remainder` symbols is valid when its last symbol carries at least one data bit.
pub(crate) const fn is_valid_remainder(remainder: usize, bits: usize) -> bool {
    remainder == 0 || (remainder * bits) % 8 < bits
}

pub(crate) const fn max_padding(bits: usize) -> usize {
    let block = block_len(bits);
    let mut remainder = 1;
    while remainder < block {
        if is_valid_remainder(remainder, bits) {
            return block - remainder;
        }
        remainder += 1;
    }
    0
}
