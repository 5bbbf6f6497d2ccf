//! Order-preserving base64.
//!
//! Bytes are encoded with the URL-safe base64 characters sorted by ASCII code point
//! (`-0-9A-Z_a-z`), so sorting encoded strings byte-wise sorts the inputs byte-wise.
//!
//! ```
//! let mut encoded = vec![ordered_base64::encode_no_pad("b"), ordered_base64::encode_no_pad("a")];
//! encoded.sort();
//! assert_eq!(ordered_base64::decode_no_pad(&encoded[0]).unwrap(), b"a");
//! ```
//!
//! The unpadded variants preserve order for all inputs. The padded variants preserve it unless one
//! input is a proper prefix of the other, because the pad character `=` sorts after `-` and the digits.

pub mod base64;
pub mod base_binary;
pub mod base_common;
pub mod configuration;
pub mod error;
pub mod probe;
pub mod uint;

pub use self::{
    base64::{decode, decode_no_pad, encode, encode_no_pad, Codec, Padding, ALPHABET, PADDED, PAD, UNPADDED},
    configuration::Configuration,
    error::{DecodeError, Error},
    probe::PathState,
    uint::{decode_uint, decode_uint_no_pad, encode_uint, encode_uint_no_pad, Endianness},
};
