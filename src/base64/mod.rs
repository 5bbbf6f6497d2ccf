mod codec;
pub mod decode;
pub mod encode;

pub use crate::base_binary::{Padding, PAD};
pub use crate::base_common::Alphabet;

/// The URL-safe base64 characters sorted by ASCII code point. Each symbol's index equals its rank,
/// so byte-wise comparison of encoded text follows byte-wise comparison of the input.
pub const ALPHABET: Alphabet<64> = match Alphabet::new_ordered(b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub use codec::{Codec, PADDED, UNPADDED};
pub use decode::{decode, decode_into, decode_no_pad, decode_no_pad_into, Decoder};
pub use encode::{encode, encode_into, encode_no_pad, encode_no_pad_into, Encoder};
