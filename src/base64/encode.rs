use super::{Alphabet, Padding, ALPHABET};
pub use crate::base_binary::encode::Error;

#[derive(Debug)]
pub struct Encoder<'a> {
    encoder: crate::base_binary::Encoder<'a, 64>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<64>, padding: Padding) -> Self {
        Self {
            encoder: crate::base_binary::Encoder::new(alphabet, 6, padding),
        }
    }

    pub const fn padding(&self) -> Padding {
        self.encoder.padding()
    }

    pub const fn encoded_len(&self, len: usize) -> usize {
        self.encoder.encoded_len(len)
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.encoder.encode_into(input, output)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder.encode(input)
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }

    pub fn no_pad() -> &'static Self {
        &ENCODER_NO_PAD
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET, Padding::Padded);
const ENCODER_NO_PAD: Encoder = Encoder::new(&ALPHABET, Padding::Unpadded);

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_no_pad_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::no_pad().encode_into(input, output)
}

pub fn encode_no_pad(input: impl AsRef<[u8]>) -> String {
    Encoder::no_pad().encode(input)
}
