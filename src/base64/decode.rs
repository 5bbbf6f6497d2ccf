use super::{Alphabet, Padding, ALPHABET};
pub use crate::base_binary::decode::Error;

#[derive(Debug)]
pub struct Decoder<'a> {
    decoder: crate::base_binary::Decoder<'a, 64>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<64>, padding: Padding) -> Self {
        Self {
            decoder: crate::base_binary::Decoder::new(alphabet, 6, padding),
        }
    }

    pub const fn padding(&self) -> Padding {
        self.decoder.padding()
    }

    pub const fn decoded_len(&self, len: usize) -> usize {
        self.decoder.decoded_len(len)
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.decoder.decode_into(input, output)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        self.decoder.decode(input)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }

    pub fn no_pad() -> &'static Self {
        &DECODER_NO_PAD
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET, Padding::Padded);
const DECODER_NO_PAD: Decoder = Decoder::new(&ALPHABET, Padding::Unpadded);

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_no_pad_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::no_pad().decode_into(input, output)
}

pub fn decode_no_pad(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::no_pad().decode(input)
}
