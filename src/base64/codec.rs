use super::{decode, encode, Alphabet, Decoder, Encoder, Padding, ALPHABET};
use crate::uint::{Endianness, UINT_LEN};

/// An alphabet bound to a padding mode.
#[derive(Debug)]
pub struct Codec<'a> {
    encoder: Encoder<'a>,
    decoder: Decoder<'a>,
}

pub static PADDED: Codec<'static> = Codec::new(&ALPHABET, Padding::Padded);
pub static UNPADDED: Codec<'static> = Codec::new(&ALPHABET, Padding::Unpadded);

impl<'a> Codec<'a> {
    pub const fn new(alphabet: &'a Alphabet<64>, padding: Padding) -> Self {
        Self {
            encoder: Encoder::new(alphabet, padding),
            decoder: Decoder::new(alphabet, padding),
        }
    }

    pub fn with_padding(padding: Padding) -> &'static Codec<'static> {
        match padding {
            Padding::Padded => &PADDED,
            Padding::Unpadded => &UNPADDED,
        }
    }

    pub const fn padding(&self) -> Padding {
        self.encoder.padding()
    }

    pub const fn encoded_len(&self, len: usize) -> usize {
        self.encoder.encoded_len(len)
    }

    pub const fn decoded_len(&self, len: usize) -> usize {
        self.decoder.decoded_len(len)
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, encode::Error> {
        self.encoder.encode_into(input, output)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder.encode(input)
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, decode::Error> {
        self.decoder.decode_into(input, output)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, decode::Error> {
        self.decoder.decode(input)
    }

    /// Encodes `value` as 8 bytes in the given byte order. Only [`Endianness::Big`] keeps the
    /// numeric order of the values in the byte-wise order of the encoded text.
    pub fn encode_uint(&self, value: u64, endianness: Endianness) -> String {
        self.encode(endianness.to_bytes(value))
    }

    /// Inverse of [`Codec::encode_uint`]. Fails with [`decode::Error::InvalidLength`] unless the
    /// input decodes to exactly 8 bytes.
    pub fn decode_uint(&self, input: impl AsRef<[u8]>, endianness: Endianness) -> Result<u64, decode::Error> {
        let input = input.as_ref();
        let invalid_length = decode::Error::InvalidLength { length: input.len() };
        if input.len() != self.encoded_len(UINT_LEN) {
            return Err(invalid_length);
        }
        let mut bytes = [0u8; UINT_LEN];
        let len = self.decode_into(input, &mut bytes).map_err(|error| match error {
            decode::Error::BufferTooSmall => invalid_length,
            error => error,
        })?;
        if len != UINT_LEN {
            return Err(invalid_length);
        }
        Ok(endianness.from_bytes(bytes))
    }
}
