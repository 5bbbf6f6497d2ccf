use super::{block_len, is_valid_remainder, max_padding, Alphabet, Padding, PAD};
use crate::base_common::alphabet;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Output buffer too small")]
    BufferTooSmall,
    #[error("Invalid character '{}' at index {index}", .character.escape_ascii())]
    InvalidCharacter { character: u8, index: usize },
    #[error("Invalid length {length}")]
    InvalidLength { length: usize },
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
        }
    }
}

#[derive(Debug)]
pub struct Decoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    bits: usize,
    padding: Padding,
}

impl<'a, const N: usize> Decoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>, bits: usize, padding: Padding) -> Self {
        assert!(alphabet.len() == (1 << bits));
        assert!(!alphabet.contains(PAD));
        Self { alphabet, bits, padding }
    }

    pub const fn padding(&self) -> Padding {
        self.padding
    }

    /// Upper bound on the number of bytes decoded from `len` symbols.
    pub const fn decoded_len(&self, len: usize) -> usize {
        (len * self.bits) / 8
    }

    // Checks the length rules of the padding mode and strips trailing pad characters. A pad character
    // left in the payload is reported as an invalid character when the payload is decoded.
    fn payload<'b>(&self, input: &'b [u8]) -> Result<&'b [u8], Error> {
        let block = block_len(self.bits);
        let mut payload = input;
        if self.padding.is_padded() {
            if input.len() % block != 0 {
                return Err(Error::InvalidLength { length: input.len() });
            }
            let mut stripped = 0;
            while stripped < max_padding(self.bits) && payload.last() == Some(&PAD) {
                payload = &payload[..payload.len() - 1];
                stripped += 1;
            }
        }
        if !is_valid_remainder(payload.len() % block, self.bits) {
            return Err(Error::InvalidLength { length: input.len() });
        }
        Ok(payload)
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let payload = self.payload(input.as_ref())?;
        let output = output.as_mut();
        if output.len() < self.decoded_len(payload.len()) {
            return Err(Error::BufferTooSmall);
        }
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut output_index = 0;
        for (input_index, &value) in payload.iter().enumerate() {
            let byte = self.alphabet.decode(value, input_index)?;
            accumulator = (accumulator << self.bits) | (byte as usize);
            bits += self.bits;
            if bits >= 8 {
                bits -= 8;
                output[output_index] = (accumulator >> bits) as u8;
                output_index += 1;
                accumulator &= (1 << bits) - 1;
            }
        }
        // Leftover bits of the last symbol are zero in canonical encodings and are ignored otherwise.
        Ok(output_index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let mut output = vec![0u8; self.decoded_len(input.len())];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }
}
