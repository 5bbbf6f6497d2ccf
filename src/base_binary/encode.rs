use super::{block_len, Alphabet, Padding, PAD};
use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Output buffer too small")]
    BufferTooSmall,
}

const fn div_ceil(lhs: usize, rhs: usize) -> usize {
    (lhs + rhs - 1) / rhs
}

#[derive(Debug)]
pub struct Encoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    bits: usize,
    padding: Padding,
}

impl<'a, const N: usize> Encoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>, bits: usize, padding: Padding) -> Self {
        assert!(alphabet.len() == (1 << bits));
        assert!(!alphabet.contains(PAD));
        Self { alphabet, bits, padding }
    }

    pub const fn padding(&self) -> Padding {
        self.padding
    }

    pub const fn encoded_len(&self, len: usize) -> usize {
        let symbols = div_ceil(len * 8, self.bits);
        if self.padding.is_padded() {
            let block = block_len(self.bits);
            div_ceil(symbols, block) * block
        } else {
            symbols
        }
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        if output.len() < self.encoded_len(input.len()) {
            return Err(Error::BufferTooSmall);
        }
        Ok(self.write(input, output))
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = vec![0u8; self.encoded_len(input.len())];
        let len = self.write(input, &mut output);
        output.truncate(len);
        // SAFETY: the alphabet and the pad character are ASCII.
        unsafe { String::from_utf8_unchecked(output) }
    }

    // `output` must hold at least `encoded_len(input.len())` bytes.
    fn write(&self, input: &[u8], output: &mut [u8]) -> usize {
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut index = 0;
        for &value in input {
            accumulator = (accumulator << 8) | (value as usize);
            bits += 8;
            while bits >= self.bits {
                bits -= self.bits;
                output[index] = self.alphabet.encode(accumulator >> bits);
                index += 1;
                accumulator &= (1 << bits) - 1;
            }
        }
        if bits > 0 {
            output[index] = self.alphabet.encode(accumulator << (self.bits - bits));
            index += 1;
        }
        if self.padding.is_padded() {
            while (index * self.bits) % 8 != 0 {
                output[index] = PAD;
                index += 1;
            }
        }
        index
    }
}
