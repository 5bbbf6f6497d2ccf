use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Duplicate character '{character}' at indexes {first} and {second}")]
    DuplicateCharacter { character: char, first: usize, second: usize },
    #[error("Non-ascii character {character:#04x} at index {index}")]
    NonAsciiCharacter { character: u8, index: usize },
    #[error("Character '{character}' at index {index} does not sort after '{previous}'")]
    NotAscending { character: char, previous: char, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum DecodeError {
    #[error("Invalid character '{}' at index {index}", .character.escape_ascii())]
    InvalidCharacter { character: u8, index: usize },
}

/// A set of `N` distinct ASCII symbols together with its inverse lookup table.
#[derive(Debug)]
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, value: u8, index: usize) -> Result<u8, DecodeError> {
        if value >= 128 {
            return Err(DecodeError::InvalidCharacter { character: value, index });
        }
        self.decode[value as usize].ok_or(DecodeError::InvalidCharacter { character: value, index })
    }

    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        Self::build(characters, false)
    }

    /// Like [`Alphabet::new`], but also requires the characters to be in strictly ascending
    /// byte order, so that comparing encoded text byte-wise compares the encoded values.
    pub const fn new_ordered(characters: &[u8; N]) -> Result<Self, Error> {
        Self::build(characters, true)
    }

    const fn build(characters: &[u8; N], ordered: bool) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(v) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: v as usize,
                    second: index,
                });
            }
            if ordered && index > 0 && characters[index - 1] >= character {
                return Err(Error::NotAscending {
                    character: character as char,
                    previous: characters[index - 1] as char,
                    index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    pub const fn len(&self) -> usize {
        self.encode.len()
    }

    pub const fn contains(&self, character: u8) -> bool {
        character < 128 && self.decode[character as usize].is_some()
    }

    pub const fn is_ordered(&self) -> bool {
        let mut index = 1;
        while index < N {
            if self.encode[index - 1] >= self.encode[index] {
                return false;
            }
            index += 1;
        }
        true
    }
}
