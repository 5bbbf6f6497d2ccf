use crate::{
    base64::{Codec, Padding},
    error::{Error, ParseError},
    uint::Endianness,
};
use serde::{Deserialize, Serialize};
use std::{env, str::FromStr};
use tracing::debug;

pub const PADDING_VAR: &str = "ORDERED_BASE64_PADDING";
pub const ENDIANNESS_VAR: &str = "ORDERED_BASE64_ENDIANNESS";

/// Padding mode and integer byte order used by the codec entry points on this type.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    padding: Padding,
    endianness: Endianness,
}

fn var_map<T: FromStr<Err = ParseError>>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, Error> {
    match lookup(key) {
        Some(value) => value.parse().map_err(|source| Error::InvalidVariable { key, source }),
        None => Ok(default),
    }
}

impl Configuration {
    pub fn new(padding: Padding, endianness: Endianness) -> Self {
        Self { padding, endianness }
    }

    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves the configuration from `lookup`, which maps a variable name to its value.
    /// Missing variables take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let padding = var_map(&lookup, PADDING_VAR, Padding::default())?;
        let endianness = var_map(&lookup, ENDIANNESS_VAR, Endianness::default())?;
        debug!(%padding, %endianness, "loaded configuration");
        Ok(Self { padding, endianness })
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn codec(&self) -> &'static Codec<'static> {
        Codec::with_padding(self.padding)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.codec().encode(input)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        Ok(self.codec().decode(input)?)
    }

    pub fn encode_uint(&self, value: u64) -> String {
        self.codec().encode_uint(value, self.endianness)
    }

    pub fn decode_uint(&self, input: impl AsRef<[u8]>) -> Result<u64, Error> {
        Ok(self.codec().decode_uint(input, self.endianness)?)
    }
}
