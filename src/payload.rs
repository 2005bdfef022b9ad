use std::fmt;
use std::sync::Arc;
use thiserror::Error;

pub const DEFAULT_PAYLOAD: [u8; 2] = [0x00, 0x01];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payload(Arc<[u8]>);

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Source {
    Text(String),
    Hex(String),
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum DecodeError {
    #[error("the binary string cannot have an odd number of digits: {0}")]
    OddLength(String),
    #[error("invalid hex digit {digit:?} at position {index} in {input}")]
    InvalidDigit { input: String, digit: char, index: usize },
}

impl Payload {
    pub fn new(bytes: &[u8]) -> Self {
        Self(Arc::from(bytes))
    }

    // Last source wins, but every source must decode.
    pub fn resolve<I>(default: &Payload, sources: I) -> Result<Payload, DecodeError>
    where
        I: IntoIterator<Item = Source>,
    {
        sources.into_iter().try_fold(default.clone(), |_, source| {
            match source {
                Source::Text(text) => Ok(Payload::new(text.trim().as_bytes())),
                Source::Hex(hex)   => decode(hex.trim()).map(|b| Payload::new(&b)),
            }
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Default for Payload {
    fn default() -> Self {
        Self::new(&DEFAULT_PAYLOAD)
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        self.bytes()
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{:02X}", b))
    }
}

pub fn decode(hex: &str) -> Result<Vec<u8>, DecodeError> {
    let invalid = |index: usize, digit: char| DecodeError::InvalidDigit {
        input: hex.to_owned(),
        digit: digit,
        index: index,
    };

    let nibbles = hex.char_indices().map(|(index, c)| {
        c.to_digit(16).map(|n| n as u8).ok_or_else(|| invalid(index, c))
    }).collect::<Result<Vec<u8>, _>>()?;

    if nibbles.len() % 2 != 0 {
        return Err(DecodeError::OddLength(hex.to_owned()));
    }

    Ok(nibbles.chunks(2).map(|pair| pair[0] << 4 | pair[1]).collect())
}
