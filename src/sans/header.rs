//! States locating the start of a frame and its declared length.

use either::Either::{self, Left, Right};
use thiserror::Error;

use super::{payload::AccumulatingPayload, trailer::AwaitChecksum};

/// A sentinel byte delimiting frames.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Start of text.
    Start = 0x02,
    /// End of text.
    End = 0x03,
}

impl Marker {
    /// Recognize a sentinel byte, if it is one.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0x02 => Some(Self::Start),
            0x03 => Some(Self::End),
            _ => None,
        }
    }
}

/// State token to scan for a start marker.
///
/// Any other byte is discarded, leaving the scan in place.
#[derive(Debug)]
pub struct AwaitStart<const N: usize>;

impl<const N: usize> AwaitStart<N> {
    /// Transition to another state by scanning a byte for a start marker.
    ///
    /// Returns a successor state token, which is this same token if the byte
    /// was not a start marker.
    pub fn advance(self, r: [u8; 1]) -> Either<AwaitLength<N>, Self> {
        match Marker::from_byte(r[0]) {
            Some(Marker::Start) => Left(AwaitLength(())),
            _ => Right(self),
        }
    }
}

impl<const N: usize> Default for AwaitStart<N> {
    fn default() -> Self {
        AwaitStart
    }
}

/// An error advancing over a length field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LengthError {
    /// Declared length does not fit the payload buffer.
    #[error("Declared length ({found}) exceeds capacity ({capacity}).")]
    OutOfRange { found: u8, capacity: usize },
}

/// State token to decode a length field.
#[derive(Debug)]
pub struct AwaitLength<const N: usize>(pub(super) ());

impl<const N: usize> AwaitLength<N> {
    /// Transition to another state by decoding a length field.
    ///
    /// Returns the declared payload length, and a successor state token. Empty
    /// frames skip straight to the checksum.
    pub fn advance(
        self,
        r: [u8; 1],
    ) -> Result<(u8, Either<AccumulatingPayload<N>, AwaitChecksum<N>>), LengthError> {
        let length = r[0];

        if usize::from(length) > N {
            Err(LengthError::OutOfRange {
                found: length,
                capacity: N,
            })?;
        }

        let successor = if length != 0 {
            Left(AccumulatingPayload {
                declared: length,
                received: 0,
                calculated: 0,
            })
        } else {
            Right(AwaitChecksum {
                length: 0,
                calculated: 0,
            })
        };

        Ok((length, successor))
    }
}
