//! States processing the checksum and end marker closing a frame.

use thiserror::Error;

use super::header::{AwaitStart, Marker};

/// State token to receive a checksum byte.
#[derive(Debug)]
pub struct AwaitChecksum<const N: usize> {
    pub(super) length: u8,
    pub(super) calculated: u8,
}

impl<const N: usize> AwaitChecksum<N> {
    /// Transition to another state by receiving a checksum byte.
    ///
    /// The checksum is only compared once the end marker arrives.
    ///
    /// Returns a successor state token.
    pub fn advance(self, r: [u8; 1]) -> AwaitEnd<N> {
        AwaitEnd {
            length: self.length,
            calculated: self.calculated,
            found: r[0],
        }
    }

    /// Checksum calculated over the payload.
    pub fn calculated(&self) -> u8 {
        self.calculated
    }
}

/// An error advancing over the end of a frame.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrailerError {
    /// Final byte was not an end marker.
    #[error("Incorrect end marker ({0:#04x}).")]
    EndMarker(u8),
    /// Calculated and found checksums do not match.
    #[error("Calculated ({calculated:#04x}) and found ({found:#04x}) checksums do not match.")]
    ChecksumMismatch { found: u8, calculated: u8 },
}

/// State token to receive an end marker.
#[derive(Debug)]
pub struct AwaitEnd<const N: usize> {
    pub(super) length: u8,
    pub(super) calculated: u8,
    pub(super) found: u8,
}

impl<const N: usize> AwaitEnd<N> {
    /// Transition to another state by receiving an end marker and comparing
    /// checksums.
    ///
    /// Returns the length of the now complete payload, and a successor state
    /// token. Whatever the outcome, the byte is consumed: on error it is not
    /// scanned again as a possible start marker.
    pub fn advance(self, r: [u8; 1]) -> Result<(u8, AwaitStart<N>), TrailerError> {
        if Marker::from_byte(r[0]) != Some(Marker::End) {
            Err(TrailerError::EndMarker(r[0]))?;
        }

        let Self {
            length,
            calculated,
            found,
        } = self;

        if found != calculated {
            Err(TrailerError::ChecksumMismatch { found, calculated })?;
        }

        Ok((length, AwaitStart))
    }
}
