//! States processing payload bytes.

use either::Either::{self, Left, Right};

use super::{check::checksum_byte, trailer::AwaitChecksum};

/// State token to receive a payload byte.
#[derive(Debug)]
pub struct AccumulatingPayload<const N: usize> {
    pub(super) declared: u8,
    pub(super) received: u8,
    pub(super) calculated: u8,
}

impl<const N: usize> AccumulatingPayload<N> {
    /// Transition to another state by receiving a payload byte.
    ///
    /// Returns the offset at which the byte belongs in the payload, and a
    /// successor state token. The offset is always below both the declared
    /// length and `N`.
    pub fn advance(self, r: [u8; 1]) -> (usize, Either<Self, AwaitChecksum<N>>) {
        let offset = usize::from(self.received);
        let received = self.received + 1;
        let calculated = checksum_byte(self.calculated, r[0]);

        let successor = if received == self.declared {
            Right(AwaitChecksum {
                length: received,
                calculated,
            })
        } else {
            Left(Self {
                declared: self.declared,
                received,
                calculated,
            })
        };

        (offset, successor)
    }

    /// Payload length announced by the length field.
    pub fn declared(&self) -> u8 {
        self.declared
    }

    /// Payload bytes received so far.
    pub fn received(&self) -> u8 {
        self.received
    }
}
