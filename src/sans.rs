//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that need fine control over where
//! payload bytes are stored. See [`crate::avec`] for a decoder owning its own
//! fixed-capacity buffer.
//!
//! # Architecture
//!
//! All states are represented by a non-copy token. Transition to another state
//! by calling the token's `advance` method with the next byte of the stream.
//! This will return a successor state token, along with any extracted data.
//!
//! Every token carries the payload capacity `N` as a const parameter. A length
//! field above `N` is rejected before any payload byte is accepted, so the
//! offsets returned by [`payload::AccumulatingPayload::advance`] always lie
//! within a buffer of `N` bytes.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed. Whenever an `advance` method returns an error, the frame in
//! progress is abandoned and decoding resumes from a fresh initial state with
//! the following byte.
//!
//! Storing payload bytes at the offsets handed out by the finite-state machine
//! is left to the implementation.

use self::{
    header::{AwaitLength, AwaitStart, Marker},
    payload::AccumulatingPayload,
    trailer::{AwaitChecksum, AwaitEnd},
};

pub mod check;
pub mod header;
pub mod payload;
pub mod trailer;

/// Default payload capacity, in bytes.
pub const MAX_PAYLOAD: usize = 10;

/// Byte opening every frame.
pub const START_MARKER: u8 = Marker::Start as u8;

/// Byte closing every frame.
pub const END_MARKER: u8 = Marker::End as u8;

/// Entrypoint to the finite-state machine.
pub type Decoder<const N: usize = MAX_PAYLOAD> = AwaitStart<N>;

/// Any state token, for drivers holding the current state in a single place.
#[derive(Debug)]
pub enum AnyState<const N: usize = MAX_PAYLOAD> {
    AwaitStart(AwaitStart<N>),
    AwaitLength(AwaitLength<N>),
    AccumulatingPayload(AccumulatingPayload<N>),
    AwaitChecksum(AwaitChecksum<N>),
    AwaitEnd(AwaitEnd<N>),
}

impl<const N: usize> AnyState<N> {
    /// The phase this state token represents.
    pub fn phase(&self) -> Phase {
        match self {
            Self::AwaitStart(_) => Phase::AwaitStart,
            Self::AwaitLength(_) => Phase::AwaitLength,
            Self::AccumulatingPayload(_) => Phase::AccumulatingPayload,
            Self::AwaitChecksum(_) => Phase::AwaitChecksum,
            Self::AwaitEnd(_) => Phase::AwaitEnd,
        }
    }
}

impl<const N: usize> Default for AnyState<N> {
    fn default() -> Self {
        Self::AwaitStart(AwaitStart)
    }
}

/// Observable name of a decoder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Scanning for a start marker.
    AwaitStart,
    /// Expecting the length field.
    AwaitLength,
    /// Receiving payload bytes.
    AccumulatingPayload,
    /// Expecting the checksum byte.
    AwaitChecksum,
    /// Expecting the end marker.
    AwaitEnd,
}
