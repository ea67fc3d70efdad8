//! Byte-at-a-time decoder with a fixed-capacity payload buffer.

use core::mem;

use either::Either::{Left, Right};
use thiserror::Error;

use crate::sans::{
    AnyState, MAX_PAYLOAD, Phase,
    header::{AwaitStart, LengthError},
    trailer::TrailerError,
};

/// Reasons a frame in progress was discarded.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Declared length does not fit the payload buffer.
    #[error("Rejected length field: {0}")]
    Length(#[from] LengthError),
    /// Final byte was not an end marker.
    #[error("Incorrect end marker ({0:#04x}).")]
    EndMarker(u8),
    /// Calculated and found checksums do not match.
    #[error("Calculated ({calculated:#04x}) and found ({found:#04x}) checksums do not match.")]
    ChecksumMismatch { found: u8, calculated: u8 },
}

impl From<TrailerError> for Error {
    fn from(err: TrailerError) -> Self {
        match err {
            TrailerError::EndMarker(b) => Self::EndMarker(b),
            TrailerError::ChecksumMismatch { found, calculated } => {
                Self::ChecksumMismatch { found, calculated }
            }
        }
    }
}

/// Running counters kept by a [`FrameDecoder`].
///
/// Counters wrap around on overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Frames validated and delivered.
    pub frames: usize,
    /// Bytes skipped while scanning for a start marker.
    pub discarded: usize,
    /// Frames dropped for declaring too long a payload.
    pub out_of_range: usize,
    /// Frames dropped for a wrong end marker.
    pub bad_end_markers: usize,
    /// Frames dropped for a checksum mismatch.
    pub checksum_mismatches: usize,
}

impl Stats {
    fn record(&mut self, err: &Error) {
        let counter = match err {
            Error::Length(_) => &mut self.out_of_range,
            Error::EndMarker(_) => &mut self.bad_end_markers,
            Error::ChecksumMismatch { .. } => &mut self.checksum_mismatches,
        };

        *counter = counter.wrapping_add(1);
    }
}

/// An online frame decoder holding at most `N` payload bytes.
///
/// Never allocates. Each call to [`FrameDecoder::consume`] runs in constant
/// time.
#[derive(Debug)]
pub struct FrameDecoder<const N: usize = MAX_PAYLOAD> {
    state: AnyState<N>,
    buffer: [u8; N],
    len: usize,
    stats: Stats,
}

impl FrameDecoder {
    /// Create a decoder with the default capacity of [`MAX_PAYLOAD`] bytes.
    ///
    /// Use [`Default`] to pick another capacity.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<const N: usize> Default for FrameDecoder<N> {
    fn default() -> Self {
        Self {
            state: AnyState::default(),
            buffer: [0; N],
            len: 0,
            stats: Stats::default(),
        }
    }
}

impl<const N: usize> FrameDecoder<N> {
    /// Consume the next byte of the stream.
    ///
    /// Returns whether this byte completed a valid frame, in which case its
    /// content is available from [`FrameDecoder::payload`] until the next byte
    /// is consumed.
    pub fn consume(&mut self, byte: u8) -> bool {
        matches!(self.try_consume(byte), Ok(Some(_)))
    }

    /// Consume the next byte of the stream, reporting why a frame was dropped.
    ///
    /// Returns the payload if this byte completed a valid frame. An error means
    /// the frame in progress was discarded; the decoder has already returned to
    /// scanning for a start marker and may be fed again immediately.
    pub fn try_consume(&mut self, byte: u8) -> Result<Option<&[u8]>, Error> {
        let state = mem::take(&mut self.state);

        match self.step(state, byte) {
            Ok((state, complete)) => {
                self.state = state;

                if complete {
                    self.stats.frames = self.stats.frames.wrapping_add(1);
                    log::trace!("accepted frame of {} bytes", self.len);
                    Ok(Some(self.payload()))
                } else {
                    Ok(None)
                }
            }
            Err(err) => {
                self.stats.record(&err);
                log::debug!("discarded frame: {err}");
                Err(err)
            }
        }
    }

    /// Advance `state` over one byte, storing any payload byte.
    ///
    /// Returns the successor state, and whether it closed a valid frame. On
    /// error the successor is implicitly the initial state.
    fn step(&mut self, state: AnyState<N>, byte: u8) -> Result<(AnyState<N>, bool), Error> {
        let r = [byte];

        let successor = match state {
            AnyState::AwaitStart(state) => match state.advance(r) {
                Left(state) => {
                    self.len = 0;
                    AnyState::AwaitLength(state)
                }
                Right(state) => {
                    self.stats.discarded = self.stats.discarded.wrapping_add(1);
                    AnyState::AwaitStart(state)
                }
            },
            AnyState::AwaitLength(state) => match state.advance(r)?.1 {
                Left(state) => AnyState::AccumulatingPayload(state),
                Right(state) => AnyState::AwaitChecksum(state),
            },
            AnyState::AccumulatingPayload(state) => {
                let (offset, successor) = state.advance(r);

                self.buffer[offset] = byte;
                self.len = offset + 1;

                match successor {
                    Left(state) => AnyState::AccumulatingPayload(state),
                    Right(state) => AnyState::AwaitChecksum(state),
                }
            }
            AnyState::AwaitChecksum(state) => AnyState::AwaitEnd(state.advance(r)),
            AnyState::AwaitEnd(state) => {
                let (length, state) = state.advance(r)?;
                debug_assert_eq!(usize::from(length), self.len);
                return Ok((AnyState::AwaitStart(state), true));
            }
        };

        Ok((successor, false))
    }

    /// Payload of the frame in progress, or of the frame just completed.
    ///
    /// After a discarded frame, this still holds that frame's bytes until the
    /// next start marker or [`FrameDecoder::reset`].
    pub fn payload(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    /// The current state of the decoder.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Largest payload this decoder accepts.
    pub fn capacity(&self) -> usize {
        N
    }

    /// Counters accumulated since creation.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Abandon any frame in progress and scan for a start marker.
    ///
    /// Counters are kept.
    pub fn reset(&mut self) {
        self.state = AnyState::AwaitStart(AwaitStart);
        self.len = 0;
    }
}
