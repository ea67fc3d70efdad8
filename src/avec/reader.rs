//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::{ErrorKind, Read};

use thiserror::Error;

use crate::sans::MAX_PAYLOAD;

use super::{FrameDecoder, FromFrames};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Decode frames from a reader until it is exhausted, publishing to a
/// receiver.
///
/// Returns the number of frames published.
///
/// This method is also re-exported as `stxframe::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read, o: &mut impl FromFrames) -> Result<usize, Error> {
    FrameDecoder::<MAX_PAYLOAD>::default().decode_reader(r, o)
}

impl<const N: usize> FrameDecoder<N> {
    /// Consume every byte of a reader until it is exhausted, publishing to a
    /// receiver.
    ///
    /// Reads are interleaved with decoding, so a blocking reader such as a
    /// serial port publishes frames as soon as their last byte arrives.
    ///
    /// Returns the number of frames published.
    ///
    /// _Requires Cargo feature `std`._
    pub fn decode_reader(
        &mut self,
        r: &mut impl Read,
        o: &mut impl FromFrames,
    ) -> Result<usize, Error> {
        let mut buf = [0; 64];
        let mut frames = 0;

        loop {
            let n = match r.read(&mut buf) {
                Ok(0) => return Ok(frames),
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => Err(err)?,
            };

            frames += self.decode_slice(&buf[..n], o);
        }
    }
}
