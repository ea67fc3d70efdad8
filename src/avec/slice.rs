//! Slice-based decoder implementation.

use crate::sans::MAX_PAYLOAD;

use super::{FrameDecoder, FromFrames};

/// Decode frames from a slice of a stream, publishing to a receiver.
///
/// Uses a fresh decoder of the default capacity, so a frame cut off at the end
/// of the slice is lost. Use [`FrameDecoder::decode_slice`] to carry a frame in
/// progress across slices.
///
/// Returns the number of frames published.
///
/// This method is also re-exported as `stxframe::avec::decode_slice`.
pub fn decode(r: &[u8], o: &mut impl FromFrames) -> usize {
    FrameDecoder::<MAX_PAYLOAD>::default().decode_slice(r, o)
}

impl<const N: usize> FrameDecoder<N> {
    /// Consume every byte of a slice, publishing to a receiver.
    ///
    /// Returns the number of frames published.
    pub fn decode_slice(&mut self, r: &[u8], o: &mut impl FromFrames) -> usize {
        let mut frames = 0;

        for &byte in r {
            match self.try_consume(byte) {
                Ok(Some(payload)) => {
                    o.add_frame(payload);
                    frames += 1;
                }
                Ok(None) => {}
                Err(err) => o.add_rejection(err),
            }
        }

        frames
    }
}
