//! Convenience interfaces for common decoding patterns.
//!
//! [`FrameDecoder`] owns the state machine together with a fixed-capacity
//! payload buffer, and is fed one byte at a time. The functions in this module
//! drive a decoder over whole slices and readers, publishing to the
//! [`FromFrames`] trait.

pub mod decoder;
#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

pub use decoder::{Error, FrameDecoder, Stats};
#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

/// Receive the outcome of each frame found in a stream.
///
/// The default implementation of [`FromFrames::add_rejection`] ignores
/// discarded frames.
#[allow(unused_variables)]
pub trait FromFrames {
    /// Add the payload of a validated frame.
    ///
    /// The slice borrows the decoder's buffer; copy out any bytes that need to
    /// outlive this call.
    fn add_frame(&mut self, payload: &[u8]);
    /// Note that a frame in progress was discarded.
    fn add_rejection(&mut self, error: Error) {}
}
