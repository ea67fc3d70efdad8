#![no_std]

//! An allocation-free, byte-at-a-time decoder for STX/ETX framed serial
//! messages.
//!
//! Each frame on the wire is laid out as:
//!
//! ```text
//! [STX=0x02] [LEN] [LEN payload bytes] [CHK] [ETX=0x03]
//! ```
//!
//! where `CHK` is the XOR of all payload bytes. Malformed frames are dropped
//! and the decoder resynchronizes on the next start marker.
//!
//! Most users should begin with [`avec::FrameDecoder`], which is fed one byte
//! at a time and reports completed payloads. The underlying finite-state
//! machine is exposed in the [`sans`] module for applications needing finer
//! control over buffering.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

pub mod avec;
pub mod sans;
