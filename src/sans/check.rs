//! Helper for computing frame checksums.

/// Accumulate a slice of bytes into a checksum value.
pub fn compute_checksum(init: u8, r: &[u8]) -> u8 {
    r.iter().fold(init, |acc, b| checksum_byte(acc, *b))
}

/// Accumulate a single byte into a checksum value.
pub fn checksum_byte(acc: u8, b: u8) -> u8 {
    acc ^ b
}
