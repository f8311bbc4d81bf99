use std::io;

use thiserror::Error;

use crate::constants::{RECORD_FOOTER_LEN, RECORD_HEADER_LEN};

/// Canonical record header (fixed size).
///
/// All fields are little-endian. `length_crc` is the masked CRC-32C of the
/// 8 length bytes, stored as read from the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub length: u64,
    pub length_crc: u32,
}

impl RecordHeader {
    pub const LEN: usize = RECORD_HEADER_LEN;

    /// Bytes occupied on the wire by a record carrying this header.
    #[inline]
    pub fn framed_len(&self) -> u64 {
        RECORD_HEADER_LEN as u64 + self.length + RECORD_FOOTER_LEN as u64
    }
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("truncated record")]
    Truncated,

    #[error("length checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    CorruptLength { expected: u32, actual: u32 },

    #[error("data checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    CorruptData { expected: u32, actual: u32 },

    #[error("record too large: {have} > {max}")]
    TooLarge { have: u64, max: u64 },

    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
