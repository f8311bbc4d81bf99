//! constants.rs
//! Stable wire names and defaults shared by the writer and decoder.
//!
//! Industry notes:
//! - Feature names are a stable wire schema. Existing readers look them up by literal key.
//! - The CRC mask delta matches the TFRecord container so files interoperate with TF readers.

/// Feature key holding the model input (`src`).
pub const FEATURE_INPUT: &str = "input";
/// Feature key holding the model target (`tgt`).
pub const FEATURE_VALUE: &str = "value";
/// Feature key holding the source dialogue id.
pub const FEATURE_DIALOG_ID: &str = "dialog_id";
/// Feature key holding the turn index.
pub const FEATURE_TURN: &str = "turn";

/// Constant added to the rotated CRC-32C when masking.
pub const CRC_MASK_DELTA: u32 = 0xa282_ead8;

/// Record header: u64 length + u32 masked CRC of the length.
pub const RECORD_HEADER_LEN: usize = 8 + 4;
/// Record footer: u32 masked CRC of the payload.
pub const RECORD_FOOTER_LEN: usize = 4;

/// Upper bound on a single record payload accepted by the reader (256 MiB).
pub const MAX_RECORD_LEN: u64 = 256 * 1024 * 1024;

/// Defaults when WriteConfig is built via `Default`.
pub const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024; // 64 KB
/// Sanity bound on the writer buffer (64 MiB).
pub const MAX_BUFFER_CAPACITY: usize = 64 * 1024 * 1024;
