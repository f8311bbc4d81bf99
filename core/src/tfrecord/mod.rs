//! Self-delimiting record container.
//!
//! Responsibilities:
//! - Define the record header and errors
//! - Encode payloads into the canonical length + checksum layout
//! - Decode records with strict checksum validation
//! - Sequential file writer and reader over that layout
//!
//! Non-responsibilities:
//! - Payload schema (see `features`)
//! - Shuffling, directory policy (see `io`)

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{
    RecordHeader,
    RecordError,
};
pub use encode::{encode_record, RecordWriter};
pub use decode::{decode_record_frame, parse_record_header, RecordReader};
