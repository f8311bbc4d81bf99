//! t2t-core
//!
//! Text-to-text dialogue examples → self-delimiting record files, and back.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod example;
pub mod features;
pub mod tfrecord;

// File layer
pub mod io;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::example::TextToTextExample;
    pub use crate::features::{decode_fn, DecodedDialogue, FeatureValue, ParsedExample};
    pub use crate::io::{read_dataset, read_dialogues, write_data, write_data_with_config, write_data_with_rng, WriteConfig};
    pub use crate::types::DataError;
}
