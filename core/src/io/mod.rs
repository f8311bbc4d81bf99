//! io/mod.rs
//! File-level writer and reader for dialogue records.
//!
//! Industry notes:
//! - Single-threaded, one blocking pass: create dirs → optional shuffle → append → flush.
//! - The file handle is owned by a `RecordWriter` and released on every exit path.
//! - Randomness is injectable so shuffled output is reproducible under test.

pub mod config;
pub mod writer;
pub mod reader;

pub use config::{ConfigError, WriteConfig};
pub use writer::{write_data, write_data_with_config, write_data_with_rng};
pub use reader::{count_records, read_dataset, read_dialogues};
