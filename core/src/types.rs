use std::io;

use thiserror::Error;

use crate::{features::SchemaError, io::ConfigError, tfrecord::RecordError};

/// Unified error covering I/O, record framing, payload schema and configuration.
/// - `From<T>` impls enable `?` across the writer and reader layers.
/// - Messages aim to be stable and contextual for logs.
#[derive(Debug, Error)]
pub enum DataError {
    /// Directory creation, file open or write failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Container-level error (length, checksum, truncation).
    #[error("record error: {0}")]
    Record(#[source] RecordError),

    /// Payload did not match the declared feature schema.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Writer configuration rejected before any output was produced.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// I/O failures surfaced by the record layer stay I/O errors at the top level.
impl From<RecordError> for DataError {
    fn from(e: RecordError) -> Self {
        match e {
            RecordError::Io(e) => DataError::Io(e),
            other => DataError::Record(other),
        }
    }
}
