use std::path::Path;

use crate::features::{decode_dialogue, decode_fn, DecodedDialogue, ParsedExample};
use crate::tfrecord::RecordReader;
use crate::types::DataError;

/// Read every record in `path` and parse it with the dialogue schema, in file order.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Vec<ParsedExample>, DataError> {
    RecordReader::open(path)?
        .map(|record| -> Result<ParsedExample, DataError> { Ok(decode_fn(&record?)?) })
        .collect()
}

/// Read every record in `path` into typed dialogue views, in file order.
pub fn read_dialogues(path: impl AsRef<Path>) -> Result<Vec<DecodedDialogue>, DataError> {
    RecordReader::open(path)?
        .map(|record| -> Result<DecodedDialogue, DataError> { Ok(decode_dialogue(&record?)?) })
        .collect()
}

/// Count records without parsing payloads.
pub fn count_records(path: impl AsRef<Path>) -> Result<usize, DataError> {
    let mut n = 0;
    for record in RecordReader::open(path)? {
        record?;
        n += 1;
    }
    Ok(n)
}
