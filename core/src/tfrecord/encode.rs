use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::constants::{DEFAULT_BUFFER_CAPACITY, RECORD_FOOTER_LEN, RECORD_HEADER_LEN};
use crate::tfrecord::types::RecordError;
use crate::utils::{ensure_parent_dir, masked_crc32c};

/// Encode a payload into canonical wire format.
///
/// Layout:
///
/// ```text
/// [ length (8) ]
/// [ masked_crc32c(length) (4) ]
/// [ data (N) ]
/// [ masked_crc32c(data) (4) ]
/// ```
pub fn encode_record(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(RECORD_HEADER_LEN + payload.len() + RECORD_FOOTER_LEN);
    put_record(&mut out, payload);
    out
}

#[inline]
fn put_record(out: &mut Vec<u8>, payload: &[u8]) {
    let len_bytes = (payload.len() as u64).to_le_bytes();
    out.extend_from_slice(&len_bytes);
    out.extend_from_slice(&masked_crc32c(&len_bytes).to_le_bytes());
    out.extend_from_slice(payload);
    out.extend_from_slice(&masked_crc32c(payload).to_le_bytes());
}

/// Sequential record writer.
///
/// The inner writer is owned; dropping the writer releases it on every exit
/// path. Call `finish` to observe flush errors instead of losing them in `Drop`.
#[derive(Debug)]
pub struct RecordWriter<W: Write> {
    inner: W,
    written: usize,
}

impl RecordWriter<BufWriter<File>> {
    /// Create (or truncate) `path`, making parent directories as needed.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        Self::create_with_capacity(path, DEFAULT_BUFFER_CAPACITY)
    }

    pub fn create_with_capacity(path: impl AsRef<Path>, capacity: usize) -> Result<Self, RecordError> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::with_capacity(capacity, file)))
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Append one framed record.
    pub fn write_record(&mut self, payload: &[u8]) -> Result<(), RecordError> {
        let len_bytes = (payload.len() as u64).to_le_bytes();
        self.inner.write_all(&len_bytes)?;
        self.inner.write_u32::<LittleEndian>(masked_crc32c(&len_bytes))?;
        self.inner.write_all(payload)?;
        self.inner.write_u32::<LittleEndian>(masked_crc32c(payload))?;
        self.written += 1;
        Ok(())
    }

    pub fn records_written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> Result<(), RecordError> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and hand back the inner writer.
    pub fn finish(mut self) -> Result<W, RecordError> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
