use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use tracing::warn;

use crate::constants::{DEFAULT_BUFFER_CAPACITY, MAX_RECORD_LEN, RECORD_FOOTER_LEN, RECORD_HEADER_LEN};
use crate::tfrecord::types::{RecordError, RecordHeader};
use crate::utils::masked_crc32c;

/// Parse and verify the fixed 12-byte record header.
#[inline]
pub fn parse_record_header(wire: &[u8]) -> Result<RecordHeader, RecordError> {
    if wire.len() < RecordHeader::LEN {
        return Err(RecordError::Truncated);
    }

    let length = LittleEndian::read_u64(&wire[0..8]);
    let length_crc = LittleEndian::read_u32(&wire[8..12]);

    let computed = masked_crc32c(&wire[0..8]);
    if computed != length_crc {
        return Err(RecordError::CorruptLength { expected: length_crc, actual: computed });
    }

    Ok(RecordHeader { length, length_crc })
}

/// Decode a single complete record from bytes, returning a view of its payload.
///
/// Caller guarantees the slice holds exactly one framed record.
pub fn decode_record_frame(wire: &[u8]) -> Result<&[u8], RecordError> {
    let header = parse_record_header(wire)?;

    if header.length > MAX_RECORD_LEN {
        return Err(RecordError::TooLarge { have: header.length, max: MAX_RECORD_LEN });
    }

    let expected = header.framed_len() as usize;
    if wire.len() < expected {
        return Err(RecordError::Truncated);
    }
    if wire.len() != expected {
        return Err(RecordError::LengthMismatch { expected, actual: wire.len() });
    }

    let data_end = RECORD_HEADER_LEN + header.length as usize;
    let payload = &wire[RECORD_HEADER_LEN..data_end];
    let data_crc = LittleEndian::read_u32(&wire[data_end..data_end + RECORD_FOOTER_LEN]);

    let computed = masked_crc32c(payload);
    if computed != data_crc {
        return Err(RecordError::CorruptData { expected: data_crc, actual: computed });
    }

    Ok(payload)
}

/// Sequential record reader. Yields one payload per record, in file order.
#[derive(Debug)]
pub struct RecordReader<R: Read> {
    inner: R,
    verify_checksums: bool,
    failed: bool,
}

impl RecordReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::with_capacity(DEFAULT_BUFFER_CAPACITY, file)))
    }
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, verify_checksums: true, failed: false }
    }

    /// Skip CRC verification. Only for inputs that are already trusted.
    pub fn without_checksums(mut self) -> Self {
        warn!("record checksum verification disabled");
        self.verify_checksums = false;
        self
    }

    /// Read the next payload. `Ok(None)` on a clean end of input.
    pub fn read_record(&mut self) -> Result<Option<Vec<u8>>, RecordError> {
        let mut head = [0u8; RECORD_HEADER_LEN];
        if !read_full_or_eof(&mut self.inner, &mut head)? {
            return Ok(None);
        }

        let length = LittleEndian::read_u64(&head[0..8]);
        if self.verify_checksums {
            parse_record_header(&head)?;
        }
        if length > MAX_RECORD_LEN {
            return Err(RecordError::TooLarge { have: length, max: MAX_RECORD_LEN });
        }

        let mut payload = vec![0u8; length as usize];
        read_exact_or_truncated(&mut self.inner, &mut payload)?;

        let mut foot = [0u8; RECORD_FOOTER_LEN];
        read_exact_or_truncated(&mut self.inner, &mut foot)?;

        if self.verify_checksums {
            let expected = LittleEndian::read_u32(&foot);
            let actual = masked_crc32c(&payload);
            if expected != actual {
                return Err(RecordError::CorruptData { expected, actual });
            }
        }

        Ok(Some(payload))
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Vec<u8>, RecordError>;

    /// Fused after the first error: a corrupt stream has no trustworthy next boundary.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.read_record().transpose();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

/// Fill `buf` completely. Returns `false` if the input ended before the first byte.
fn read_full_or_eof<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<bool, RecordError> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(false),
            Ok(0) => return Err(RecordError::Truncated),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(true)
}

fn read_exact_or_truncated<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<(), RecordError> {
    r.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => RecordError::Truncated,
        _ => RecordError::Io(e),
    })
}
