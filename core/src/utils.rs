use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::constants::CRC_MASK_DELTA;

/// Masked CRC-32C (Castagnoli) as stored in the record container.
///
/// Raw CRCs of data that itself embeds CRCs are weak, so the value is
/// rotated right by 15 bits and offset by a constant before it hits the wire.
#[inline]
pub fn masked_crc32c(data: &[u8]) -> u32 {
    mask_crc(crc32c::crc32c(data))
}

#[inline]
pub const fn mask_crc(crc: u32) -> u32 {
    crc.rotate_right(15).wrapping_add(CRC_MASK_DELTA)
}

#[inline]
pub const fn unmask_crc(masked: u32) -> u32 {
    masked.wrapping_sub(CRC_MASK_DELTA).rotate_left(15)
}

/// Create the parent directory of `path` (recursively). Succeeds if it already exists.
/// A bare file name has no parent component and creates nothing.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            debug!(dir = %dir.display(), "ensuring output directory");
            fs::create_dir_all(dir)
        }
        _ => Ok(()),
    }
}

/// Final path component for log lines, falling back to the full path.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
