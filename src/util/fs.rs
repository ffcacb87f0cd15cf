//! File helpers

use std::fs::File;
use std::io;
use std::path::Path;

/// Byte-stream copy of `src` to `dst`
///
/// Truncates `dst` if it already exists. Returns the number of bytes copied.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(dst: P, src: Q) -> crate::Result<u64> {
    let mut reader = File::open(src)?;
    let mut writer = File::create(dst)?;
    Ok(io::copy(&mut reader, &mut writer)?)
}
