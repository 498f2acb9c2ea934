use crate::error::Result;
use niffler::get_reader;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Decompresses `src` into `dst`, fully materializing `dst` before
/// returning.
///
/// The compression format is sniffed from the stream itself, so an
/// already-plain `src` is copied through unchanged.
pub fn decompress(src: &Path, dst: &Path) -> Result<()> {
    let file = File::open(src)?;
    let (mut reader, _compression) = get_reader(Box::new(file))?;
    let mut writer = BufWriter::new(File::create(dst)?);
    io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(())
}
