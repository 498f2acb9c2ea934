use crate::collection::ReadCollection;
use crate::error::{LoadError, Result};
use crate::parsers::{fasta, fastq};
use std::fs;
use std::path::Path;

/// Loads a FASTA or FASTQ file, picking the parser from the lowercased
/// extension: `fa` and `fasta` parse as FASTA, `fastq` as FASTQ. Any other
/// extension is [`LoadError::UnsupportedFileType`]; read failures surface
/// as [`LoadError::Io`].
pub fn load_file(path: impl AsRef<Path>) -> Result<ReadCollection> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "fa" | "fasta" => Ok(fasta::parse(&fs::read_to_string(path)?)),
        "fastq" => fastq::parse(&fs::read_to_string(path)?),
        _ => Err(LoadError::UnsupportedFileType),
    }
}

/// Callback-channel variant of [`load_file`]: any failure is passed to
/// `on_error` as a descriptive message (when a callback is supplied) and
/// collapsed into `None`.
pub fn load_file_with(
    path: impl AsRef<Path>,
    on_error: Option<&dyn Fn(&str)>,
) -> Option<ReadCollection> {
    report(load_file(path), on_error)
}

/// Single error channel shared by the dispatch and archive boundaries.
pub(crate) fn report(
    result: Result<ReadCollection>,
    on_error: Option<&dyn Fn(&str)>,
) -> Option<ReadCollection> {
    match result {
        Ok(collection) => Some(collection),
        Err(e) => {
            if let Some(on_error) = on_error {
                on_error(&e.to_string());
            }
            None
        }
    }
}
