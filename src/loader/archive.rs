use crate::collection::ReadCollection;
use crate::error::{LoadError, Result};
use crate::loader::dispatch::{load_file, report};
use crate::utils::{app_dirs, decompress};
use std::fs;
use std::path::Path;
use tempfile::Builder;

/// Subdirectory of the application data directory holding in-flight
/// decompressed files.
const TEMP_SUBDIR: &str = "tmp_gz";

/// Extensions accepted underneath `.gz`.
const INNER_EXTENSIONS: [&str; 3] = ["fastq", "fasta", "fa"];

/// Loads a gzip-archived read file (`*.{fasta,fastq,fa}.gz`, extensions
/// matched case-insensitively).
///
/// The archive is decompressed into a uniquely named temporary file under
/// the data directory for `app_namespace` (created on demand; a second
/// creation attempt is a no-op, so concurrent calls are safe) and parsed
/// through [`load_file`]. The temporary file is removed whether or not
/// decompression and parsing succeed. The returned collection has
/// `was_archived` set.
pub fn load_archive(path: impl AsRef<Path>, app_namespace: &str) -> Result<ReadCollection> {
    let path = path.as_ref();
    let inner = inner_extension(path).ok_or(LoadError::UnsupportedFileType)?;

    let temp_dir = app_dirs::app_data_dir(app_namespace)?.join(TEMP_SUBDIR);
    fs::create_dir_all(&temp_dir)?;

    // The guard deletes the decompressed file on every exit path, early
    // returns included.
    let temp = Builder::new()
        .suffix(&format!(".{inner}"))
        .tempfile_in(&temp_dir)?;
    decompress::decompress(path, temp.path())?;

    let mut collection = load_file(temp.path())?;
    collection.was_archived = true;
    Ok(collection)
}

/// Callback-channel variant of [`load_archive`]: any failure is passed to
/// `on_error` as a descriptive message and collapsed into `None`.
pub fn load_archive_with(
    path: impl AsRef<Path>,
    app_namespace: &str,
    on_error: Option<&dyn Fn(&str)>,
) -> Option<ReadCollection> {
    report(load_archive(path, app_namespace), on_error)
}

/// The extension in front of `.gz`, lowercased, when the filename is an
/// accepted archive shape.
fn inner_extension(path: &Path) -> Option<String> {
    let outer = path.extension()?.to_str()?.to_lowercase();
    if outer != "gz" {
        return None;
    }
    let inner = Path::new(path.file_stem()?)
        .extension()?
        .to_str()?
        .to_lowercase();
    INNER_EXTENSIONS.contains(&inner.as_str()).then_some(inner)
}
