pub mod collection;
pub mod loader;
pub mod parsers;
pub mod transform;
pub mod utils;
mod error;

// Re-export main API
pub use collection::{ReadCollection, ReadKind};
pub use error::{LoadError, Result};
pub use loader::{load_archive, load_archive_with, load_file, load_file_with};
pub use transform::{expand_iupac, reverse_complement, sanitize};
