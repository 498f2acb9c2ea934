pub mod archive;
pub mod dispatch;

pub use archive::{load_archive, load_archive_with};
pub use dispatch::{load_file, load_file_with};
