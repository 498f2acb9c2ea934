pub mod app_dirs;
pub mod decompress;
