pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod preview;
pub mod utils;

pub use error::{PreviewError, Result};
pub use preview::{
    DisplayList, Entry, FileDescriptor, FileListRenderer, FileSelection, MemoryList, Page,
    show_files,
};
pub use utils::{format_byte_count, format_bytes};
