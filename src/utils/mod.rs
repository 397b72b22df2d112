pub mod format;
pub mod selection;

pub use format::format_byte_count;
pub use format::format_bytes;
pub use format::truncate_string;
pub use selection::select_paths;
