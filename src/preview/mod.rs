pub mod model;
pub mod page;
pub mod render;

pub use model::{DisplayList, Entry, EntryTag, FileDescriptor, FileSelection, MemoryList};
pub use page::{Element, Page};
pub use render::{FileListRenderer, show_files};
