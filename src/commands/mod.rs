pub mod browse;
pub mod completion;
pub mod format;
pub mod panels;
pub mod show;
