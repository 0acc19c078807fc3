//! Adapter implementations for task list persistence.
//!
//! - [`codec`]: the line-oriented task file format
//! - [`file`]: file-backed repository with atomic saves
//! - [`memory`]: in-memory repository for tests

pub mod codec;
pub mod file;
pub mod memory;

pub use file::FileTaskListRepository;
pub use memory::InMemoryTaskListRepository;
