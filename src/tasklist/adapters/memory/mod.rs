//! In-memory adapter for task list persistence.

mod repository;

pub use repository::InMemoryTaskListRepository;
