//! Application services for task list orchestration.

mod lifecycle;

pub use lifecycle::{
    AppendPolicy, NumberedTask, ParseAppendPolicyError, TaskListService, TaskListServiceError,
    TaskListServiceResult,
};
