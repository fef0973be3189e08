//! Application services for task lifecycle and board classification.

mod board;
mod lifecycle;

pub use board::{TaskBoardError, TaskBoardResult, TaskBoardService};
pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
