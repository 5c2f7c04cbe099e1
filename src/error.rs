//! Error kinds raised while parsing user input and running commands
//!
//! Every `Display` implementation renders the user-facing message from the [`messages`](crate::messages) catalog,
//! so that a command can turn any error into its feedback string.

use thiserror::Error;

use crate::messages;

/// A date or time that does not follow the `DD/MM/YY HHMM` format
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DateError {
    #[error("{:?} does not look like DD/MM/YY HHMM", .0)]
    Shape(String),
    #[error("{:?} is not an existing date and time", .0)]
    OutOfRange(String),
}

/// Errors of the [`TaskList`](crate::task_list::TaskList) mutation surface
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TaskListError {
    #[error("index {index} is out of range for a list of {size} tasks")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Everything that can go wrong while running a command.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CommandError {
    #[error("{}", messages::NO_TASKS)]
    NoTasks,

    #[error("{}", messages::invalid_index(.range))]
    InvalidIndex { range: String },

    #[error("{}", messages::UNKNOWN_COMMAND)]
    UnknownCommand,

    #[error("{}", messages::incorrect_format(.task_type, .usage))]
    IncorrectFormat { task_type: String, usage: &'static str },

    #[error("{}", messages::MALFORMED_DATE)]
    MalformedDate,

    #[error("{}", messages::MALFORMED_DATE_RANGE)]
    MalformedDateRange,

    #[error("{}", messages::BAD_TIME_ORDER)]
    BadTimeOrder,

    #[error("{}", messages::DUPLICATE_TASK)]
    DuplicateTask,
}

impl From<TaskListError> for CommandError {
    fn from(err: TaskListError) -> Self {
        match err {
            TaskListError::IndexOutOfRange { size: 0, .. } => CommandError::NoTasks,
            TaskListError::IndexOutOfRange { size, .. } => CommandError::InvalidIndex { range: messages::index_range(size) },
        }
    }
}
