//! This crate is a task manager for students.
//!
//! It tracks two kinds of tasks: [`Assignment`]s (a deliverable for a module, due at a given time) and [`Event`]s (an activity that happens somewhere, between two times).
//! An event can also be a [`RepeatEvent`], i.e. one occurrence of a periodic series.
//!
//! Tasks are stored in a [`TaskList`], that is modified by [`Command`](command::Command)s parsed from user input. \
//! The most involved one is the [`EditCommand`](command::EditCommand), that re-prompts the user for a whole task and replaces an existing task with it.
//! A [`Storage`](storage::Storage) saves task lists to a JSON file between sessions.

pub mod traits;
pub mod config;
pub mod error;
pub mod messages;

mod item;
pub use item::Task;
pub mod assignment;
pub use assignment::Assignment;
pub mod event;
pub use event::{Event, RepeatEvent};
pub mod task_list;
pub use task_list::TaskList;

pub mod parser;
pub mod command;
pub mod ui;
pub mod storage;
