//! The catalog of every string shown to the user
//!
//! Fixed messages are constants, messages that embed a value are functions.

use crate::item::Task;

pub const EDIT_USAGE: &str = "Edit Task: edit [TASK NUMBER]";
pub const ASSIGNMENT_USAGE: &str = "Add Assignment: assignment n/NAME m/MODULE d/DD/MM/YY HHMM c/COMMENTS";
pub const EVENT_USAGE: &str = "Add Event: event n/NAME l/LOCATION d/DD/MM/YY HHMM-HHMM c/COMMENTS";
pub const DONE_USAGE: &str = "Mark Task as Done: done [TASK NUMBER]";
pub const DELETE_USAGE: &str = "Delete Task: delete [TASK NUMBER]";

pub const NO_TASKS: &str = "You have no tasks at the moment.";
pub const EDIT_PROMPT: &str = "Please edit your task as follows:\n  assignment n/NAME m/MODULE d/DD/MM/YY HHMM c/COMMENTS\n  event n/NAME l/LOCATION d/DD/MM/YY HHMM-HHMM c/COMMENTS";
pub const UNKNOWN_COMMAND: &str = "Unknown command entered. Please try again.";
pub const MALFORMED_DATE: &str = "Please check that the date and time follow DD/MM/YY HHMM and actually exist.";
pub const MALFORMED_DATE_RANGE: &str = "Please check that the date and times follow DD/MM/YY HHMM-HHMM and actually exist.";
pub const BAD_TIME_ORDER: &str = "The end time of an event must be after its start time.";
pub const DUPLICATE_TASK: &str = "This task already exists in your list.";
pub const CLEAR_SUCCESS: &str = "All tasks have been cleared.";
pub const EXIT: &str = "Bye! Good luck with your studies.";

/// The divider drawn under prompts, see [`DIVIDER`](crate::config::DIVIDER)
pub fn divider() -> &'static str {
    crate::config::DIVIDER.as_str()
}

/// The range of valid task numbers in a list of `size` tasks, as shown to the user (i.e. one-based)
pub fn index_range(size: usize) -> String {
    format!("1 - {}", size)
}

pub fn invalid_index(range: &str) -> String {
    format!("Please provide a valid task number from {}.", range)
}

pub fn incorrect_format(task_type: &str, usage: &str) -> String {
    format!("Incorrect format for {} command.\n{}", task_type, usage)
}

pub fn edit_success(task: &Task) -> String {
    format!("Task edited:\n  {}", task)
}

pub fn add_success(task: &Task, size: usize) -> String {
    format!("Task added:\n  {}\nYou now have {} task(s) in your list.", task, size)
}

pub fn done_success(task: &Task) -> String {
    format!("Nice, this task is done:\n  {}", task)
}

pub fn delete_success(task: &Task, size: usize) -> String {
    format!("Task deleted:\n  {}\nYou now have {} task(s) in your list.", task, size)
}

/// A numbered listing of the given tasks, numbers being one-based
pub fn list<'a, I>(tasks: I) -> String
where
    I: IntoIterator<Item = &'a Task>,
{
    let lines: Vec<String> = tasks.into_iter()
        .enumerate()
        .map(|(i, task)| format!("{}. {}", i + 1, task))
        .collect();

    if lines.is_empty() {
        return NO_TASKS.to_string();
    }
    format!("Here are the tasks in your list:\n{}", lines.join("\n"))
}
