//! Commands the user can type, and their execution
//!
//! Every command turns its errors into a [`CommandResult`], so that nothing but a message ever reaches the caller.

pub mod edit;
pub use edit::EditCommand;

use crate::item::Task;
use crate::task_list::TaskList;
use crate::traits::LineUi;
use crate::error::CommandError;
use crate::messages;
use crate::parser::{capitalize, parse_assignment, parse_event, split_command_word};
use crate::parser::grammar::{ASSIGNMENT_COMMAND_WORD, EVENT_COMMAND_WORD};

/// What a command tells the user once it has run
#[derive(Clone, Debug, PartialEq)]
pub struct CommandResult {
    feedback: String,
    error: Option<CommandError>,
}

impl CommandResult {
    pub fn success(feedback: String) -> Self {
        Self { feedback, error: None }
    }

    pub fn failure(error: CommandError) -> Self {
        Self { feedback: error.to_string(), error: Some(error) }
    }

    /// The message to show to the user. Successes and failures are shown the same way
    pub fn feedback(&self) -> &str { &self.feedback }
    pub fn error(&self) -> Option<&CommandError> { self.error.as_ref() }
    pub fn is_success(&self) -> bool { self.error.is_none() }
}

impl From<Result<String, CommandError>> for CommandResult {
    fn from(result: Result<String, CommandError>) -> Self {
        match result {
            Ok(feedback) => Self::success(feedback),
            Err(err) => Self::failure(err),
        }
    }
}


pub const DONE_COMMAND_WORD: &str = "done";
pub const DELETE_COMMAND_WORD: &str = "delete";
pub const CLEAR_COMMAND_WORD: &str = "clear";
pub const LIST_COMMAND_WORD: &str = "list";
pub const EXIT_COMMAND_WORD: &str = "exit";

/// A line of user input, once parsed
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Edit(EditCommand),
    /// Add a task that has already been parsed from the command line
    Add(Task),
    /// Mark a task as done (zero-based)
    Done(usize),
    /// Delete a task (zero-based)
    Delete(usize),
    Clear,
    List,
    Exit,
}

/// Parse a one-based task number into a zero-based index
fn parse_task_number(arguments: &str, command_word: &str, usage: &'static str) -> Result<usize, CommandError> {
    match arguments.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::IncorrectFormat { task_type: capitalize(command_word), usage }),
    }
}

impl Command {
    /// Parse a full line of user input
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let (command_word, arguments) = split_command_word(input);

        match command_word.as_str() {
            edit::COMMAND_WORD => Ok(Command::Edit(edit::parse_arguments(arguments)?)),
            ASSIGNMENT_COMMAND_WORD => Ok(Command::Add(parse_assignment(input)?.into())),
            EVENT_COMMAND_WORD => Ok(Command::Add(parse_event(input)?.into())),
            DONE_COMMAND_WORD => Ok(Command::Done(parse_task_number(arguments, DONE_COMMAND_WORD, messages::DONE_USAGE)?)),
            DELETE_COMMAND_WORD => Ok(Command::Delete(parse_task_number(arguments, DELETE_COMMAND_WORD, messages::DELETE_USAGE)?)),
            CLEAR_COMMAND_WORD => Ok(Command::Clear),
            LIST_COMMAND_WORD => Ok(Command::List),
            EXIT_COMMAND_WORD => Ok(Command::Exit),
            _ => Err(CommandError::UnknownCommand),
        }
    }

    /// Whether running this command may change the task list
    pub fn is_mutating(&self) -> bool {
        match self {
            Command::List | Command::Exit => false,
            _ => true,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    pub fn execute(&self, task_list: &mut TaskList, ui: &mut dyn LineUi) -> CommandResult {
        match self {
            Command::Edit(edit) => edit.execute(task_list, ui),
            Command::Add(task) => add(task_list, task.clone()).into(),
            Command::Done(index) => done(task_list, *index).into(),
            Command::Delete(index) => delete(task_list, *index).into(),
            Command::Clear => {
                task_list.clear();
                CommandResult::success(messages::CLEAR_SUCCESS.to_string())
            },
            Command::List => CommandResult::success(messages::list(&*task_list)),
            Command::Exit => CommandResult::success(messages::EXIT.to_string()),
        }
    }
}

fn add(task_list: &mut TaskList, task: Task) -> Result<String, CommandError> {
    if task_list.contains_equivalent(&task) {
        return Err(CommandError::DuplicateTask);
    }
    let feedback = messages::add_success(&task, task_list.size() + 1);
    task_list.append(task);
    Ok(feedback)
}

fn done(task_list: &mut TaskList, index: usize) -> Result<String, CommandError> {
    task_list.mark_done(index)?;
    Ok(messages::done_success(task_list.get(index)?))
}

fn delete(task_list: &mut TaskList, index: usize) -> Result<String, CommandError> {
    let removed = task_list.remove(index)?;
    Ok(messages::delete_success(&removed, task_list.size()))
}
