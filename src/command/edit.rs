//! Replace a task by a new one, entered by the user

use crate::item::Task;
use crate::task_list::TaskList;
use crate::traits::LineUi;
use crate::error::CommandError;
use crate::messages;
use crate::parser::{parse_assignment, parse_event, split_command_word};
use crate::parser::grammar::{ASSIGNMENT_COMMAND_WORD, EVENT_COMMAND_WORD};
use super::CommandResult;

pub const COMMAND_WORD: &str = "edit";

/// Re-prompts the user for a whole task, and replaces the task at a given index with it.
///
/// Repeating events keep their series when they are edited into a (plain) event.
#[derive(Clone, Debug, PartialEq)]
pub struct EditCommand {
    /// Zero-based. Can be negative since it comes from user input
    edit_index: i64,
}

impl EditCommand {
    pub fn new(edit_index: i64) -> Self {
        Self { edit_index }
    }

    /// Run the edit.
    ///
    /// The task list is only modified when this succeeds.
    pub fn execute(&self, task_list: &mut TaskList, ui: &mut dyn LineUi) -> CommandResult {
        match self.run(task_list, ui) {
            Ok(edited) => CommandResult::success(messages::edit_success(&edited)),
            Err(err) => {
                log::info!("Edit of task #{} rejected: {:?}", self.edit_index, err);
                CommandResult::failure(err)
            },
        }
    }

    /// Returns the task that has been stored
    fn run(&self, task_list: &mut TaskList, ui: &mut dyn LineUi) -> Result<Task, CommandError> {
        let index = self.valid_index(task_list)?;

        ui.show_to_user(messages::EDIT_PROMPT);
        ui.show_to_user(messages::divider());
        let user_input = ui.get_user_input();
        let user_input = user_input.trim();

        let (command_type, _) = split_command_word(user_input);
        let candidate = match command_type.as_str() {
            ASSIGNMENT_COMMAND_WORD => Task::from(parse_assignment(user_input)?),
            EVENT_COMMAND_WORD => Task::from(parse_event(user_input)?),
            _ => return Err(CommandError::UnknownCommand),
        };

        if task_list.contains_equivalent(&candidate) {
            return Err(CommandError::DuplicateTask);
        }

        // A merged repeating event may still duplicate another occurrence
        let edited = merge_with_current(task_list.get(index)?, candidate);
        if edited.is_repeat_event() && task_list.contains_equivalent(&edited) {
            return Err(CommandError::DuplicateTask);
        }
        log::debug!("Task #{} becomes {:?}", index, edited);

        task_list.replace(index, edited.clone())?;
        Ok(edited)
    }

    fn valid_index(&self, task_list: &TaskList) -> Result<usize, CommandError> {
        if task_list.is_empty() {
            return Err(CommandError::NoTasks);
        }
        if self.edit_index < 0 || self.edit_index >= task_list.size() as i64 {
            return Err(CommandError::InvalidIndex { range: task_list.range_of_valid_index() });
        }
        Ok(self.edit_index as usize)
    }
}

/// Build the task that will replace `current`.
///
/// An event that replaces a repeating event keeps its series. Any other candidate replaces `current` as is.
fn merge_with_current(current: &Task, candidate: Task) -> Task {
    match (current, candidate) {
        (Task::RepeatEvent(repeat_event), Task::Event(edited)) => {
            Task::RepeatEvent(repeat_event.with_edited_event(edited))
        },
        (_, candidate) => candidate,
    }
}

/// Parse the arguments of an `edit` command, i.e. a one-based task number
pub fn parse_arguments(arguments: &str) -> Result<EditCommand, CommandError> {
    let incorrect_format = || CommandError::IncorrectFormat {
        task_type: crate::parser::capitalize(COMMAND_WORD),
        usage: messages::EDIT_USAGE,
    };
    let human_index: i64 = arguments.trim().parse().map_err(|_| incorrect_format())?;
    let edit_index = human_index.checked_sub(1).ok_or_else(incorrect_format)?;
    Ok(EditCommand::new(edit_index))
}
