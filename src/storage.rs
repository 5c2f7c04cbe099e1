//! This module saves and loads task lists to and from a local JSON file

use std::path::{Path, PathBuf};
use std::error::Error;

use crate::task_list::TaskList;

/// A JSON file that backs a [`TaskList`]
#[derive(Clone, Debug, PartialEq)]
pub struct Storage {
    backing_file: PathBuf,
}

impl Storage {
    pub fn new(path: &Path) -> Self {
        Self { backing_file: PathBuf::from(path) }
    }

    /// A storage backed by the file configured in [`DEFAULT_STORAGE_FILE`](crate::config::DEFAULT_STORAGE_FILE)
    pub fn default_file() -> Self {
        let path = match crate::config::DEFAULT_STORAGE_FILE.lock() {
            Ok(path) => path.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        Self { backing_file: path }
    }

    pub fn path(&self) -> &Path {
        &self.backing_file
    }

    /// Read the task list from the backing file.
    /// Returns an error if the file does not exist, is not valid JSON, or holds a task that breaks its invariants (e.g. an event that ends before it starts)
    pub fn load(&self) -> Result<TaskList, Box<dyn Error>> {
        let path = &self.backing_file;
        let file = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            },
            Ok(file) => file,
        };
        let task_list: TaskList = serde_json::from_reader(std::io::BufReader::new(file))?;
        if let Some((index, task)) = task_list.iter().enumerate().find(|(_, task)| task.is_well_formed() == false) {
            return Err(format!("Task #{} ({:?}) in {:?} is inconsistent", index + 1, task.name(), path).into());
        }
        log::debug!("Loaded {} tasks from {:?}", task_list.size(), path);
        Ok(task_list)
    }

    /// Read the task list from the backing file, or start with an empty list in case it cannot be read
    pub fn load_or_default(&self) -> TaskList {
        match self.load() {
            Ok(task_list) => task_list,
            Err(err) => {
                log::warn!("Invalid task file: {}. Starting with an empty task list", err);
                TaskList::new()
            },
        }
    }

    /// Write the task list to the backing file
    pub fn save(&self, task_list: &TaskList) -> Result<(), Box<dyn Error>> {
        let path = &self.backing_file;
        let file = match std::fs::File::create(path) {
            Err(err) => {
                return Err(format!("Unable to save file {:?}: {}", path, err).into());
            },
            Ok(f) => f,
        };
        serde_json::to_writer_pretty(file, task_list)?;
        log::debug!("Saved {} tasks to {:?}", task_list.size(), path);
        Ok(())
    }
}
