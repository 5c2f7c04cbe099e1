//! Assignments: dated deliverables for a module

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveDateTime};

use crate::item::{done_symbol, DISPLAY_DATE_TIME_FORMAT};

/// An assignment, due at a given date and time
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// The display name of the assignment
    name: String,
    /// The module this assignment belongs to (e.g. `CS2113`)
    module: String,
    /// When it is due
    due: NaiveDateTime,
    comments: String,
    is_done: bool,
}

impl Assignment {
    /// Create a new assignment, that is not done yet
    pub fn new(name: String, module: String, due: NaiveDateTime, comments: String) -> Self {
        Self { name, module, due, comments, is_done: false }
    }

    pub fn name(&self) -> &str              { &self.name     }
    pub fn module(&self) -> &str            { &self.module   }
    pub fn comments(&self) -> &str          { &self.comments }
    pub fn date_time(&self) -> NaiveDateTime { self.due      }
    pub fn date(&self) -> NaiveDate         { self.due.date() }
    pub fn is_done(&self) -> bool           { self.is_done   }

    pub fn set_done(&mut self) {
        self.is_done = true;
    }

    /// Whether both assignments describe the same deliverable.
    /// The done flag is not taken into account.
    pub fn is_equivalent_to(&self, other: &Assignment) -> bool {
           self.name == other.name
        && self.module == other.module
        && self.due == other.due
        && self.comments == other.comments
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[A][{}] {} ({})\n   | Due: {}\n   | Notes: {}",
            done_symbol(self.is_done),
            self.name,
            self.module,
            self.due.format(DISPLAY_DATE_TIME_FORMAT),
            self.comments,
        )
    }
}
