//! The `assignment` and `event` grammars
//!
//! ```text
//! assignment n/NAME m/MODULE d/DD/MM/YY HHMM c/COMMENTS
//! event n/NAME l/LOCATION d/DD/MM/YY HHMM-HHMM c/COMMENTS
//! ```
//!
//! Fields come in this exact order, separated by any amount of whitespace.
//! A field value cannot be empty, cannot start with whitespace and cannot contain `|` nor `/`.

use once_cell::sync::Lazy;
use regex_lite::{Captures, Regex};

use crate::assignment::Assignment;
use crate::event::Event;
use crate::error::CommandError;
use crate::messages;
use crate::parser::{capitalize, date::parse_date};

pub const ASSIGNMENT_COMMAND_WORD: &str = "assignment";
pub const EVENT_COMMAND_WORD: &str = "event";

static ASSIGNMENT_PARAMETERS_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?i:assignment)\b",
        r"\s+n/\s*(?P<name>[^|/\s][^|/]*)",
        r"\s+m/\s*(?P<module>[^|/\s][^|/]*)",
        r"\s+d/\s*(?P<date_time>\d{2}/\d{2}/\d{2}\s+\d{4})",
        r"\s+c/\s*(?P<comments>[^|/\s][^|/]*)$",
    )).unwrap(/* this is a valid constant pattern */)
});

static EVENT_PARAMETERS_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?i:event)\b",
        r"\s+n/\s*(?P<name>[^|/\s][^|/]*)",
        r"\s+l/\s*(?P<location>[^|/\s][^|/]*)",
        r"\s+d/\s*(?P<day>\d{2}/\d{2}/\d{2})\s+(?P<start>\d{4})\s*-\s*(?P<end>\d{4})",
        r"\s+c/\s*(?P<comments>[^|/\s][^|/]*)$",
    )).unwrap(/* this is a valid constant pattern */)
});

/// Returns the trimmed value of a capture group the pattern always captures
fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map(|m| m.as_str().trim()).unwrap_or_default()
}

/// Parse a full `assignment ...` line.
///
/// The name and comments are capitalized, the module is kept verbatim.
pub fn parse_assignment(input: &str) -> Result<Assignment, CommandError> {
    let caps = ASSIGNMENT_PARAMETERS_FORMAT.captures(input)
        .ok_or_else(|| CommandError::IncorrectFormat {
            task_type: capitalize(ASSIGNMENT_COMMAND_WORD),
            usage: messages::ASSIGNMENT_USAGE,
        })?;

    let due = parse_date(group(&caps, "date_time")).map_err(|err| {
        log::debug!("Rejecting assignment due date: {}", err);
        CommandError::MalformedDate
    })?;

    Ok(Assignment::new(
        capitalize(group(&caps, "name")),
        group(&caps, "module").to_string(),
        due,
        capitalize(group(&caps, "comments")),
    ))
}

/// Parse a full `event ...` line.
///
/// The name and comments are capitalized, the location is kept verbatim.
pub fn parse_event(input: &str) -> Result<Event, CommandError> {
    let caps = EVENT_PARAMETERS_FORMAT.captures(input)
        .ok_or_else(|| CommandError::IncorrectFormat {
            task_type: capitalize(EVENT_COMMAND_WORD),
            usage: messages::EVENT_USAGE,
        })?;

    let day = group(&caps, "day");
    let parse_time = |time: &str| parse_date(&format!("{} {}", day, time)).map_err(|err| {
        log::debug!("Rejecting event date range: {}", err);
        CommandError::MalformedDateRange
    });
    let start = parse_time(group(&caps, "start"))?;
    let end = parse_time(group(&caps, "end"))?;

    if end <= start {
        return Err(CommandError::BadTimeOrder);
    }

    Ok(Event::new(
        capitalize(group(&caps, "name")),
        group(&caps, "location").to_string(),
        start,
        end,
        capitalize(group(&caps, "comments")),
    ))
}
