//! Tasks (assignments, events, repeating events)

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveDateTime};

use crate::assignment::Assignment;
use crate::event::{Event, RepeatEvent};

/// How dates and times are shown to the user, e.g. `01 Nov 2021 (Mon) 23:59`
pub(crate) const DISPLAY_DATE_TIME_FORMAT: &str = "%d %b %Y (%a) %H:%M";
pub(crate) const DISPLAY_TIME_FORMAT: &str = "%H:%M";

pub(crate) fn done_symbol(is_done: bool) -> &'static str {
    if is_done { "✓" } else { "✗" }
}


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Task {
    Assignment(Assignment),
    Event(Event),
    RepeatEvent(RepeatEvent),
}

/// Returns `assignment.$property_name`, `event.$property_name` or `repeat_event.$property_name`, depending on the variant of self
macro_rules! synthetise_common_getter {
    ($property_name:ident, $return_type:ty) => {
        pub fn $property_name(&self) -> $return_type {
            match self {
                Task::Assignment(a) => a.$property_name(),
                Task::Event(e) => e.$property_name(),
                Task::RepeatEvent(r) => r.$property_name(),
            }
        }
    }
}

impl Task {
    synthetise_common_getter!(name, &str);
    synthetise_common_getter!(comments, &str);
    synthetise_common_getter!(is_done, bool);
    // The due date of assignments, the start of events
    synthetise_common_getter!(date_time, NaiveDateTime);
    synthetise_common_getter!(date, NaiveDate);

    pub fn set_done(&mut self) {
        match self {
            Task::Assignment(a) => a.set_done(),
            Task::Event(e) => e.set_done(),
            Task::RepeatEvent(r) => r.set_done(),
        }
    }

    /// Whether the invariants of the variant hold. Only tasks that were not built through the parsers (e.g. read from a file) can break them
    pub fn is_well_formed(&self) -> bool {
        match self {
            Task::Assignment(_) => true,
            Task::Event(e) => e.is_well_formed(),
            Task::RepeatEvent(r) => r.is_well_formed(),
        }
    }

    pub fn is_assignment(&self) -> bool {
        matches!(self, Task::Assignment(_))
    }

    /// Whether this is an event, repeating or not
    pub fn is_event(&self) -> bool {
        matches!(self, Task::Event(_) | Task::RepeatEvent(_))
    }

    pub fn is_repeat_event(&self) -> bool {
        matches!(self, Task::RepeatEvent(_))
    }

    /// Returns a reference to the inner Assignment
    ///
    /// # Panics
    /// Panics if the inner item is not an Assignment
    pub fn unwrap_assignment(&self) -> &Assignment {
        match self {
            Task::Assignment(a) => a,
            _ => panic!("Not an assignment"),
        }
    }

    /// Returns a reference to the inner Event
    ///
    /// # Panics
    /// Panics if the inner item is not a plain Event
    pub fn unwrap_event(&self) -> &Event {
        match self {
            Task::Event(e) => e,
            _ => panic!("Not an event"),
        }
    }

    /// Returns a reference to the inner RepeatEvent
    ///
    /// # Panics
    /// Panics if the inner item is not a RepeatEvent
    pub fn unwrap_repeat_event(&self) -> &RepeatEvent {
        match self {
            Task::RepeatEvent(r) => r,
            _ => panic!("Not a repeating event"),
        }
    }

    /// Whether both tasks are of the same variant and have the same user-visible fields.
    ///
    /// This is what makes a task a duplicate of another one. The done flag and the series of repeating events are ignored.
    pub fn is_equivalent_to(&self, other: &Task) -> bool {
        match (self, other) {
            (Task::Assignment(s),  Task::Assignment(o))  => s.is_equivalent_to(o),
            (Task::Event(s),       Task::Event(o))       => s.is_equivalent_to(o),
            (Task::RepeatEvent(s), Task::RepeatEvent(o)) => s.is_equivalent_to(o),
            _ => false,
        }
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Task::Assignment(a) => Display::fmt(a, f),
            Task::Event(e) => Display::fmt(e, f),
            Task::RepeatEvent(r) => Display::fmt(r, f),
        }
    }
}

impl From<Assignment> for Task {
    fn from(assignment: Assignment) -> Self {
        Task::Assignment(assignment)
    }
}

impl From<Event> for Task {
    fn from(event: Event) -> Self {
        Task::Event(event)
    }
}

impl From<RepeatEvent> for Task {
    fn from(repeat_event: RepeatEvent) -> Self {
        Task::RepeatEvent(repeat_event)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use crate::event::{PeriodUnit, RepeatSeries};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 10, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn lecture() -> Event {
        Event::new("Lecture".to_string(), "LT19".to_string(), at(8, 16), at(8, 18), "Bring laptop".to_string())
    }

    #[test]
    fn test_equivalence_ignores_done_flag() {
        let original = Task::from(lecture());
        let mut done = original.clone();
        done.set_done();

        assert!(done.is_done());
        assert!(original.is_equivalent_to(&done));
        assert!(done.is_equivalent_to(&original));
    }

    #[test]
    fn test_equivalence_ignores_series() {
        let weekly = Task::from(RepeatEvent::new(lecture(), RepeatSeries::new(1, PeriodUnit::Week, at(1, 16), 1)));
        let daily = Task::from(RepeatEvent::new(lecture(), RepeatSeries::new(2, PeriodUnit::Day, at(2, 16), 3)));
        assert!(weekly.is_equivalent_to(&daily));
    }

    #[test]
    fn test_equivalence_requires_same_variant() {
        let plain = Task::from(lecture());
        let repeating = Task::from(RepeatEvent::new(lecture(), RepeatSeries::new(1, PeriodUnit::Week, at(1, 16), 1)));
        assert_eq!(plain.is_equivalent_to(&repeating), false);
        assert_eq!(repeating.is_equivalent_to(&plain), false);
    }

    #[test]
    fn test_equivalence_compares_every_visible_field() {
        let original = lecture();
        let moved = Event::new("Lecture".to_string(), "LT27".to_string(), at(8, 16), at(8, 18), "Bring laptop".to_string());
        let longer = Event::new("Lecture".to_string(), "LT19".to_string(), at(8, 16), at(8, 19), "Bring laptop".to_string());
        assert_eq!(original.is_equivalent_to(&moved), false);
        assert_eq!(original.is_equivalent_to(&longer), false);

        let report = Assignment::new("Report".to_string(), "CS2101".to_string(), at(9, 23), "Draft".to_string());
        let other_module = Assignment::new("Report".to_string(), "CS2113".to_string(), at(9, 23), "Draft".to_string());
        assert_eq!(report.is_equivalent_to(&other_module), false);
    }

    #[test]
    fn test_common_getters() {
        let series = RepeatSeries::new(1, PeriodUnit::Week, at(1, 16), 1);
        let task = Task::from(RepeatEvent::new(lecture(), series));
        assert_eq!(task.name(), "Lecture");
        assert_eq!(task.comments(), "Bring laptop");
        assert_eq!(task.date_time(), at(8, 16));
        assert_eq!(task.date(), NaiveDate::from_ymd_opt(2021, 10, 8).unwrap());
        assert!(task.is_event());
        assert!(task.is_repeat_event());
        assert_eq!(task.is_assignment(), false);
    }

    #[test]
    fn test_well_formed() {
        assert!(Task::from(lecture()).is_well_formed());
        let series = RepeatSeries { num_of_period: 0, period_unit: PeriodUnit::Week, original_date_time: at(1, 16), period_counter: 0 };
        assert_eq!(Task::from(RepeatEvent::new(lecture(), series)).is_well_formed(), false);
    }

    #[test]
    fn test_display() {
        let report = Task::from(Assignment::new("Lab 3".to_string(), "CS2113".to_string(), at(1, 23), "Submit zip".to_string()));
        assert_eq!(report.to_string(), "[A][✗] Lab 3 (CS2113)\n   | Due: 01 Oct 2021 (Fri) 23:00\n   | Notes: Submit zip");

        let mut lecture = Task::from(lecture());
        lecture.set_done();
        assert_eq!(lecture.to_string(), "[E][✓] Lecture (at: LT19)\n   | Date: 08 Oct 2021 (Fri) 16:00 - 18:00\n   | Notes: Bring laptop");
    }
}
