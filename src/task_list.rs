//! The ordered collection of tasks of a session

use serde::{Deserialize, Serialize};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

use crate::item::Task;
use crate::error::TaskListError;

/// An ordered list of tasks.
///
/// Insertion order is preserved, and indices are zero-based. They are only stable between two mutations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// The range of valid indices, as shown to the user (i.e. one-based), e.g. `1 - 3`
    pub fn range_of_valid_index(&self) -> String {
        crate::messages::index_range(self.size())
    }

    fn check_index(&self, index: usize) -> Result<(), TaskListError> {
        if index >= self.tasks.len() {
            return Err(TaskListError::IndexOutOfRange { index, size: self.tasks.len() });
        }
        Ok(())
    }

    /// Add a task at the end of the list
    pub fn append(&mut self, task: Task) {
        log::debug!("Appending task {:?}", task.name());
        self.tasks.push(task);
    }

    pub fn get(&self, index: usize) -> Result<&Task, TaskListError> {
        self.check_index(index)?;
        Ok(&self.tasks[index])
    }

    /// Replace the task at `index`. No other index is affected
    pub fn replace(&mut self, index: usize, task: Task) -> Result<(), TaskListError> {
        self.check_index(index)?;
        log::debug!("Replacing task #{} ({:?}) with {:?}", index, self.tasks[index].name(), task.name());
        self.tasks[index] = task;
        Ok(())
    }

    /// Remove the task at `index`. Every later task is shifted down by one
    pub fn remove(&mut self, index: usize) -> Result<Task, TaskListError> {
        self.check_index(index)?;
        let removed = self.tasks.remove(index);
        log::debug!("Removed task #{} ({:?})", index, removed.name());
        Ok(removed)
    }

    /// Remove every task whose index is given, as if they were removed one at a time from the highest index to the lowest.
    ///
    /// Duplicated indices are only removed once. Nothing is removed in case any index is out of range.
    pub fn remove_many(&mut self, indices: &[usize]) -> Result<Vec<Task>, TaskListError> {
        let mut indices = indices.to_vec();
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices.dedup();

        if let Some(&highest) = indices.first() {
            self.check_index(highest)?;
        }

        Ok(indices.into_iter()
            .map(|index| self.tasks.remove(index))
            .collect())
    }

    pub fn clear(&mut self) {
        log::debug!("Clearing {} tasks", self.tasks.len());
        self.tasks.clear();
    }

    pub fn mark_done(&mut self, index: usize) -> Result<(), TaskListError> {
        self.check_index(index)?;
        self.tasks[index].set_done();
        Ok(())
    }

    /// Whether a task of this list is equivalent (see [`Task::is_equivalent_to`]) to `candidate`
    pub fn contains_equivalent(&self, candidate: &Task) -> bool {
        self.tasks.iter().any(|task| task.is_equivalent_to(candidate))
    }

    fn filtered<P>(&self, predicate: P) -> Vec<Task>
    where
        P: Fn(&Task) -> bool,
    {
        self.tasks.iter()
            .filter(|task| predicate(*task))
            .cloned()
            .collect()
    }

    pub fn assignments(&self) -> Vec<Task> {
        self.filtered(Task::is_assignment)
    }

    /// All events, including repeating ones
    pub fn events(&self) -> Vec<Task> {
        self.filtered(Task::is_event)
    }

    pub fn incomplete_assignments(&self) -> Vec<Task> {
        self.filtered(|task| task.is_assignment() && task.is_done() == false)
    }

    /// Events that start strictly after `now`
    pub fn upcoming_events(&self, now: NaiveDateTime) -> Vec<Task> {
        self.filtered(|task| task.is_event() && task.date_time() > now)
    }

    /// Tasks whose date is between `today` and `days` days later (both included).
    ///
    /// Past the last representable date, every task from `today` onwards is returned.
    pub fn by_days_from(&self, today: NaiveDate, days: u32) -> Vec<Task> {
        let last_day = today.checked_add_signed(Duration::days(i64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        self.by_range(today, last_day)
    }

    /// See [`Self::by_days_from`], using the current local date
    pub fn by_days_from_today(&self, days: u32) -> Vec<Task> {
        self.by_days_from(Local::now().date_naive(), days)
    }

    /// Tasks whose date is between `from` and `to` (both included)
    pub fn by_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<Task> {
        self.filtered(|task| from <= task.date() && task.date() <= to)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::assignment::Assignment;
    use crate::event::{Event, PeriodUnit, RepeatEvent, RepeatSeries};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 11, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn day(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 11, day).unwrap()
    }

    fn assignment(name: &str, due: NaiveDateTime) -> Task {
        Assignment::new(name.to_string(), "CS2113".to_string(), due, "Notes".to_string()).into()
    }

    fn event(name: &str, start: NaiveDateTime) -> Task {
        Event::new(name.to_string(), "COM1".to_string(), start, start + Duration::hours(1), "Notes".to_string()).into()
    }

    /// A0 (1st), E1 (2nd), A2 (3rd, done), R3 (4th)
    fn populated() -> TaskList {
        let mut list = TaskList::new();
        list.append(assignment("A0", at(1, 10)));
        list.append(event("E1", at(2, 10)));
        list.append(assignment("A2", at(3, 10)));
        list.mark_done(2).unwrap();
        let series = RepeatSeries::new(1, PeriodUnit::Week, at(4, 10), 0);
        list.append(RepeatEvent::new(Event::new("R3".to_string(), "LT19".to_string(), at(4, 10), at(4, 12), "Notes".to_string()), series).into());
        list
    }

    fn names(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.name()).collect()
    }

    #[test]
    fn test_append_and_get() {
        let list = populated();
        assert_eq!(list.size(), 4);
        assert_eq!(list.get(3).unwrap().name(), "R3");
        assert_eq!(list.get(4), Err(TaskListError::IndexOutOfRange { index: 4, size: 4 }));
        assert_eq!(list.range_of_valid_index(), "1 - 4");
    }

    #[test]
    fn test_replace() {
        let mut list = populated();
        list.replace(1, assignment("New", at(9, 9))).unwrap();
        assert_eq!(names(&list.iter().cloned().collect::<Vec<_>>()), vec!["A0", "New", "A2", "R3"]);
        assert!(list.replace(4, assignment("Nope", at(9, 9))).is_err());
        assert_eq!(list.size(), 4);
    }

    #[test]
    fn test_remove() {
        let mut list = populated();
        let removed = list.remove(1).unwrap();
        assert_eq!(removed.name(), "E1");
        assert_eq!(list.get(1).unwrap().name(), "A2");
        assert!(list.remove(3).is_err());
        assert_eq!(list.size(), 3);
    }

    #[test]
    fn test_remove_many() {
        let mut list = populated();
        let removed = list.remove_many(&[0, 2, 2]).unwrap();
        assert_eq!(names(&removed), vec!["A2", "A0"]);
        assert_eq!(names(&list.iter().cloned().collect::<Vec<_>>()), vec!["E1", "R3"]);

        let mut list = populated();
        assert!(list.remove_many(&[1, 7]).is_err());
        assert_eq!(list, populated());
        assert_eq!(list.remove_many(&[]).unwrap().len(), 0);
    }

    #[test]
    fn test_clear_and_mark_done() {
        let mut list = populated();
        assert_eq!(list.get(0).unwrap().is_done(), false);
        list.mark_done(0).unwrap();
        assert!(list.get(0).unwrap().is_done());
        assert!(list.mark_done(10).is_err());

        list.clear();
        assert_eq!(list.size(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_contains_equivalent() {
        let list = populated();
        // Done flags are ignored
        assert!(list.contains_equivalent(&assignment("A2", at(3, 10))));
        assert_eq!(list.contains_equivalent(&assignment("A2", at(3, 11))), false);
        assert_eq!(list.contains_equivalent(&event("A0", at(1, 10))), false);
    }

    #[test]
    fn test_typed_filters() {
        let list = populated();
        assert_eq!(names(&list.assignments()), vec!["A0", "A2"]);
        assert_eq!(names(&list.events()), vec!["E1", "R3"]);
        assert_eq!(names(&list.incomplete_assignments()), vec!["A0"]);
        assert_eq!(names(&list.upcoming_events(at(2, 10))), vec!["R3"]);
        assert_eq!(names(&list.upcoming_events(at(2, 9))), vec!["E1", "R3"]);
    }

    #[test]
    fn test_date_filters() {
        let list = populated();
        assert_eq!(names(&list.by_range(day(2), day(3))), vec!["E1", "A2"]);
        assert_eq!(names(&list.by_range(day(4), day(4))), vec!["R3"]);
        assert_eq!(names(&list.by_range(day(5), day(30))).len(), 0);
        assert_eq!(names(&list.by_days_from(day(1), 0)), vec!["A0"]);
        assert_eq!(names(&list.by_days_from(day(2), 2)), vec!["E1", "A2", "R3"]);
        assert_eq!(names(&list.by_days_from(day(2), u32::MAX)), vec!["E1", "A2", "R3"]);
    }

    #[test]
    fn test_by_days_from_today() {
        let mut list = populated();
        list.append(assignment("Due now", Local::now().naive_local()));
        assert_eq!(names(&list.by_days_from_today(0)), vec!["Due now"]);
        assert_eq!(names(&list.by_days_from_today(u32::MAX)), vec!["Due now"]);
    }
}
