//! Events, and repeating events

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveDateTime};

use crate::item::{done_symbol, DISPLAY_DATE_TIME_FORMAT, DISPLAY_TIME_FORMAT};

/// An activity that happens at a given place, between a start and an end time
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    name: String,
    location: String,
    start: NaiveDateTime,
    /// Always strictly after `start`
    end: NaiveDateTime,
    comments: String,
    is_done: bool,
}

impl Event {
    /// Create a new event, that is not done yet.
    ///
    /// Callers are responsible for giving an `end` strictly after `start`
    pub fn new(name: String, location: String, start: NaiveDateTime, end: NaiveDateTime, comments: String) -> Self {
        debug_assert!(end > start);
        Self { name, location, start, end, comments, is_done: false }
    }

    pub fn name(&self) -> &str                   { &self.name     }
    pub fn location(&self) -> &str               { &self.location }
    pub fn comments(&self) -> &str               { &self.comments }
    pub fn date_time(&self) -> NaiveDateTime     { self.start     }
    pub fn end_date_time(&self) -> NaiveDateTime { self.end       }
    pub fn date(&self) -> NaiveDate              { self.start.date() }
    pub fn is_done(&self) -> bool                { self.is_done   }

    pub fn set_done(&mut self) {
        self.is_done = true;
    }

    /// Whether both events describe the same activity.
    /// The done flag is not taken into account.
    pub fn is_equivalent_to(&self, other: &Event) -> bool {
           self.name == other.name
        && self.location == other.location
        && self.start == other.start
        && self.end == other.end
        && self.comments == other.comments
    }

    /// Whether this event ends strictly after it starts
    pub fn is_well_formed(&self) -> bool {
        self.end > self.start
    }

    fn fmt_body(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at: {})\n   | Date: {} - {}",
            self.name,
            self.location,
            self.start.format(DISPLAY_DATE_TIME_FORMAT),
            self.end.format(DISPLAY_TIME_FORMAT),
        )
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[E][{}] ", done_symbol(self.is_done))?;
        self.fmt_body(f)?;
        write!(f, "\n   | Notes: {}", self.comments)
    }
}



/// The unit of the period of a repeating event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodUnit {
    Day,
    Week,
    Month,
    Year,
}

impl Display for PeriodUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}

/// Describes the series a [`RepeatEvent`] is an occurrence of.
///
/// None of these fields can be changed by the user when editing the event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepeatSeries {
    /// How many `period_unit`s between two occurrences. Always positive
    pub num_of_period: u32,
    pub period_unit: PeriodUnit,
    /// The start of the very first occurrence of the series
    pub original_date_time: NaiveDateTime,
    /// Index of the current occurrence within the series
    pub period_counter: u32,
}

impl RepeatSeries {
    pub fn new(num_of_period: u32, period_unit: PeriodUnit, original_date_time: NaiveDateTime, period_counter: u32) -> Self {
        debug_assert!(num_of_period > 0);
        Self { num_of_period, period_unit, original_date_time, period_counter }
    }
}

/// An event that is one occurrence of a periodic series
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepeatEvent {
    event: Event,
    series: RepeatSeries,
}

impl RepeatEvent {
    pub fn new(event: Event, series: RepeatSeries) -> Self {
        Self { event, series }
    }

    /// The user-visible part of this occurrence
    pub fn event(&self) -> &Event         { &self.event  }
    pub fn series(&self) -> &RepeatSeries { &self.series }

    pub fn name(&self) -> &str                   { self.event.name() }
    pub fn location(&self) -> &str               { self.event.location() }
    pub fn comments(&self) -> &str               { self.event.comments() }
    pub fn date_time(&self) -> NaiveDateTime     { self.event.date_time() }
    pub fn end_date_time(&self) -> NaiveDateTime { self.event.end_date_time() }
    pub fn date(&self) -> NaiveDate              { self.event.date() }
    pub fn is_done(&self) -> bool                { self.event.is_done() }

    pub fn set_done(&mut self) {
        self.event.set_done();
    }

    /// Whether the underlying event is well formed, and the series has a positive period
    pub fn is_well_formed(&self) -> bool {
        self.event.is_well_formed() && self.series.num_of_period > 0
    }

    /// Build the occurrence that results from editing this one: user-visible fields come from `edited`, the series is kept.
    pub fn with_edited_event(&self, edited: Event) -> Self {
        Self::new(edited, self.series.clone())
    }

    /// Whether both occurrences have the same user-visible fields.
    /// The done flag and the series are not taken into account.
    pub fn is_equivalent_to(&self, other: &RepeatEvent) -> bool {
        self.event.is_equivalent_to(&other.event)
    }
}

impl Display for RepeatEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[R][{}] ", done_symbol(self.is_done()))?;
        self.event.fmt_body(f)?;
        write!(f, "\n   | Repeats every {} {} (occurrence {} since {})\n   | Notes: {}",
            self.series.num_of_period,
            self.series.period_unit,
            self.series.period_counter,
            self.series.original_date_time.format(DISPLAY_DATE_TIME_FORMAT),
            self.event.comments(),
        )
    }
}
