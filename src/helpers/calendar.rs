use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;

/// A date with no time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Saturday and Sunday only. Public holidays are working days here.
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Days from the first of `reference`'s month up to and including `reference`.
pub fn generate_days(reference: NaiveDate) -> impl Iterator<Item = CalendarDay> {
    let first_of_month = reference - Days::new(u64::from(reference.day0()));

    first_of_month
        .iter_days()
        .take_while(move |date| *date <= reference)
        .map(CalendarDay::from)
}
