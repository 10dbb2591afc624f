//! Calendar-week bucketing.

use chrono::{Datelike, Duration, NaiveDate};

/// Monday of the week containing `date`.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Every week start from `first` to `last` inclusive, seven days apart.
pub fn week_range(first: NaiveDate, last: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let first = week_start_of(first);
    let last = week_start_of(last);
    std::iter::successors(Some(first), |w| Some(*w + Duration::weeks(1)))
        .take_while(move |w| *w <= last)
}
