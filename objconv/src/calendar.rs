//
// Copyright 2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Calendar helpers for [`chrono::DateTime`].
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use objconv::calendar::CalendarExt;
//!
//! let born = Utc.with_ymd_and_hms(1990, 6, 15, 8, 30, 0).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
//! assert_eq!(born.age_on(today), 33);
//! ```

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Weekday};
use std::iter::FusedIterator;

/// Extension methods for zoned date-times.
pub trait CalendarExt {
    /// Returns the age in whole years on `today` of someone born at `self`.
    ///
    /// The birthday counts from its calendar date in `self`'s time zone. A
    /// February 29 birthday is reached on March 1 in common years.
    fn age_on(&self, today: NaiveDate) -> i32;

    /// Returns the age in whole years as of the local date.
    fn age(&self) -> i32 {
        self.age_on(Local::now().date_naive())
    }

    /// Returns the calendar days from `self`'s date onwards, one per whole day
    /// between `self` and `end`.
    ///
    /// The range is empty when `end` is less than a day after `self`.
    ///
    /// ```rust
    /// use chrono::{NaiveDate, TimeZone, Utc};
    /// use objconv::calendar::CalendarExt;
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 2, 27, 18, 0, 0).unwrap();
    /// let end = Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap();
    /// let days: Vec<NaiveDate> = start.date_range_to(&end).collect();
    /// assert_eq!(
    ///     days,
    ///     vec![
    ///         NaiveDate::from_ymd_opt(2024, 2, 27).unwrap(),
    ///         NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
    ///         NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
    ///     ]
    /// );
    /// ```
    fn date_range_to(&self, end: &Self) -> DateRange;

    /// Returns true if `[self, end]` overlaps `[other_start, other_end]`.
    ///
    /// Both ranges are inclusive, so ranges sharing only an endpoint
    /// intersect.
    fn intersects(&self, end: &Self, other_start: &Self, other_end: &Self) -> bool;

    /// Returns true on Saturdays and Sundays.
    fn is_weekend(&self) -> bool;
}

impl<Tz: TimeZone> CalendarExt for DateTime<Tz> {
    fn age_on(&self, today: NaiveDate) -> i32 {
        let born = self.date_naive();
        let age = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            age - 1
        } else {
            age
        }
    }

    fn date_range_to(&self, end: &Self) -> DateRange {
        let days = (end.clone() - self.clone()).num_days();
        DateRange {
            next: self.date_naive(),
            remaining: u64::try_from(days).unwrap_or(0),
        }
    }

    fn intersects(&self, end: &Self, other_start: &Self, other_end: &Self) -> bool {
        other_end >= self && other_start <= end
    }

    fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// Iterator over consecutive calendar days.
///
/// Created by [`CalendarExt::date_range_to`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRange {
    next: NaiveDate,
    remaining: u64,
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        let day = self.next;
        match day.succ_opt() {
            Some(next) => {
                self.next = next;
                self.remaining -= 1;
            }
            None => self.remaining = 0,
        }
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for DateRange {}
