//! Calendar day windows for the analytics pipeline
//!
//! Every day-based computation (nutrition totals, trends, streaks) runs over
//! a fixed window of consecutive calendar days ending at a reference date.
//! The window owns day enumeration and bucketing so each consumer sees
//! exactly one bucket per day, including days with no entries.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindowError {
  #[error("analysis window must span at least one day")]
  EmptyWindow,
}

/// A fixed, ordered run of consecutive calendar days
#[derive(Debug, Clone)]
pub struct DayWindow {
  days: Vec<NaiveDate>,
}

impl DayWindow {
  /// Build a window of `len` consecutive days ending at (and including) `end`
  pub fn ending_at(end: NaiveDate, len: usize) -> Result<Self, WindowError> {
    if len == 0 {
      return Err(WindowError::EmptyWindow);
    }

    let days = (0..len)
      .rev()
      .map(|offset| end - Duration::days(offset as i64))
      .collect();

    Ok(Self { days })
  }

  /// Days in ascending order
  pub fn days(&self) -> &[NaiveDate] {
    &self.days
  }

  pub fn len(&self) -> usize {
    self.days.len()
  }

  pub fn is_empty(&self) -> bool {
    self.days.is_empty()
  }

  /// "Today" for trend purposes: the last day in the window
  pub fn today(&self) -> NaiveDate {
    *self.days.last().expect("window is never empty")
  }

  pub fn contains(&self, date: NaiveDate) -> bool {
    self.days.first().is_some_and(|first| date >= *first && date <= self.today())
  }

  /// Bucket dated records by calendar day. The result holds exactly one
  /// bucket per window day; records outside the window are dropped.
  pub fn bucket_by_day<'a, T>(
    &self,
    items: &'a [T],
    date_of: impl Fn(&T) -> NaiveDate,
  ) -> BTreeMap<NaiveDate, Vec<&'a T>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&T>> =
      self.days.iter().map(|d| (*d, Vec::new())).collect();

    for item in items {
      if let Some(bucket) = buckets.get_mut(&date_of(item)) {
        bucket.push(item);
      }
    }

    buckets
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
