// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::NaiveDate;

use crate::traits::UsageCounter;

/// In-memory daily counter. The count resets the first time it is consulted
/// on a new day.
#[derive(Debug, Clone)]
pub struct DailyUsageCounter {
    limit: u32,
    day: Option<NaiveDate>,
    used: u32,
}

impl DailyUsageCounter {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            day: None,
            used: 0,
        }
    }

    fn used_on(&self, today: NaiveDate) -> u32 {
        if self.day == Some(today) {
            self.used
        } else {
            0
        }
    }
}

impl UsageCounter for DailyUsageCounter {
    fn remaining(&self, today: NaiveDate) -> u32 {
        self.limit.saturating_sub(self.used_on(today))
    }

    fn increment(&mut self, today: NaiveDate) {
        self.used = self.used_on(today).saturating_add(1);
        self.day = Some(today);
    }

    fn limit(&self) -> u32 {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_counts_down_to_zero() {
        let mut counter = DailyUsageCounter::new(2);
        assert_eq!(counter.remaining(day(1)), 2);
        counter.increment(day(1));
        assert!(counter.check(day(1)));
        counter.increment(day(1));
        assert_eq!(counter.remaining(day(1)), 0);
        assert!(!counter.check(day(1)));
    }

    #[test]
    fn test_resets_on_new_day() {
        let mut counter = DailyUsageCounter::new(1);
        counter.increment(day(1));
        assert!(!counter.check(day(1)));
        assert_eq!(counter.remaining(day(2)), 1);
        counter.increment(day(2));
        assert_eq!(counter.remaining(day(2)), 0);
    }

    #[test]
    fn test_zero_limit_never_allows() {
        let counter = DailyUsageCounter::new(0);
        assert!(!counter.check(day(1)));
        assert_eq!(counter.limit(), 0);
    }
}
