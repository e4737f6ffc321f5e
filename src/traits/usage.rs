// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::NaiveDate;

/// Daily usage gate for `remote` (AI) tools. Local tools never consult it.
pub trait UsageCounter {
    /// Generations still allowed on `today`.
    fn remaining(&self, today: NaiveDate) -> u32;

    fn increment(&mut self, today: NaiveDate);

    fn limit(&self) -> u32;

    fn check(&self, today: NaiveDate) -> bool {
        self.remaining(today) > 0
    }
}
