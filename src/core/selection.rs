use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::prelude::*;

/// Years offered by the year selector, in the order they are listed.
pub const YEARS: [i32; 3] = [2023, 2022, 2021];

/// Months offered by the month selector.
pub const MONTHS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// The user's currently selected `(year, month)` pair that drives the heatmap.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize)]
pub struct Selection {
    pub year: i32,
    pub month: u32,
}

impl Default for Selection {
    fn default() -> Self {
        Self { year: YEARS[0], month: MONTHS[0] }
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl Selection {
    pub fn try_new(year: i32, month: u32) -> Result<Self> {
        ensure!(YEARS.contains(&year), "year {year} is not one of {YEARS:?}");
        ensure!(MONTHS.contains(&month), "month {month} is not within 1..=12");
        Ok(Self { year, month })
    }

    /// Re-validate a selection that came from the outside, for example from a query string.
    pub fn validated(self) -> Result<Self> {
        Self::try_new(self.year, self.month)
    }
}
