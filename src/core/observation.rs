use chrono::NaiveDate;

/// Single hourly price observation from the source snapshot.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PriceObservation {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub price_per_mwh: f64,
}

impl PriceObservation {
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, price_per_mwh: f64) -> Self {
        Self { year, month, day, hour, price_per_mwh }
    }

    /// Calendar date of the observation, or `None` if the components do not form a valid date.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}
