quantity!(
    /// Wholesale electricity price in euros per megawatt-hour.
    MegawattHourPrice, suffix: "€/MWh"
);

impl MegawattHourPrice {
    /// Round to the specified number of decimal places, halves to even.
    #[must_use]
    pub fn round_to(self, decimals: i32) -> Self {
        let factor = 10_f64.powi(decimals);
        Self((self.0 * factor).round_ties_even() / factor)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_round_to() {
        assert_abs_diff_eq!(MegawattHourPrice(123.456).round_to(1).0, 123.5);
        assert_abs_diff_eq!(MegawattHourPrice(-0.04).round_to(1).0, 0.0);
    }

    #[test]
    fn test_round_to_ties_even() {
        assert_abs_diff_eq!(MegawattHourPrice(110.25).round_to(1).0, 110.2);
        assert_abs_diff_eq!(MegawattHourPrice(110.75).round_to(1).0, 110.8);
        assert_abs_diff_eq!(MegawattHourPrice(2.5).round_to(0).0, 2.0);
    }

    #[test]
    fn test_display_precision() {
        assert_eq!(format!("{:.1}", MegawattHourPrice(87.24)), "87.2 €/MWh");
    }

    #[test]
    fn test_nan_equals_itself() {
        assert_eq!(MegawattHourPrice(f64::NAN), MegawattHourPrice(f64::NAN));
        assert_ne!(MegawattHourPrice(1.0), MegawattHourPrice(2.0));
    }
}
