use crate::{
    chart::{
        CHART_WIDTH,
        PRICE_AXIS_TITLE,
        figure::{Anchor, Axis, Figure, Layout, Legend, Line, Mode, Orientation, Scatter, Trace},
    },
    core::{rolling::RollingMean, series::SeriesTable},
};

/// Window of the rolling mean applied on top of the precomputed 30-day column.
///
/// Note that it is 20 and not 30: the dashboard has always smoothed the «mm30d» line this way.
pub const MM30D_WINDOW: usize = 20;

/// Build the daily series chart: daily average, 7-day and 30-day rolling means.
pub fn build_series_chart(table: &SeriesTable) -> Figure {
    let dates = table.dates();
    let daily = Scatter {
        x: dates.clone(),
        y: table.iter().map(|point| point.average_price).collect(),
        mode: Mode::Lines,
        name: "Daily".to_string(),
        line: Line { color: "#157806", width: None },
    };
    let mm7d = Scatter {
        x: dates.clone(),
        y: table.iter().map(|point| point.rolling_mean_7).collect(),
        mode: Mode::Lines,
        name: "mm7d".to_string(),
        line: Line { color: "#1af0ac", width: Some(2.0) },
    };
    let mm30d = Scatter {
        x: dates,
        y: table.iter().map(|point| point.rolling_mean_30).rolling_mean(MM30D_WINDOW),
        mode: Mode::Lines,
        name: "mm30d".to_string(),
        line: Line { color: "#adf03a", width: Some(2.0) },
    };

    let layout = Layout::builder()
        .title("Time series | Price per megawatt-hour (MWh) €")
        .x_axis(Axis::titled("Date"))
        .y_axis(Axis::titled(PRICE_AXIS_TITLE))
        .legend(Legend {
            orientation: Orientation::Horizontal,
            y_anchor: Anchor::Bottom,
            y: 1.02,
            x_anchor: Anchor::Center,
            x: 0.5,
        })
        .height(500)
        .width(CHART_WIDTH)
        .build();

    Figure {
        data: vec![Trace::Scatter(daily), Trace::Scatter(mm7d), Trace::Scatter(mm30d)],
        layout,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{Days, NaiveDate};
    use itertools::Itertools;

    use super::*;
    use crate::core::series::SeriesPoint;

    fn constant_table(n_days: u64, price: f64) -> SeriesTable {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let points = (0..n_days)
            .map(|offset| SeriesPoint {
                date: start + Days::new(offset),
                average_price: Some(price),
                rolling_mean_7: Some(price),
                rolling_mean_30: Some(price),
            })
            .collect_vec();
        SeriesTable::try_from_points(points).unwrap()
    }

    fn scatters(figure: &Figure) -> Vec<&Scatter> {
        figure
            .data
            .iter()
            .map(|trace| match trace {
                Trace::Scatter(scatter) => scatter,
                _ => panic!("expected only scatter traces"),
            })
            .collect()
    }

    #[test]
    fn test_three_series_in_order() {
        let figure = build_series_chart(&constant_table(3, 1.0));
        let names = scatters(&figure).iter().map(|scatter| scatter.name.as_str()).collect_vec();
        assert_eq!(names, ["Daily", "mm7d", "mm30d"]);
    }

    #[test]
    fn test_ten_constant_days() {
        let figure = build_series_chart(&constant_table(10, 50.0));
        let scatters = scatters(&figure);
        assert_eq!(scatters[0].x.len(), 10);
        assert_eq!(scatters[0].x[0], NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(scatters[0].x[9], NaiveDate::from_ymd_opt(2023, 1, 10).unwrap());
        assert!(scatters[0].y.iter().all(|value| *value == Some(50.0)));
        assert!(scatters[2].y.iter().all(Option::is_none));
    }

    #[test]
    fn test_mm30d_window_is_twenty() {
        let figure = build_series_chart(&constant_table(25, 80.0));
        let mm30d = &scatters(&figure)[2].y;
        assert!(mm30d[..19].iter().all(Option::is_none));
        assert_abs_diff_eq!(mm30d[19].unwrap(), 80.0);
        assert_abs_diff_eq!(mm30d[24].unwrap(), 80.0);
    }

    #[test]
    fn test_empty_table() {
        let figure = build_series_chart(&SeriesTable::default());
        assert_eq!(figure.data.len(), 3);
        assert!(scatters(&figure).iter().all(|scatter| scatter.x.is_empty()));
    }

    #[test]
    fn test_idempotent() {
        let table = constant_table(40, 12.5);
        assert_eq!(build_series_chart(&table), build_series_chart(&table));
    }

    #[test]
    fn test_layout() {
        let figure = build_series_chart(&constant_table(1, 1.0));
        assert_eq!(figure.layout.height, 500);
        assert_eq!(figure.layout.width, 1200);
        assert_eq!(figure.layout.legend.unwrap().orientation, Orientation::Horizontal);
    }
}
