use crate::{
    chart::{
        CHART_WIDTH,
        PRICE_AXIS_TITLE,
        figure::{Axis, AxisKind, BoxMean, BoxPlot, Figure, Layout, Marker, Trace},
    },
    core::distribution::{DistributionRow, bucket_by_period},
};

/// Build the per-period box plots, outliers excluded.
pub fn build_distribution_chart(rows: &[DistributionRow]) -> Figure {
    let data = bucket_by_period(rows)
        .into_iter()
        .map(|bucket| {
            Trace::Box(BoxPlot {
                y: bucket.prices,
                name: bucket.period,
                box_mean: BoxMean::MeanAndStandardDeviation,
                width: 0.5,
                marker: Marker { color: "#db4061" },
            })
        })
        .collect();
    let layout = Layout::builder()
        .title("Price distribution per megawatt-hour (MWh) € | Monthly")
        .x_axis(Axis::titled("Month").with_kind(AxisKind::Category).with_tick_angle(90.0))
        .y_axis(Axis::titled(PRICE_AXIS_TITLE))
        .show_legend(false)
        .height(500)
        .width(CHART_WIDTH)
        .build();
    Figure { data, layout }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::distribution::OUTLIER_THRESHOLD;

    fn boxes(figure: &Figure) -> Vec<&BoxPlot> {
        figure
            .data
            .iter()
            .map(|trace| match trace {
                Trace::Box(box_plot) => box_plot,
                _ => panic!("expected only box traces"),
            })
            .collect()
    }

    #[test]
    fn test_one_box_per_period() {
        let rows = [
            DistributionRow::new("Jan", 100.0),
            DistributionRow::new("Feb", 300.0),
            DistributionRow::new("Jan", 200.0),
            DistributionRow::new("Jan", 5000.0),
        ];
        let figure = build_distribution_chart(&rows);
        let boxes = boxes(&figure);
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].name, "Jan");
        assert_eq!(boxes[0].y, [100.0, 200.0]);
        assert_eq!(boxes[1].name, "Feb");
        assert_eq!(boxes[0].box_mean, BoxMean::MeanAndStandardDeviation);
    }

    #[test]
    fn test_no_outlier_reaches_the_chart() {
        let rows = (0..50)
            .map(|i| DistributionRow::new(if i % 2 == 0 { "A" } else { "B" }, f64::from(i) * 150.0))
            .collect::<Vec<_>>();
        let figure = build_distribution_chart(&rows);
        for box_plot in boxes(&figure) {
            assert!(box_plot.y.iter().all(|price| *price < OUTLIER_THRESHOLD));
        }
    }

    #[test]
    fn test_layout() {
        let layout = build_distribution_chart(&[]).layout;
        assert_eq!(layout.show_legend, Some(false));
        assert_eq!(layout.x_axis.kind, Some(AxisKind::Category));
        assert_eq!(layout.x_axis.tick_angle, Some(90.0));
        assert_eq!(layout.legend, None);
    }

    #[test]
    fn test_idempotent() {
        let rows = [DistributionRow::new("Jan", 1.0), DistributionRow::new("Feb", 2.0)];
        assert_eq!(build_distribution_chart(&rows), build_distribution_chart(&rows));
    }
}
