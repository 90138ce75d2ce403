use crate::{
    chart::{
        CHART_WIDTH,
        figure::{Axis, ColorBar, Figure, Heatmap, Layout, Trace},
    },
    core::{heatmap::HeatmapMatrix, observation::PriceObservation},
};

/// Build the hour-vs-day heatmap of the selected month.
///
/// An empty selection yields a heatmap without cells.
pub fn build_heatmap_chart(observations: &[PriceObservation], year: i32, month: u32) -> Figure {
    let matrix = HeatmapMatrix::build(observations, year, month);
    let heatmap = Heatmap {
        y: matrix.hour_labels(),
        x: matrix.days,
        z: matrix.values,
        color_scale: "Reds",
        show_scale: true,
        color_bar: ColorBar { thickness: 10, len: 0.5 },
    };
    let layout = Layout::builder()
        .title("Behaviour between hour and day")
        .x_axis(Axis::titled("Days"))
        .y_axis(Axis::titled("Hour"))
        .height(700)
        .width(CHART_WIDTH)
        .build();
    Figure { data: vec![Trace::Heatmap(heatmap)], layout }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn heatmap(figure: &Figure) -> &Heatmap {
        match figure.data.as_slice() {
            [Trace::Heatmap(heatmap)] => heatmap,
            _ => panic!("expected a single heatmap trace"),
        }
    }

    #[test]
    fn test_only_selected_month() {
        let observations = [
            PriceObservation::new(2022, 3, 1, 0, 10.0),
            PriceObservation::new(2022, 4, 1, 0, 20.0),
            PriceObservation::new(2023, 3, 2, 0, 30.0),
        ];
        let figure = build_heatmap_chart(&observations, 2022, 3);
        let heatmap = heatmap(&figure);
        assert_eq!(heatmap.x, [1]);
        assert_eq!(heatmap.y, ["0"]);
        assert_eq!(heatmap.z, [[Some(10.0)]]);
    }

    #[test]
    fn test_rows_sorted_by_hour() {
        let observations = (0..24)
            .rev()
            .map(|hour| PriceObservation::new(2023, 7, 4, hour, f64::from(hour)))
            .collect_vec();
        let figure = build_heatmap_chart(&observations, 2023, 7);
        let heatmap = heatmap(&figure);
        assert_eq!(heatmap.y, (0..24).map(|hour| hour.to_string()).collect_vec());
        assert_eq!(heatmap.z[0], [Some(0.0)]);
        assert_eq!(heatmap.z[23], [Some(23.0)]);
    }

    #[test]
    fn test_empty_selection_is_not_an_error() {
        let observations = [PriceObservation::new(2023, 1, 1, 0, 1.0)];
        let figure = build_heatmap_chart(&observations, 2021, 5);
        let heatmap = heatmap(&figure);
        assert!(heatmap.z.is_empty());
        assert!(heatmap.x.is_empty());
        assert!(heatmap.y.is_empty());
        assert_eq!(heatmap.color_scale, "Reds");
    }

    #[test]
    fn test_idempotent() {
        let observations = [
            PriceObservation::new(2023, 1, 1, 0, 1.0),
            PriceObservation::new(2023, 1, 2, 1, 2.0),
        ];
        assert_eq!(
            build_heatmap_chart(&observations, 2023, 1),
            build_heatmap_chart(&observations, 2023, 1),
        );
    }
}
