use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{distribution::DistributionBucket, headline::Tile},
    quantity::price::MegawattHourPrice,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn price_cell(price: MegawattHourPrice) -> Cell {
    Cell::new(format!("{price:.1}")).set_alignment(CellAlignment::Right)
}

pub fn build_tiles_table(tiles: &[Tile]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    for tile in tiles {
        table.add_row(vec![
            Cell::new(&tile.label),
            match tile.value {
                Some(value) => price_cell(value),
                None => Cell::new("n/a").add_attribute(Attribute::Dim),
            },
        ]);
    }
    table
}

pub fn build_distribution_table(buckets: &[DistributionBucket]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Period", "Count", "Min", "Q1", "Median", "Q3", "Max", "Mean", "Std. dev.",
    ]);
    for bucket in buckets {
        let Some(stats) = bucket.stats() else {
            continue;
        };
        table.add_row(vec![
            Cell::new(&bucket.period),
            Cell::new(stats.count)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            price_cell(stats.min).fg(Color::Green),
            price_cell(stats.q1),
            price_cell(stats.median),
            price_cell(stats.q3),
            price_cell(stats.max).fg(Color::Red),
            price_cell(stats.mean),
            stats.std_dev.map_or_else(|| Cell::new("n/a"), price_cell),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_table() {
        let tiles = [
            Tile {
                label: "Average price 2021 €".to_string(),
                value: Some(MegawattHourPrice(110.6)),
            },
            Tile { label: "Overall average price €".to_string(), value: None },
        ];
        let rendered = build_tiles_table(&tiles).to_string();
        assert!(rendered.contains("110.6 €/MWh"));
        assert!(rendered.contains("n/a"));
    }

    #[test]
    fn test_distribution_table() {
        let buckets = [
            DistributionBucket { period: "Jan".to_string(), prices: vec![100.0, 200.0] },
            DistributionBucket { period: "Feb".to_string(), prices: vec![] },
        ];
        let rendered = build_distribution_table(&buckets).to_string();
        assert!(rendered.contains("Jan"));
        assert!(rendered.contains("150.0 €/MWh"));
        assert!(!rendered.contains("Feb"));
    }
}
