use std::fmt::Write;

use bon::Builder;

use crate::{
    chart::Figure,
    core::{
        headline::Tile,
        selection::{MONTHS, Selection, YEARS},
    },
    prelude::*,
};

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Electricity prices</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
<style>
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 2rem; }
.tiles { display: flex; gap: 1rem; }
.tile { flex: 1; border: 1px solid #d3d3d3; border-radius: 8px; padding: 1rem; }
.tile .label { color: gray; font-size: 0.9rem; }
.tile .value { font-size: 2rem; }
.controls { display: flex; gap: 1rem; margin: 1rem 0; }
footer { text-align: center; color: gray; border-top: 1px solid #d3d3d3; padding-top: 1rem; }
</style>
</head>
<body>
"#;

const UPDATE_HEATMAP_SCRIPT: &str = r"
async function updateHeatmap() {
    const year = document.getElementById('year').value;
    const month = document.getElementById('month').value;
    const response = await fetch(`/charts/heatmap?year=${year}&month=${month}`);
    if (!response.ok) {
        console.error('failed to fetch the heatmap', response.status);
        return;
    }
    const figure = await response.json();
    Plotly.react('heatmap', figure.data, figure.layout);
}
document.getElementById('year').addEventListener('change', updateHeatmap);
document.getElementById('month').addEventListener('change', updateHeatmap);
";

/// Dashboard page: headline tiles, the charts and the heatmap selection.
#[derive(Builder)]
pub struct Dashboard<'a> {
    tiles: &'a [Tile],
    series: &'a Figure,
    distribution: &'a Figure,
    heatmap: &'a Figure,
    selection: Selection,

    /// Render the selectors that re-fetch the heatmap from the server.
    #[builder(default)]
    interactive: bool,
}

impl Dashboard<'_> {
    pub fn render(&self) -> Result<String> {
        let mut html = String::from(HEAD);
        writeln!(html, "<h1>Energy price indicators</h1>")?;

        writeln!(html, "<h2>Price statistics</h2>")?;
        writeln!(html, r#"<div class="tiles">"#)?;
        for tile in self.tiles {
            let value = tile.value.map_or_else(String::new, |value| format!("{:.1}", value.0));
            writeln!(
                html,
                r#"<div class="tile"><div class="label">{}</div><div class="value">{value}</div></div>"#,
                tile.label,
            )?;
        }
        writeln!(html, "</div>")?;

        writeln!(html, r#"<div id="series"></div>"#)?;
        writeln!(html, r#"<div id="distribution"></div>"#)?;

        writeln!(html, "<h2>Price by day and hour of consumption</h2>")?;
        if self.interactive {
            self.write_selectors(&mut html)?;
        } else {
            writeln!(html, "<p>Selected month: {}</p>", self.selection)?;
        }
        writeln!(html, r#"<div id="heatmap"></div>"#)?;

        writeln!(html, "<footer>Energy cost dashboard | Data provided by Enefit</footer>")?;

        writeln!(html, "<script>")?;
        writeln!(
            html,
            "const figures = {{\"series\": {}, \"distribution\": {}, \"heatmap\": {}}};",
            to_script_json(self.series)?,
            to_script_json(self.distribution)?,
            to_script_json(self.heatmap)?,
        )?;
        writeln!(
            html,
            "for (const [id, figure] of Object.entries(figures)) {{ Plotly.newPlot(id, figure.data, figure.layout); }}",
        )?;
        if self.interactive {
            html.push_str(UPDATE_HEATMAP_SCRIPT);
        }
        writeln!(html, "</script>\n</body>\n</html>")?;
        Ok(html)
    }

    fn write_selectors(&self, html: &mut String) -> Result {
        writeln!(html, r#"<div class="controls">"#)?;
        writeln!(html, r#"<label>Year <select id="year">"#)?;
        for year in YEARS {
            let selected = if year == self.selection.year { " selected" } else { "" };
            writeln!(html, r#"<option value="{year}"{selected}>{year}</option>"#)?;
        }
        writeln!(html, "</select></label>")?;
        writeln!(html, r#"<label>Month <select id="month">"#)?;
        for month in MONTHS {
            let selected = if month == self.selection.month { " selected" } else { "" };
            writeln!(html, r#"<option value="{month}"{selected}>{month}</option>"#)?;
        }
        writeln!(html, "</select></label>")?;
        writeln!(html, "</div>")?;
        Ok(())
    }
}

/// Serialize the figure for embedding into a `<script>` element.
///
/// `<` only occurs inside JSON strings, so escaping it keeps labels from closing the element.
fn to_script_json(figure: &Figure) -> Result<String> {
    Ok(serde_json::to_string(figure)?.replace('<', "\\u003c"))
}
