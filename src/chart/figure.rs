//! Plotly figure model, serialized into the JSON accepted by `Plotly.newPlot`.

use bon::Builder;
use chrono::NaiveDate;
use serde::Serialize;
use serde_with::skip_serializing_none;

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(Scatter),
    Box(BoxPlot),
    Heatmap(Heatmap),
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scatter {
    pub x: Vec<NaiveDate>,

    /// Missing values are serialized as `null` and render as gaps.
    pub y: Vec<Option<f64>>,

    pub mode: Mode,
    pub name: String,
    pub line: Line,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Lines,
}

#[must_use]
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Line {
    pub color: &'static str,
    pub width: Option<f64>,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoxPlot {
    pub y: Vec<f64>,
    pub name: String,
    #[serde(rename = "boxmean")]
    pub box_mean: BoxMean,
    pub width: f64,
    pub marker: Marker,
}

/// What the box plot shows in addition to the quartiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum BoxMean {
    #[serde(rename = "sd")]
    MeanAndStandardDeviation,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub color: &'static str,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Heatmap {
    /// Rows follow `y`, columns follow `x`.
    pub z: Vec<Vec<Option<f64>>>,
    pub x: Vec<u32>,
    pub y: Vec<String>,
    #[serde(rename = "colorscale")]
    pub color_scale: &'static str,
    #[serde(rename = "showscale")]
    pub show_scale: bool,
    #[serde(rename = "colorbar")]
    pub color_bar: ColorBar,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ColorBar {
    pub thickness: u32,
    pub len: f64,
}

#[must_use]
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Builder)]
pub struct Layout {
    #[builder(into)]
    pub title: Title,

    #[serde(rename = "xaxis")]
    pub x_axis: Axis,

    #[serde(rename = "yaxis")]
    pub y_axis: Axis,

    pub legend: Option<Legend>,

    #[serde(rename = "showlegend")]
    pub show_legend: Option<bool>,

    pub height: u32,
    pub width: u32,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Title {
    pub text: String,
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

#[must_use]
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,

    #[serde(rename = "type")]
    pub kind: Option<AxisKind>,

    #[serde(rename = "tickangle")]
    pub tick_angle: Option<f64>,
}

impl Axis {
    pub fn titled(title: &str) -> Self {
        Self { title: title.into(), kind: None, tick_angle: None }
    }

    pub const fn with_kind(mut self, kind: AxisKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub const fn with_tick_angle(mut self, tick_angle: f64) -> Self {
        self.tick_angle = Some(tick_angle);
        self
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Category,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: Orientation,
    #[serde(rename = "yanchor")]
    pub y_anchor: Anchor,
    pub y: f64,
    #[serde(rename = "xanchor")]
    pub x_anchor: Anchor,
    pub x: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Bottom,
    Center,
}
