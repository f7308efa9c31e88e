use serde::{Deserialize, Serialize};

/// Recommended visualization family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Area,
    Pie,
    Donut,
    Bar,
    HorizontalBar,
    GroupedBar,
    FlowDiagram,
    Scatter,
    CorrelationMatrix,
    AnnotatedScatter,
    Choropleth,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Area => "area",
            Self::Pie => "pie",
            Self::Donut => "donut",
            Self::Bar => "bar",
            Self::HorizontalBar => "horizontal_bar",
            Self::GroupedBar => "grouped_bar",
            Self::FlowDiagram => "flow_diagram",
            Self::Scatter => "scatter",
            Self::CorrelationMatrix => "correlation_matrix",
            Self::AnnotatedScatter => "annotated_scatter",
            Self::Choropleth => "choropleth",
        }
    }
}

/// What an axis encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisRole {
    Time,
    Category,
    Value,
    Share,
    Stage,
    Region,
    Unused,
}

/// Presentation hints for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmphasisHint {
    HighlightLatest,
    HighlightMax,
    SortDescending,
    ShowPercentages,
    ShowFlowVolumes,
    Trendline,
    AnnotateOutliers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartParams {
    pub x_axis: AxisRole,
    pub y_axis: AxisRole,
    /// Number of categories the chart has to show (0 when unknown).
    pub category_count: usize,
    #[serde(default)]
    pub emphasis: Vec<EmphasisHint>,
}

/// A chart recommendation: the kind tag plus its parameter record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub params: ChartParams,
}

/// A chart recommendation bound to the insight it visualizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartReference {
    pub insight_id: String,
    pub chart: ChartSpec,
}
