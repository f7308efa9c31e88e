//! Parameter records per chart kind.

use storyline_core::models::{AxisRole, ChartKind, ChartParams, ChartSpec, EmphasisHint};

/// Axis roles and default emphasis for a chart kind.
pub fn defaults_for(kind: ChartKind) -> (AxisRole, AxisRole, Vec<EmphasisHint>) {
    use AxisRole::*;
    use EmphasisHint::*;
    match kind {
        ChartKind::Line => (Time, Value, vec![HighlightLatest, Trendline]),
        ChartKind::Area => (Time, Share, vec![HighlightLatest, ShowPercentages]),
        ChartKind::Pie | ChartKind::Donut => (Category, Share, vec![ShowPercentages, HighlightMax]),
        ChartKind::GroupedBar => (Category, Share, vec![SortDescending, ShowPercentages]),
        ChartKind::HorizontalBar => (Value, Category, vec![SortDescending]),
        ChartKind::Bar => (Category, Value, vec![HighlightMax]),
        ChartKind::FlowDiagram => (Stage, Value, vec![ShowFlowVolumes]),
        ChartKind::Scatter => (Value, Value, vec![Trendline]),
        ChartKind::CorrelationMatrix => (Category, Category, vec![HighlightMax]),
        ChartKind::AnnotatedScatter => (Value, Value, vec![AnnotateOutliers]),
        ChartKind::Choropleth => (Region, Value, vec![HighlightMax]),
    }
}

/// Build a chart spec with the kind's default parameters.
pub fn spec(kind: ChartKind, category_count: usize) -> ChartSpec {
    let (x_axis, y_axis, emphasis) = defaults_for(kind);
    ChartSpec {
        kind,
        params: ChartParams {
            x_axis,
            y_axis,
            category_count,
            emphasis,
        },
    }
}

/// Build a chart spec and append an extra emphasis hint.
pub fn spec_with(kind: ChartKind, category_count: usize, extra: EmphasisHint) -> ChartSpec {
    let mut spec = spec(kind, category_count);
    if !spec.params.emphasis.contains(&extra) {
        spec.params.emphasis.push(extra);
    }
    spec
}
