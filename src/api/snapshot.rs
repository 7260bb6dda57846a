use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisDimension, AxisLocation, AxisRangeKind, Dimensions, Interval, Margin};
use crate::interaction::AxisAssignment;
use crate::render::Renderer;

use super::{Chart, SeriesExtent};

/// Zoom/pan state of one axis at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub id: String,
    pub dimension: AxisDimension,
    pub location: AxisLocation,
    pub kind: AxisRangeKind,
    pub current: Interval,
    pub original: Interval,
    pub zoom_factor: f64,
}

/// Serializable chart state used by regression tests and debugging tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub chart_id: u32,
    pub dimensions: Dimensions,
    pub margin: Margin,
    pub axes: Vec<AxisSnapshot>,
    pub assignments: IndexMap<String, AxisAssignment>,
    pub series: IndexMap<String, SeriesExtent>,
}

impl ChartSnapshot {
    #[must_use]
    pub fn axis(&self, dimension: AxisDimension, id: &str) -> Option<&AxisSnapshot> {
        self.axes
            .iter()
            .find(|axis| axis.dimension == dimension && axis.id == id)
    }
}

impl<R: Renderer> Chart<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let mut axes = Vec::with_capacity(self.x.axes.len() + self.y.axes.len());
        for dimension in [AxisDimension::X, AxisDimension::Y] {
            let state = self.dimension(dimension);
            for (id, axis) in state.axes.iter() {
                let Some(range) = state.ranges.get(id) else {
                    continue;
                };
                axes.push(AxisSnapshot {
                    id: id.to_string(),
                    dimension,
                    location: axis.location(),
                    kind: axis.kind(),
                    current: range.current(),
                    original: range.original(),
                    zoom_factor: state.zoom_factors.get(id).copied().unwrap_or(1.0),
                });
            }
        }
        ChartSnapshot {
            chart_id: self.config.chart_id,
            dimensions: self.config.dimensions,
            margin: self.config.margin,
            axes,
            assignments: self.assignments.clone(),
            series: self.series.clone(),
        }
    }
}
