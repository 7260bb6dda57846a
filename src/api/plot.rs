use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{AxisDimension, AxisRangeKind};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::Chart;

/// Kind of plot drawn in a chart; each kind fixes the axis kinds it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    /// Time-value samples.
    Scatter,
    /// Spike events: time against one band per series.
    Raster,
    /// Iterates `x[n]` against `x[n+1]`.
    Poincare,
    /// One bar per category.
    Bar,
}

impl PlotKind {
    #[must_use]
    pub fn required_axis_kind(self, dimension: AxisDimension) -> AxisRangeKind {
        match (self, dimension) {
            (Self::Raster, AxisDimension::Y) | (Self::Bar, AxisDimension::X) => {
                AxisRangeKind::Ordinal
            }
            _ => AxisRangeKind::Continuous,
        }
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scatter => "scatter",
            Self::Raster => "raster",
            Self::Poincare => "poincare",
            Self::Bar => "bar",
        };
        f.write_str(name)
    }
}

impl<R: Renderer> Chart<R> {
    /// Checks that every axis of the chart has the kind `plot` draws on.
    ///
    /// Fails when a dimension has no axis at all, or with
    /// [`ChartError::AxisKindMismatch`] naming the plot for the first axis of
    /// the wrong kind.
    pub fn validate_plot(&self, plot: PlotKind) -> ChartResult<()> {
        for dimension in [AxisDimension::X, AxisDimension::Y] {
            let axes = &self.dimension(dimension).axes;
            if axes.is_empty() {
                return Err(ChartError::InvalidData(format!(
                    "{plot} plot needs at least one {dimension:?} axis"
                )));
            }
            let expected = plot.required_axis_kind(dimension);
            let context = format!("{plot} plot {dimension:?} axis");
            for (_, axis) in axes.iter() {
                axis.ensure_kind(expected, &context)?;
            }
        }
        Ok(())
    }
}
