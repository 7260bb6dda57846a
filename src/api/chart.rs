use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::axes::{
    AxesState, Axis, AxisId, AxisOptions, EstimatedTextMeasurer, TextMeasurer,
    add_continuous_numeric_axis, add_ordinal_axis,
};
use crate::core::{
    AxisDimension, AxisLocation, AxisRange, AxisRangeKind, Dimensions, Margin,
    continuous_axis_range_for, ordinal_axis_range_for, scale_ordinal_bounds,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{AxisAssignment, AxisAssignments, InteractionState};
use crate::render::{RenderFrame, Renderer};

use super::{ChartConfig, SeriesExtent};

/// Axes of one plot dimension together with their zoom/pan state.
#[derive(Debug, Clone, Default)]
pub(super) struct DimensionState {
    pub(super) axes: AxesState,
    pub(super) ranges: IndexMap<AxisId, AxisRange>,
    pub(super) zoom_factors: IndexMap<AxisId, f64>,
}

impl DimensionState {
    /// Stores `range` for `id` and pushes it into the axis mapping.
    pub(super) fn apply_range(
        &mut self,
        id: &AxisId,
        range: AxisRange,
        zoom_factor: Option<f64>,
        dimensions: Dimensions,
        margin: Margin,
    ) -> ChartResult<()> {
        let Some(axis) = self.axes.axis_for_mut(id.as_str()) else {
            return Err(ChartError::InvalidData(format!("unknown axis `{id}`")));
        };
        axis.update(range, dimensions, margin)?;
        self.ranges.insert(id.clone(), range);
        if let Some(zoom_factor) = zoom_factor {
            self.zoom_factors.insert(id.clone(), zoom_factor);
        }
        Ok(())
    }
}

/// Axis and series state a failed mutation is rolled back to.
struct Checkpoint {
    x: DimensionState,
    y: DimensionState,
    dimensions: Dimensions,
    series: IndexMap<String, SeriesExtent>,
}

/// Per-chart controller consumed by host applications.
///
/// `Chart` owns the axes of both plot dimensions, their ranges and zoom
/// factors, the series-to-axis assignments and the streamed series extents.
/// Every mutation ends with the affected axes updated, so a following
/// [`Chart::render`] always draws a consistent state.
pub struct Chart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) measurer: Box<dyn TextMeasurer>,
    pub(super) x: DimensionState,
    pub(super) y: DimensionState,
    pub(super) assignments: AxisAssignments,
    pub(super) series: IndexMap<String, SeriesExtent>,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer> Chart<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        debug!(
            chart_id = config.chart_id,
            width = config.dimensions.width,
            height = config.dimensions.height,
            "chart created"
        );
        Ok(Self {
            renderer,
            config,
            measurer: Box::new(EstimatedTextMeasurer),
            x: DimensionState::default(),
            y: DimensionState::default(),
            assignments: AxisAssignments::new(),
            series: IndexMap::new(),
            interaction: InteractionState::default(),
        })
    }

    /// Replaces the text measurer used to size ordinal tick labels.
    ///
    /// Only axes created afterwards are measured with it.
    #[must_use]
    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    #[must_use]
    pub fn margin(&self) -> Margin {
        self.config.margin
    }

    /// Axis options seeded from this chart's configuration.
    #[must_use]
    pub fn axis_options(&self, label: impl Into<String>) -> AxisOptions {
        self.config.axis_options(label)
    }

    #[must_use]
    pub fn axes(&self, dimension: AxisDimension) -> &AxesState {
        &self.dimension(dimension).axes
    }

    /// Axis stored under `id`, falling back to the dimension's first axis.
    #[must_use]
    pub fn axis(&self, dimension: AxisDimension, id: &str) -> Option<&Axis> {
        self.dimension(dimension).axes.axis_for(id)
    }

    /// Range of the axis registered under `id`; no fallback.
    #[must_use]
    pub fn range(&self, dimension: AxisDimension, id: &str) -> Option<AxisRange> {
        self.dimension(dimension).ranges.get(id).copied()
    }

    #[must_use]
    pub fn zoom_factor(&self, dimension: AxisDimension, id: &str) -> Option<f64> {
        self.dimension(dimension).zoom_factors.get(id).copied()
    }

    #[must_use]
    pub fn assignments(&self) -> &AxisAssignments {
        &self.assignments
    }

    #[must_use]
    pub fn series_extent(&self, name: &str) -> Option<&SeriesExtent> {
        self.series.get(name)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Registers a continuous axis over `domain`.
    pub fn add_continuous_axis(
        &mut self,
        id: impl Into<AxisId>,
        location: AxisLocation,
        domain: (f64, f64),
        options: AxisOptions,
    ) -> ChartResult<()> {
        let id = id.into();
        let range = continuous_axis_range_for(domain.0, domain.1)?;
        let axis = add_continuous_numeric_axis(
            self.config.chart_id,
            id.clone(),
            location,
            domain,
            options,
            self.config.dimensions,
            self.config.margin,
        )?;
        self.register_axis(id, axis.into(), range);
        Ok(())
    }

    /// Registers an ordinal axis whose bands span the plot along `location`.
    pub fn add_ordinal_axis(
        &mut self,
        id: impl Into<AxisId>,
        location: AxisLocation,
        categories: &[String],
        options: AxisOptions,
    ) -> ChartResult<()> {
        let id = id.into();
        let extent = self.config.dimensions.extent_along(location);
        let range = ordinal_axis_range_for(0.0, extent)?;
        let axis = add_ordinal_axis(
            self.config.chart_id,
            id.clone(),
            location,
            categories,
            options,
            self.measurer.as_ref(),
            self.config.dimensions,
            self.config.margin,
        )?;
        self.register_axis(id, axis.into(), range);
        Ok(())
    }

    /// Draws `series` against the axes named in `assignment`.
    pub fn assign_series(&mut self, series: impl Into<String>, assignment: AxisAssignment) {
        let series = series.into();
        trace!(
            series = %series,
            x_axis = ?assignment.x_axis_id,
            y_axis = ?assignment.y_axis_id,
            "series assigned"
        );
        self.assignments.insert(series, assignment);
    }

    /// Resizes the plot area.
    ///
    /// Ordinal ranges are rescaled by the size ratio so their zoom level is
    /// kept; continuous ranges are data-space and stay as they are. Every axis
    /// is then updated against the new size. On error nothing changes.
    pub fn resize(&mut self, dimensions: Dimensions) -> ChartResult<()> {
        let dimensions = dimensions.validate()?;
        self.atomically("resize", |chart| chart.resize_axes(dimensions))
    }

    fn resize_axes(&mut self, dimensions: Dimensions) -> ChartResult<()> {
        let previous = self.config.dimensions;
        let margin = self.config.margin;
        for (dimension, state) in [
            (AxisDimension::X, &mut self.x),
            (AxisDimension::Y, &mut self.y),
        ] {
            let (before, after) = match dimension {
                AxisDimension::X => (previous.width, dimensions.width),
                AxisDimension::Y => (previous.height, dimensions.height),
            };
            let ids: Vec<AxisId> = state.axes.ids().cloned().collect();
            for id in ids {
                let Some(range) = state.ranges.get(&id).copied() else {
                    continue;
                };
                let range = match range.kind() {
                    AxisRangeKind::Ordinal => scale_ordinal_bounds(before, after, range)?,
                    AxisRangeKind::Continuous => range,
                };
                state.apply_range(&id, range, None, dimensions, margin)?;
            }
        }
        self.config.dimensions = dimensions;
        debug!(
            width = dimensions.width,
            height = dimensions.height,
            "chart resized"
        );
        Ok(())
    }

    /// Draws every axis of both dimensions.
    pub fn render(&mut self) -> ChartResult<()> {
        let mut frame = RenderFrame::new(self.config.dimensions, self.config.margin);
        for (_, axis) in self.x.axes.iter().chain(self.y.axes.iter()) {
            frame = axis.rendering().append_to(frame);
        }
        trace!(
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "render frame built"
        );
        self.renderer.render(&frame)
    }

    /// Names of every series known to the chart, assigned ones first.
    pub(super) fn series_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.assignments.keys().cloned().collect();
        for name in self.series.keys() {
            if !self.assignments.contains_key(name) {
                names.push(name.clone());
            }
        }
        names
    }

    pub(super) fn dimension(&self, dimension: AxisDimension) -> &DimensionState {
        match dimension {
            AxisDimension::X => &self.x,
            AxisDimension::Y => &self.y,
        }
    }

    pub(super) fn dimension_mut(&mut self, dimension: AxisDimension) -> &mut DimensionState {
        match dimension {
            AxisDimension::X => &mut self.x,
            AxisDimension::Y => &mut self.y,
        }
    }

    /// Runs `mutate` as one step: when it fails, axes, ranges, zoom factors,
    /// plot size and series extents are restored to their state before the
    /// call, so no axis keeps a partially applied update.
    pub(super) fn atomically<T>(
        &mut self,
        operation: &'static str,
        mutate: impl FnOnce(&mut Self) -> ChartResult<T>,
    ) -> ChartResult<T> {
        let checkpoint = Checkpoint {
            x: self.x.clone(),
            y: self.y.clone(),
            dimensions: self.config.dimensions,
            series: self.series.clone(),
        };
        mutate(self).inspect_err(|err| {
            warn!(operation, error = %err, "chart update rolled back");
            self.x = checkpoint.x;
            self.y = checkpoint.y;
            self.config.dimensions = checkpoint.dimensions;
            self.series = checkpoint.series;
        })
    }

    fn register_axis(&mut self, id: AxisId, axis: Axis, range: AxisRange) {
        let dimension = axis.dimension();
        debug!(
            axis_id = %id,
            kind = %axis.kind(),
            ?dimension,
            start = range.start(),
            end = range.end(),
            "axis registered"
        );
        let state = self.dimension_mut(dimension);
        state.axes = state.axes.add_axis(axis, id.clone());
        state.ranges.insert(id.clone(), range);
        state.zoom_factors.insert(id, 1.0);
    }
}
