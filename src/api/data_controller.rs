use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::axes::AxisId;
use crate::core::{AxisDimension, AxisRange, AxisRangeKind, Datum};
use crate::error::{ChartError, ChartResult};
use crate::interaction::axes_for_series;
use crate::render::Renderer;

use super::{Chart, DomainUpdatePolicy};

/// One emission of the data stream: new points per series, and the latest
/// time the source has reached (which may be past the last point).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataBatch {
    pub max_time: f64,
    #[serde(default)]
    pub points: IndexMap<String, Vec<Datum>>,
}

impl DataBatch {
    #[must_use]
    pub fn new(max_time: f64) -> Self {
        Self {
            max_time,
            points: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_points(mut self, series: impl Into<String>, points: Vec<Datum>) -> Self {
        self.points.entry(series.into()).or_default().extend(points);
        self
    }

    fn validate(&self) -> ChartResult<()> {
        if !self.max_time.is_finite() {
            return Err(ChartError::InvalidData(
                "batch max time must be finite".to_owned(),
            ));
        }
        for (series, points) in &self.points {
            if points
                .iter()
                .any(|point| !point.time.is_finite() || !point.value.is_finite())
            {
                return Err(ChartError::InvalidData(format!(
                    "series `{series}` contains non-finite points"
                )));
            }
        }
        Ok(())
    }
}

/// Running bounds of one series, maintained from batches alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesExtent {
    pub count: usize,
    pub min_time: f64,
    pub max_time: f64,
    pub min_value: f64,
    pub max_value: f64,
}

impl Default for SeriesExtent {
    fn default() -> Self {
        Self {
            count: 0,
            min_time: f64::INFINITY,
            max_time: f64::NEG_INFINITY,
            min_value: f64::INFINITY,
            max_value: f64::NEG_INFINITY,
        }
    }
}

impl SeriesExtent {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.count == 0
    }

    pub fn include(&mut self, point: Datum) {
        self.count += 1;
        self.min_time = self.min_time.min(point.time);
        self.max_time = self.max_time.max(point.time);
        self.min_value = self.min_value.min(point.value);
        self.max_value = self.max_value.max(point.value);
    }
}

impl<R: Renderer> Chart<R> {
    /// Folds a streamed batch into the chart.
    ///
    /// Series extents grow by the batch only. Ordinal axes reached by a batch
    /// series gain it as a category. Continuous x axes of the batch series
    /// follow `max_time` according to the domain update policy; their pan and
    /// zoom state is kept. A batch that fails part way leaves the chart as it
    /// was before the call.
    pub fn ingest(&mut self, batch: &DataBatch) -> ChartResult<()> {
        batch.validate()?;
        self.atomically("ingest", |chart| chart.ingest_validated(batch))
    }

    fn ingest_validated(&mut self, batch: &DataBatch) -> ChartResult<()> {
        for (series, points) in &batch.points {
            if points.is_empty() {
                continue;
            }
            let extent = self.series.entry(series.clone()).or_default();
            for point in points {
                extent.include(*point);
            }
        }

        let names: Vec<&str> = batch.points.keys().map(String::as_str).collect();
        self.add_series_categories(&names)?;

        let policy = self.config.domain_update_policy;
        let dimensions = self.config.dimensions;
        let margin = self.config.margin;
        let ids = axes_for_series(
            names.iter().copied(),
            &self.assignments,
            AxisDimension::X,
            &self.x.axes,
        );
        for id in ids {
            let Some(range) = self.x.ranges.get(&id).copied() else {
                continue;
            };
            if range.kind() != AxisRangeKind::Continuous || range.is_empty() {
                continue;
            }
            if let Some(updated) = follow_time(range, batch.max_time, policy)? {
                trace!(axis_id = %id, max_time = batch.max_time, "time domain followed stream");
                let zoom_factor = effective_zoom_factor(updated);
                self.x
                    .apply_range(&id, updated, Some(zoom_factor), dimensions, margin)?;
            }
        }
        Ok(())
    }

    /// Shows only the categories of ordinal axis `id` whose names contain
    /// `fragment` (case-insensitive); `None` clears the filter.
    ///
    /// The band layout is recomputed and the range baseline redefined over
    /// the plot extent, keeping the current pan/zoom interval.
    pub fn set_category_filter(
        &mut self,
        dimension: AxisDimension,
        id: &str,
        fragment: Option<&str>,
    ) -> ChartResult<()> {
        self.atomically("category filter", |chart| {
            chart.filter_categories(dimension, id, fragment)
        })
    }

    fn filter_categories(
        &mut self,
        dimension: AxisDimension,
        id: &str,
        fragment: Option<&str>,
    ) -> ChartResult<()> {
        let dimensions = self.config.dimensions;
        let margin = self.config.margin;
        let state = self.dimension_mut(dimension);
        let Some(axis_id) = state.axes.resolve_id(id).cloned() else {
            return Err(ChartError::InvalidData(format!("unknown axis `{id}`")));
        };
        let Some(range) = state.ranges.get(&axis_id).copied() else {
            return Err(ChartError::InvalidData(format!(
                "axis `{axis_id}` has no range"
            )));
        };
        let Some(axis) = state.axes.axis_for_mut(axis_id.as_str()) else {
            return Err(ChartError::InvalidData(format!("unknown axis `{id}`")));
        };
        let ordinal = axis.as_ordinal_mut()?;
        ordinal.set_filter(fragment);
        let extent = dimensions.extent_along(ordinal.location());
        let visible = ordinal.visible_categories().len();

        let range = range.update_original(0.0, extent)?;
        let zoom_factor = effective_zoom_factor(range);
        state.apply_range(&axis_id, range, Some(zoom_factor), dimensions, margin)?;
        debug!(axis_id = %axis_id, ?fragment, visible, "category filter applied");
        Ok(())
    }

    fn add_series_categories(&mut self, names: &[&str]) -> ChartResult<()> {
        let dimensions = self.config.dimensions;
        let margin = self.config.margin;
        for dimension in [AxisDimension::X, AxisDimension::Y] {
            let mut touched: Vec<AxisId> = Vec::new();
            for name in names {
                let ids = axes_for_series(
                    [*name],
                    &self.assignments,
                    dimension,
                    &self.dimension(dimension).axes,
                );
                let measurer = self.measurer.as_ref();
                let state = match dimension {
                    AxisDimension::X => &mut self.x,
                    AxisDimension::Y => &mut self.y,
                };
                for id in ids {
                    let Some(axis) = state.axes.axis_for_mut(id.as_str()) else {
                        continue;
                    };
                    let Ok(ordinal) = axis.as_ordinal_mut() else {
                        continue;
                    };
                    if ordinal.add_category(name, measurer) && !touched.contains(&id) {
                        touched.push(id);
                    }
                }
            }

            let state = self.dimension_mut(dimension);
            for id in touched {
                let Some(range) = state.ranges.get(&id).copied() else {
                    continue;
                };
                debug!(axis_id = %id, "ordinal domain grew");
                state.apply_range(&id, range, None, dimensions, margin)?;
            }
        }
        Ok(())
    }
}

fn effective_zoom_factor(range: AxisRange) -> f64 {
    if range.is_at_original() {
        1.0
    } else {
        range.scale_factor()
    }
}

/// Moves the baseline of a continuous time range to cover `max_time`.
///
/// Returns `None` when the baseline already reaches `max_time`. A range
/// sitting on its baseline stays on it; a zoomed or panned range keeps its
/// interval (`Extend`) or slides along with the window (`Window`).
fn follow_time(
    range: AxisRange,
    max_time: f64,
    policy: DomainUpdatePolicy,
) -> ChartResult<Option<AxisRange>> {
    let original = range.original();
    if max_time <= original.end() {
        return Ok(None);
    }
    let at_original = range.is_at_original();
    let updated = match policy {
        DomainUpdatePolicy::Extend => range.update_original(original.start(), max_time)?,
        DomainUpdatePolicy::Window { duration } => {
            let shift = max_time - original.end();
            range
                .translate(shift)
                .update_original(max_time - duration, max_time)?
        }
    };
    Ok(Some(if at_original { updated.reset() } else { updated }))
}

#[cfg(test)]
mod tests {
    use super::{DataBatch, SeriesExtent, follow_time};
    use crate::api::DomainUpdatePolicy;
    use crate::core::{Datum, continuous_axis_range_for};

    #[test]
    fn extent_tracks_bounds_incrementally() {
        let mut extent = SeriesExtent::default();
        assert!(extent.is_empty());
        extent.include(Datum::new(5.0, -1.0));
        extent.include(Datum::new(2.0, 3.0));
        assert_eq!(extent.count, 2);
        assert_eq!((extent.min_time, extent.max_time), (2.0, 5.0));
        assert_eq!((extent.min_value, extent.max_value), (-1.0, 3.0));
    }

    #[test]
    fn extend_policy_grows_baseline_and_follows_when_unzoomed() {
        let range = continuous_axis_range_for(0.0, 100.0).expect("range");
        let updated = follow_time(range, 150.0, DomainUpdatePolicy::Extend)
            .expect("follow")
            .expect("changed");
        assert!(updated.matches_original(0.0, 150.0));
        assert!(updated.is_at_original());

        let zoomed = range.scale(0.5, 50.0);
        let updated = follow_time(zoomed, 150.0, DomainUpdatePolicy::Extend)
            .expect("follow")
            .expect("changed");
        assert!(updated.current().equals_interval(25.0, 75.0));

        assert!(
            follow_time(range, 80.0, DomainUpdatePolicy::Extend)
                .expect("follow")
                .is_none()
        );
    }

    #[test]
    fn window_policy_slides_view() {
        let range = continuous_axis_range_for(0.0, 100.0)
            .expect("range")
            .translate(-10.0);
        let updated = follow_time(range, 130.0, DomainUpdatePolicy::Window { duration: 100.0 })
            .expect("follow")
            .expect("changed");
        assert!(updated.matches_original(30.0, 130.0));
        assert!(updated.current().equals_interval(20.0, 120.0));
    }

    #[test]
    fn batch_rejects_non_finite_points() {
        let batch = DataBatch::new(1.0).with_points("s", vec![Datum::new(f64::NAN, 1.0)]);
        assert!(batch.validate().is_err());
        assert!(DataBatch::new(f64::INFINITY).validate().is_err());
    }
}
