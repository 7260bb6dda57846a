use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::axes::{Axis, AxisId};
use crate::core::{AxisDimension, AxisRange};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    InteractionMode, ZoomTransform, axes_for_series, calculate_constrained_zoom_for,
    calculate_pan_for, zoom_constraint,
};
use crate::render::Renderer;

use super::Chart;

impl<R: Renderer> Chart<R> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Distinct axes of `dimension` a gesture reaches: the axis of every
    /// known series, or the default axis when no series is known.
    #[must_use]
    pub fn gesture_axes(&self, dimension: AxisDimension) -> SmallVec<[AxisId; 4]> {
        let names = self.series_names();
        axes_for_series(
            names.iter().map(String::as_str),
            &self.assignments,
            dimension,
            &self.dimension(dimension).axes,
        )
    }

    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.interaction.on_pointer_down(x, y);
    }

    /// Applies the drag step since the previous pointer event, if panning.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        match self.interaction.on_pointer_move(x, y) {
            Some(delta) => self.pan(delta.dx, delta.dy),
            None => Ok(()),
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.interaction.on_pointer_up();
    }

    /// Aborts a drag. Ranges keep the last applied step.
    pub fn on_pointer_leave(&mut self) {
        if self.interaction.is_panning() {
            trace!("drag cancelled");
        }
        self.interaction.on_pointer_leave();
    }

    /// Pans every gesture axis by the pixel delta of its dimension.
    ///
    /// Dimensions disabled in the pan behaviour, or with a zero delta, are
    /// left alone. A drag past the baseline with `constrain_to_original` is a
    /// silent no-op for that axis.
    pub fn pan(&mut self, dx: f64, dy: f64) -> ChartResult<()> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(ChartError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        let behavior = self.config.pan;
        self.atomically("pan", |chart| {
            for (dimension, enabled, delta) in [
                (AxisDimension::X, behavior.pan_x, dx),
                (AxisDimension::Y, behavior.pan_y, dy),
            ] {
                if !enabled || delta == 0.0 {
                    continue;
                }
                let updates = chart.resolve_gesture(dimension, |axis, range| {
                    let range =
                        calculate_pan_for(delta, axis, range, behavior.constrain_to_original)?;
                    Ok((range, None))
                })?;
                chart.apply_updates(dimension, updates)?;
            }
            Ok(())
        })
    }

    /// Zooms every gesture axis to `transform.scale_factor`, anchored at the
    /// transform source.
    ///
    /// Either every gesture axis takes the zoom or, on error, none does.
    pub fn zoom(&mut self, transform: ZoomTransform) -> ChartResult<()> {
        let behavior = self.config.zoom;
        self.atomically("zoom", |chart| {
            for (dimension, enabled, source) in [
                (AxisDimension::X, behavior.zoom_x, transform.source_x),
                (AxisDimension::Y, behavior.zoom_y, transform.source_y),
            ] {
                if !enabled {
                    continue;
                }
                let updates = chart.resolve_gesture(dimension, |axis, range| {
                    let constraint = zoom_constraint(range, behavior.zoom_max);
                    let result =
                        calculate_constrained_zoom_for(transform, source, axis, range, constraint)?;
                    Ok((result.range, Some(result.zoom_factor)))
                })?;
                chart.apply_updates(dimension, updates)?;
            }
            Ok(())
        })
    }

    /// Zooms in response to a wheel event at `(x, y)`.
    ///
    /// The wheel step is applied on top of the zoom factor of the first
    /// gesture axis, so all axes receive the same absolute factor.
    pub fn wheel_zoom(&mut self, wheel_delta: f64, x: f64, y: f64) -> ChartResult<()> {
        let current = self.gesture_zoom_factor();
        let transform = ZoomTransform::from_wheel(
            wheel_delta,
            self.config.zoom.wheel_step_ratio,
            current,
            x,
            y,
        )?;
        match transform {
            Some(transform) => self.zoom(transform),
            None => Ok(()),
        }
    }

    /// Puts every range back on its baseline and every zoom factor to 1.
    pub fn reset_zoom(&mut self) -> ChartResult<()> {
        let dimensions = self.config.dimensions;
        let margin = self.config.margin;
        self.atomically("reset zoom", |chart| {
            for dimension in [AxisDimension::X, AxisDimension::Y] {
                let state = chart.dimension_mut(dimension);
                let resets: Vec<(AxisId, AxisRange)> = state
                    .ranges
                    .iter()
                    .map(|(id, range)| (id.clone(), range.reset()))
                    .collect();
                for (id, range) in resets {
                    state.apply_range(&id, range, Some(1.0), dimensions, margin)?;
                }
            }
            Ok(())
        })?;
        trace!("zoom reset");
        Ok(())
    }

    fn gesture_zoom_factor(&self) -> f64 {
        let behavior = self.config.zoom;
        let dimension = if behavior.zoom_x || !behavior.zoom_y {
            AxisDimension::X
        } else {
            AxisDimension::Y
        };
        self.gesture_axes(dimension)
            .first()
            .and_then(|id| self.dimension(dimension).zoom_factors.get(id).copied())
            .unwrap_or(1.0)
    }

    /// Computes the new range of every gesture axis of `dimension` from the
    /// same unchanged state, so all axes observe the same gesture.
    fn resolve_gesture<F>(
        &self,
        dimension: AxisDimension,
        mut step: F,
    ) -> ChartResult<Vec<(AxisId, AxisRange, Option<f64>)>>
    where
        F: FnMut(&Axis, AxisRange) -> ChartResult<(AxisRange, Option<f64>)>,
    {
        let state = self.dimension(dimension);
        let ids = self.gesture_axes(dimension);
        let mut updates = Vec::with_capacity(ids.len());
        for id in ids {
            let Some(range) = state.ranges.get(&id).copied() else {
                warn!(axis_id = %id, ?dimension, "no range for axis, gesture skipped");
                continue;
            };
            let Some(axis) = state.axes.axis_for(id.as_str()) else {
                continue;
            };
            let (range, zoom_factor) = step(axis, range)?;
            updates.push((id, range, zoom_factor));
        }
        trace!(?dimension, axes = updates.len(), "gesture fan-out");
        Ok(updates)
    }

    fn apply_updates(
        &mut self,
        dimension: AxisDimension,
        updates: Vec<(AxisId, AxisRange, Option<f64>)>,
    ) -> ChartResult<()> {
        let dimensions = self.config.dimensions;
        let margin = self.config.margin;
        let state = self.dimension_mut(dimension);
        for (id, range, zoom_factor) in updates {
            state.apply_range(&id, range, zoom_factor, dimensions, margin)?;
        }
        Ok(())
    }
}
