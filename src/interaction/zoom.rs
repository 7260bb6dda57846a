use serde::{Deserialize, Serialize};

use crate::axes::Axis;
use crate::core::{AxisRange, AxisRangeKind, Interval};
use crate::error::{ChartError, ChartResult};

/// Wheel delta of one notch on a standard mouse wheel.
pub const WHEEL_STEP_UNITS: f64 = 120.0;

/// Zoom request: an absolute scale factor and the pointer position it is
/// anchored at, in plot pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub scale_factor: f64,
    pub source_x: f64,
    pub source_y: f64,
}

impl ZoomTransform {
    pub fn new(scale_factor: f64, source_x: f64, source_y: f64) -> ChartResult<Self> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom scale factor must be finite and > 0".to_owned(),
            ));
        }
        if !source_x.is_finite() || !source_y.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom source must be finite".to_owned(),
            ));
        }
        Ok(Self {
            scale_factor,
            source_x,
            source_y,
        })
    }

    /// Turns a wheel event into an absolute zoom transform.
    ///
    /// Each notch multiplies `current_factor` by `1 + step_ratio`; a positive
    /// delta (wheel down) widens the visible span. Returns `None` for a zero
    /// delta.
    pub fn from_wheel(
        wheel_delta: f64,
        step_ratio: f64,
        current_factor: f64,
        source_x: f64,
        source_y: f64,
    ) -> ChartResult<Option<Self>> {
        if wheel_delta == 0.0 {
            return Ok(None);
        }
        if !step_ratio.is_finite() || step_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "wheel zoom step ratio must be finite and > 0".to_owned(),
            ));
        }

        let normalized_steps = wheel_delta / WHEEL_STEP_UNITS;
        let factor = current_factor * (1.0 + step_ratio).powf(normalized_steps);
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ChartError::InvalidData(
                "computed wheel zoom factor must be finite and > 0".to_owned(),
            ));
        }
        Self::new(factor, source_x, source_y).map(Some)
    }
}

/// Outcome of a zoom on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomResult {
    pub range: AxisRange,
    /// Effective scale factor after constraints; exactly `1.0` when the range
    /// is back on its baseline.
    pub zoom_factor: f64,
}

/// Scales `range` to `transform.scale_factor` around the data value under
/// `source`, then applies `constraint`.
///
/// `source` is the pointer coordinate along this axis: `source_x` for
/// horizontal axes, `source_y` for vertical ones.
pub fn calculate_constrained_zoom_for(
    transform: ZoomTransform,
    source: f64,
    axis: &Axis,
    range: AxisRange,
    constraint: Interval,
) -> ChartResult<ZoomResult> {
    axis.ensure_kind(range.kind(), "zoom")?;
    let anchor = match axis {
        Axis::Continuous(axis) => axis.scale().invert(source),
        Axis::Ordinal(_) => source,
    };
    if !anchor.is_finite() {
        return Err(ChartError::InvalidData(
            "zoom anchor must be finite".to_owned(),
        ));
    }

    let range = range.constrained_scale(transform.scale_factor, anchor, constraint);
    let zoom_factor = if range.is_at_original() {
        1.0
    } else {
        range.scale_factor()
    };
    Ok(ZoomResult { range, zoom_factor })
}

/// Bounds a zoom may not leave.
///
/// Continuous ranges may zoom out to `zoom_max` times their baseline, or
/// anywhere in `[0, inf)` without a limit. Ordinal ranges must keep covering
/// their baseline.
#[must_use]
pub fn zoom_constraint(range: AxisRange, zoom_max: Option<f64>) -> Interval {
    match range.kind() {
        AxisRangeKind::Continuous => match zoom_max.filter(|max| max.is_finite()) {
            Some(max) => {
                let original = range.original();
                Interval::from(original.start() * max, original.end() * max)
            }
            None => Interval::from(0.0, f64::INFINITY),
        },
        AxisRangeKind::Ordinal => range.original(),
    }
}
