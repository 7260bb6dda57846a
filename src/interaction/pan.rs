use crate::axes::Axis;
use crate::core::{AxisRange, Interval};
use crate::error::{ChartError, ChartResult};

/// New range for `axis` after the pointer was dragged `delta` pixels along it.
///
/// Continuous axes convert the pixel delta into data units through the axis'
/// inverse mapping, anchored at the range's current start, and move the
/// visible window the opposite way so the content follows the pointer.
/// Ordinal ranges are already in pixels and shift the band layout by `delta`.
///
/// With `constrain_to_original` the shift is all-or-nothing against the
/// baseline: a drag past the limit returns `range` unchanged.
pub fn calculate_pan_for(
    delta: f64,
    axis: &Axis,
    range: AxisRange,
    constrain_to_original: bool,
) -> ChartResult<AxisRange> {
    if !delta.is_finite() {
        return Err(ChartError::InvalidData(
            "pan delta must be finite".to_owned(),
        ));
    }
    axis.ensure_kind(range.kind(), "pan")?;

    let constraint = if constrain_to_original {
        range.original()
    } else {
        Interval::unbounded()
    };

    let amount = match axis {
        Axis::Continuous(axis) => {
            let scale = axis.scale();
            let start = range.start();
            let delta_data = scale.invert(scale.apply(start) + delta) - start;
            -delta_data
        }
        Axis::Ordinal(_) => delta,
    };
    if !amount.is_finite() && !range.is_empty() {
        return Err(ChartError::InvalidData(
            "computed pan delta must be finite".to_owned(),
        ));
    }

    Ok(range.translate_within(amount, constraint))
}
