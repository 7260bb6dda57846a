use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Interval;
use crate::error::{ChartError, ChartResult};

/// Relative distance (in units of the original measure) under which a scaled
/// interval is snapped back onto the original bounds.
const BASELINE_SNAP_TOLERANCE: f64 = 1e-9;

/// Which constraint rules an [`AxisRange`] follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisRangeKind {
    /// Data-space interval of a numeric axis (time, value).
    Continuous,
    /// Pixel-space extent of the category bands of an ordinal axis.
    Ordinal,
}

impl fmt::Display for AxisRangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continuous => f.write_str("continuous"),
            Self::Ordinal => f.write_str("ordinal"),
        }
    }
}

/// Zoom/pan state of one axis: the visible `current` interval and the
/// unzoomed `original` baseline.
///
/// Values are immutable; every operation returns a new range. `original`
/// changes only through [`AxisRange::update_original`] and, for ordinal
/// ranges, [`AxisRange::zoom`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    kind: AxisRangeKind,
    current: Interval,
    original: Interval,
}

impl AxisRange {
    /// Creates a range whose current interval equals its original baseline.
    ///
    /// Zero-width or infinite baselines are rejected. NaN bounds produce an
    /// empty range that stays empty under every operation.
    pub fn new(kind: AxisRangeKind, start: f64, end: f64) -> ChartResult<Self> {
        let original = validate_baseline(Interval::from(start, end))?;
        Ok(Self {
            kind,
            current: original,
            original,
        })
    }

    #[must_use]
    pub fn kind(self) -> AxisRangeKind {
        self.kind
    }

    #[must_use]
    pub fn current(self) -> Interval {
        self.current
    }

    #[must_use]
    pub fn original(self) -> Interval {
        self.original
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.current.start()
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.current.end()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.current.is_empty()
    }

    /// `current.measure() / original.measure()`; `1.0` means no zoom.
    #[must_use]
    pub fn scale_factor(self) -> f64 {
        self.current.measure() / self.original.measure()
    }

    /// Sets the scale factor to exactly `factor`, keeping `value` fixed.
    ///
    /// The factor is absolute, not relative to the current zoom, so repeating
    /// the call with the same arguments is idempotent.
    #[must_use]
    pub fn scale(self, factor: f64, value: f64) -> Self {
        let current_factor = self.scale_factor();
        let (start, end) = self.current.bounds();
        let scaled_start = value - (value - start) * factor / current_factor;
        let scaled_end = value + (end - value) * factor / current_factor;
        self.with_current(Interval::from(scaled_start, scaled_end))
    }

    /// Scales like [`AxisRange::scale`], then applies `constraint`.
    ///
    /// The two kinds deliberately differ and must not be unified:
    /// - continuous ranges clamp the result into the constraint, so the
    ///   visible window never extends past it;
    /// - ordinal ranges expand the result to cover the constraint, so the band
    ///   layout never becomes narrower than the plot but may extend past it.
    ///
    /// A continuous window that no longer overlaps the constraint (after an
    /// unconstrained pan, say) has nothing to clamp to; the range is returned
    /// unchanged.
    #[must_use]
    pub fn constrained_scale(self, factor: f64, value: f64, constraint: Interval) -> Self {
        let scaled = self.scale(factor, value).current;
        if scaled.is_empty() {
            return self.with_current(scaled);
        }
        let (start, end) = scaled.bounds();
        let (min, max) = constraint.bounds();
        let constrained = match self.kind {
            AxisRangeKind::Continuous => {
                let (start, end) = (start.max(min), end.min(max));
                if start >= end {
                    return self;
                }
                Interval::from(start, end)
            }
            AxisRangeKind::Ordinal => Interval::from(start.min(min), end.max(max)),
        };
        self.with_current(constrained)
    }

    /// Shifts the current interval by `amount` without any constraint.
    #[must_use]
    pub fn translate(self, amount: f64) -> Self {
        self.translate_within(amount, Interval::unbounded())
    }

    /// Shifts the current interval by `amount` only when the shifted interval
    /// satisfies `constraint`; otherwise returns the range unchanged.
    ///
    /// Never shifts partially. Continuous ranges must stay within the
    /// constraint, ordinal ranges must keep covering it.
    #[must_use]
    pub fn translate_within(self, amount: f64, constraint: Interval) -> Self {
        let shifted = self.current.translate(amount);
        let (min, max) = constraint.bounds();
        let permitted = constraint.is_unbounded()
            || match self.kind {
                AxisRangeKind::Continuous => shifted.start() >= min && shifted.end() <= max,
                AxisRangeKind::Ordinal => shifted.start() <= min && shifted.end() >= max,
            };
        if permitted {
            Self {
                current: shifted,
                ..self
            }
        } else {
            self
        }
    }

    /// Replaces the current interval, leaving the baseline untouched.
    #[must_use]
    pub fn update(self, start: f64, end: f64) -> Self {
        Self {
            current: Interval::from(start, end),
            ..self
        }
    }

    /// Redefines the baseline without touching the current interval.
    pub fn update_original(self, start: f64, end: f64) -> ChartResult<Self> {
        let original = validate_baseline(Interval::from(start, end))?;
        Ok(Self { original, ..self })
    }

    /// Rescales an ordinal range after the plot's pixel size changed from
    /// `before` to `after`.
    ///
    /// Both current bounds are scaled by `after / before` and the baseline
    /// becomes `[0, after]`, which keeps the scale factor unchanged.
    pub fn zoom(self, before: f64, after: f64) -> ChartResult<Self> {
        if self.kind != AxisRangeKind::Ordinal {
            return Err(ChartError::UnsupportedRangeOperation {
                operation: "zoom",
                kind: self.kind,
            });
        }
        for (name, dimension) in [("previous", before), ("current", after)] {
            if !dimension.is_finite() || dimension <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} plot dimension must be finite and > 0"
                )));
            }
        }

        let ratio = after / before;
        let original = validate_baseline(Interval::from(0.0, after))?;
        Ok(Self {
            kind: self.kind,
            current: Interval::from(self.current.start() * ratio, self.current.end() * ratio),
            original,
        })
    }

    /// Exact comparison against the baseline bounds.
    #[must_use]
    pub fn matches_original(self, start: f64, end: f64) -> bool {
        self.original.equals_interval(start, end)
    }

    /// `true` when the current interval sits exactly on the baseline.
    #[must_use]
    pub fn is_at_original(self) -> bool {
        self.matches_original(self.current.start(), self.current.end())
    }

    /// Resets the current interval onto the baseline.
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            current: self.original,
            ..self
        }
    }

    fn with_current(self, current: Interval) -> Self {
        Self {
            current: snap_to_original(current, self.original),
            ..self
        }
    }
}

/// Continuous range over `[start, end]` with no zoom applied.
pub fn continuous_axis_range_for(start: f64, end: f64) -> ChartResult<AxisRange> {
    AxisRange::new(AxisRangeKind::Continuous, start, end)
}

/// Ordinal range over the pixel extent `[start, end]` with no zoom applied.
pub fn ordinal_axis_range_for(start: f64, end: f64) -> ChartResult<AxisRange> {
    AxisRange::new(AxisRangeKind::Ordinal, start, end)
}

/// Rescales an ordinal range for a plot resized from `previous_width` to
/// `current_width` pixels.
pub fn scale_ordinal_bounds(
    previous_width: f64,
    current_width: f64,
    previous_range: AxisRange,
) -> ChartResult<AxisRange> {
    previous_range.zoom(previous_width, current_width)
}

fn validate_baseline(original: Interval) -> ChartResult<Interval> {
    if original.is_empty() {
        return Ok(original);
    }
    let (start, end) = original.bounds();
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "axis range baseline must be finite".to_owned(),
        ));
    }
    if original.measure() == 0.0 {
        return Err(ChartError::DegenerateRange { start, end });
    }
    Ok(original)
}

fn snap_to_original(candidate: Interval, original: Interval) -> Interval {
    let tolerance = original.measure().abs() * BASELINE_SNAP_TOLERANCE;
    if (candidate.start() - original.start()).abs() <= tolerance
        && (candidate.end() - original.end()).abs() <= tolerance
    {
        original
    } else {
        candidate
    }
}
