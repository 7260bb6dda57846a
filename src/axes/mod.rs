//! Axes: data-to-pixel mappings plus their rendered ticks and labels.
//!
//! An [`Axis`] is either continuous or ordinal. Code that needs one specific
//! kind goes through [`Axis::as_continuous`] / [`Axis::as_ordinal`], which fail
//! with [`ChartError::AxisKindMismatch`] instead of guessing.

mod continuous;
mod ordinal;
mod rendering;
mod state;
mod text;
mod ticks;

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use continuous::{ContinuousNumericAxis, add_continuous_numeric_axis};
pub use ordinal::{OrdinalAxis, add_ordinal_axis};
pub use rendering::{AxisRendering, AxisStyle};
pub use state::AxesState;
pub use text::{EstimatedTextMeasurer, TextExtent, TextMeasurer};
pub use ticks::TickFormat;

use crate::core::{AxisDimension, AxisLocation, AxisRange, AxisRangeKind, Dimensions, Margin};
use crate::error::{ChartError, ChartResult};

/// Identifier of an axis within one chart dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisId(String);

impl AxisId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AxisId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AxisId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AxisId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Per-axis presentation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub label: String,
    #[serde(default)]
    pub style: AxisStyle,
    #[serde(default)]
    pub tick_format: TickFormat,
    /// Rotation applied to ordinal tick labels.
    #[serde(default)]
    pub tick_label_rotation_deg: f64,
    /// Gap between ordinal bands as a fraction of the band step.
    #[serde(default)]
    pub band_padding: f64,
}

impl AxisOptions {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: AxisStyle::default(),
            tick_format: TickFormat::default(),
            tick_label_rotation_deg: 0.0,
            band_padding: 0.0,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_tick_format(mut self, tick_format: TickFormat) -> Self {
        self.tick_format = tick_format;
        self
    }

    #[must_use]
    pub fn with_tick_label_rotation(mut self, rotation_deg: f64) -> Self {
        self.tick_label_rotation_deg = rotation_deg;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, band_padding: f64) -> Self {
        self.band_padding = band_padding;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Axis {
    Continuous(ContinuousNumericAxis),
    Ordinal(OrdinalAxis),
}

impl Axis {
    #[must_use]
    pub fn id(&self) -> &AxisId {
        match self {
            Self::Continuous(axis) => axis.id(),
            Self::Ordinal(axis) => axis.id(),
        }
    }

    #[must_use]
    pub fn location(&self) -> AxisLocation {
        match self {
            Self::Continuous(axis) => axis.location(),
            Self::Ordinal(axis) => axis.location(),
        }
    }

    #[must_use]
    pub fn dimension(&self) -> AxisDimension {
        self.location().dimension()
    }

    #[must_use]
    pub fn kind(&self) -> AxisRangeKind {
        match self {
            Self::Continuous(_) => AxisRangeKind::Continuous,
            Self::Ordinal(_) => AxisRangeKind::Ordinal,
        }
    }

    #[must_use]
    pub fn rendering(&self) -> &AxisRendering {
        match self {
            Self::Continuous(axis) => axis.rendering(),
            Self::Ordinal(axis) => axis.rendering(),
        }
    }

    /// Pushes `range` into the axis mapping and redraws it.
    ///
    /// This is the only write path renderers depend on.
    pub fn update(
        &mut self,
        range: AxisRange,
        dimensions: Dimensions,
        margin: Margin,
    ) -> ChartResult<()> {
        self.ensure_kind(range.kind(), "axis update")?;
        match self {
            Self::Continuous(axis) => axis.update(range.current(), dimensions, margin),
            Self::Ordinal(axis) => axis.update(range.current(), dimensions, margin),
        }
    }

    /// Fails with a descriptive error unless this axis is of kind `expected`.
    pub fn ensure_kind(&self, expected: AxisRangeKind, context: &str) -> ChartResult<()> {
        if self.kind() == expected {
            return Ok(());
        }
        Err(ChartError::AxisKindMismatch {
            axis_id: self.id().to_string(),
            expected,
            actual: self.kind(),
            context: context.to_owned(),
        })
    }

    pub fn as_continuous(&self) -> ChartResult<&ContinuousNumericAxis> {
        match self {
            Self::Continuous(axis) => Ok(axis),
            Self::Ordinal(_) => Err(self.mismatch(AxisRangeKind::Continuous)),
        }
    }

    pub fn as_ordinal(&self) -> ChartResult<&OrdinalAxis> {
        match self {
            Self::Ordinal(axis) => Ok(axis),
            Self::Continuous(_) => Err(self.mismatch(AxisRangeKind::Ordinal)),
        }
    }

    pub fn as_ordinal_mut(&mut self) -> ChartResult<&mut OrdinalAxis> {
        if let Self::Ordinal(axis) = self {
            return Ok(axis);
        }
        Err(self.mismatch(AxisRangeKind::Ordinal))
    }

    fn mismatch(&self, expected: AxisRangeKind) -> ChartError {
        ChartError::AxisKindMismatch {
            axis_id: self.id().to_string(),
            expected,
            actual: self.kind(),
            context: "axis accessor".to_owned(),
        }
    }
}

impl From<ContinuousNumericAxis> for Axis {
    fn from(axis: ContinuousNumericAxis) -> Self {
        Self::Continuous(axis)
    }
}

impl From<OrdinalAxis> for Axis {
    fn from(axis: OrdinalAxis) -> Self {
        Self::Ordinal(axis)
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, AxisOptions, EstimatedTextMeasurer, add_continuous_numeric_axis, add_ordinal_axis};
    use crate::core::{
        AxisLocation, AxisRangeKind, Dimensions, Margin, continuous_axis_range_for,
    };
    use crate::error::ChartError;

    #[test]
    fn wrong_variant_access_fails_fast() {
        let axis: Axis = add_ordinal_axis(
            1,
            "series",
            AxisLocation::Left,
            &["a".to_owned(), "b".to_owned()],
            AxisOptions::new("series"),
            &EstimatedTextMeasurer,
            Dimensions::new(300.0, 200.0),
            Margin::default(),
        )
        .expect("axis")
        .into();

        let err = axis.as_continuous().expect_err("ordinal is not continuous");
        assert!(matches!(
            err,
            ChartError::AxisKindMismatch {
                expected: AxisRangeKind::Continuous,
                actual: AxisRangeKind::Ordinal,
                ..
            }
        ));
        assert!(axis.as_ordinal().is_ok());
    }

    #[test]
    fn update_rejects_range_of_other_kind() {
        let mut axis: Axis = add_ordinal_axis(
            1,
            "series",
            AxisLocation::Left,
            &["a".to_owned()],
            AxisOptions::new("series"),
            &EstimatedTextMeasurer,
            Dimensions::new(300.0, 200.0),
            Margin::default(),
        )
        .expect("axis")
        .into();
        let range = continuous_axis_range_for(0.0, 1.0).expect("range");
        let err = axis
            .update(range, Dimensions::new(300.0, 200.0), Margin::default())
            .expect_err("kind mismatch");
        assert!(format!("{err}").contains("axis update requires kind continuous"));
    }

    #[test]
    fn continuous_update_goes_through_enum() {
        let mut axis: Axis = add_continuous_numeric_axis(
            1,
            "time",
            AxisLocation::Bottom,
            (0.0, 10.0),
            AxisOptions::new("t"),
            Dimensions::new(100.0, 100.0),
            Margin::default(),
        )
        .expect("axis")
        .into();
        let range = continuous_axis_range_for(0.0, 10.0)
            .expect("range")
            .translate(5.0);
        axis.update(range, Dimensions::new(100.0, 100.0), Margin::default())
            .expect("update");
        let scale = axis.as_continuous().expect("continuous").scale();
        assert_eq!(scale.domain(), (5.0, 15.0));
    }
}
