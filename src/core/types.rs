use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel size of the plot area (excluding margins).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Plot extent along the axis placed at `location`.
    #[must_use]
    pub fn extent_along(self, location: AxisLocation) -> f64 {
        match location.dimension() {
            AxisDimension::X => self.width,
            AxisDimension::Y => self.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(30.0, 20.0, 30.0, 50.0)
    }
}

/// Side of the plot an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisLocation {
    Left,
    Right,
    Top,
    Bottom,
}

impl AxisLocation {
    #[must_use]
    pub fn dimension(self) -> AxisDimension {
        match self {
            Self::Left | Self::Right => AxisDimension::Y,
            Self::Top | Self::Bottom => AxisDimension::X,
        }
    }
}

/// Plot dimension an axis spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisDimension {
    X,
    Y,
}

/// One streamed sample: a time and a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    pub time: f64,
    pub value: f64,
}

impl Datum {
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}
