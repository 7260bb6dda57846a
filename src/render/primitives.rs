use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

fn ensure_finite(what: &str, values: &[f64]) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

fn ensure_positive(what: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} must be finite and > 0"
        )))
    }
}

/// Stroke and fill color; channels are normalized to `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    fn channels(self) -> [(&'static str, f64); 4] {
        [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ]
    }

    pub fn validate(self) -> ChartResult<()> {
        match self
            .channels()
            .into_iter()
            .find(|(_, value)| !(0.0..=1.0).contains(value))
        {
            Some((channel, _)) => Err(ChartError::InvalidData(format!(
                "color channel `{channel}` must lie in [0, 1]"
            ))),
            None => Ok(()),
        }
    }
}

/// Group offset, the same as an SVG `translate(x, y)` on an axis group.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

impl Translation {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Straight segment from `(x1, y1)` to `(x2, y2)`, used for domain paths and
/// tick marks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub fn translated(self, by: Translation) -> Self {
        Self::new(
            self.x1 + by.x,
            self.y1 + by.y,
            self.x2 + by.x,
            self.y2 + by.y,
            self.stroke_width,
            self.color,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite("line endpoints", &[self.x1, self.y1, self.x2, self.y2])?;
        ensure_positive("stroke width", self.stroke_width)?;
        self.color.validate()
    }
}

/// Where a label sits relative to its anchor `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Tick label or axis title anchored at `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    /// Degrees, clockwise around the anchor.
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    #[must_use]
    pub fn translated(&self, by: Translation) -> Self {
        let mut moved = self.clone();
        moved.x += by.x;
        moved.y += by.y;
        moved
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData("label text is empty".to_owned()));
        }
        ensure_finite("label anchor and rotation", &[self.x, self.y, self.rotation_deg])?;
        ensure_positive("font size", self.font_size_px)?;
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_moves_both_endpoints() {
        let line = LinePrimitive::new(0.0, 0.0, 0.0, 6.0, 1.0, Color::rgb(0.0, 0.0, 0.0))
            .translated(Translation::new(10.0, 200.0));
        assert_eq!((line.x1, line.y1, line.x2, line.y2), (10.0, 200.0, 10.0, 206.0));
    }

    #[test]
    fn invalid_primitives_are_reported() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        assert!(Color::rgba(0.0, 0.0, 0.0, f64::NAN).validate().is_err());
        assert!(Color::rgb(1.2, 0.0, 0.0).validate().is_err());
        assert!(LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 0.0, black).validate().is_err());
        let label = TextPrimitive::new("10", 0.0, 0.0, 12.0, black, TextHAlign::Center);
        assert!(label.validate().is_ok());
        assert!(label.clone().with_rotation(f64::INFINITY).validate().is_err());
        assert!(TextPrimitive::new("", 0.0, 0.0, 12.0, black, TextHAlign::Left)
            .validate()
            .is_err());
    }
}
