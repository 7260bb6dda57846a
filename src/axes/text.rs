/// Width/height of a single rendered line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

impl TextExtent {
    /// Axis-aligned bounding box of this extent rotated by `angle_deg`.
    #[must_use]
    pub fn rotated(self, angle_deg: f64) -> Self {
        let theta = angle_deg.to_radians();
        let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
        Self {
            width: cos * self.width + sin * self.height,
            height: sin * self.width + cos * self.height,
        }
    }
}

/// Measures label text so axes can reserve room for (rotated) tick labels.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent;
}

/// Deterministic, backend-independent glyph-width estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' | ':' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        TextExtent {
            width: (units * font_size_px).max(font_size_px),
            height: font_size_px * 1.2,
        }
    }
}
