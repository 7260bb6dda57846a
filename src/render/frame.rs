use crate::core::{Dimensions, Margin};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass, in absolute pixel
/// coordinates of the whole chart surface (plot plus margins).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub dimensions: Dimensions,
    pub margin: Margin,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(dimensions: Dimensions, margin: Margin) -> Self {
        Self {
            dimensions,
            margin,
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.dimensions.validate()?;

        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.texts.is_empty()
    }
}
