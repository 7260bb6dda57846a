use crate::core::Dimensions;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer that validates each frame and records what it held.
///
/// Invalid axis geometry (non-finite tick positions, empty labels) fails
/// here the same way it would in a drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    /// Tick labels and axis titles of the last frame, in draw order.
    pub last_labels: Vec<String>,
    pub last_dimensions: Option<Dimensions>,
}

impl NullRenderer {
    /// Whether the last frame drew a label with exactly this text.
    #[must_use]
    pub fn drew_label(&self, text: &str) -> bool {
        self.last_labels.iter().any(|label| label == text)
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.last_labels = frame.texts.iter().map(|text| text.text.clone()).collect();
        self.last_dimensions = Some(frame.dimensions);
        Ok(())
    }
}
