mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, TextHAlign, TextPrimitive, Translation};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend (SVG, canvas, headless).
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from axis-range and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
