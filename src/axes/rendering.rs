use serde::{Deserialize, Serialize};

use crate::core::{AxisDimension, AxisLocation, Dimensions, Margin};
use crate::render::{
    Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive, Translation,
};

/// Visual settings shared by every axis of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub font_size_px: f64,
    pub label_font_size_px: f64,
    pub color: Color,
    pub tick_size_px: f64,
    pub tick_padding_px: f64,
    pub stroke_width: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            font_size_px: 12.0,
            label_font_size_px: 13.0,
            color: Color::rgb(0.82, 0.82, 0.82),
            tick_size_px: 6.0,
            tick_padding_px: 3.0,
            stroke_width: 1.0,
        }
    }
}

/// Rendering handle owned by an axis: the tick marks, tick labels and axis
/// label of one axis group, kept in group-local coordinates and positioned by
/// `translation`.
///
/// Updates rewrite the primitives in place; the handle is released with the
/// axis that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisRendering {
    group_id: String,
    pub(crate) translation: Translation,
    pub(crate) domain_line: Option<LinePrimitive>,
    pub(crate) tick_lines: Vec<LinePrimitive>,
    pub(crate) tick_labels: Vec<TextPrimitive>,
    pub(crate) label: Option<TextPrimitive>,
}

impl AxisRendering {
    pub(crate) fn new(chart_id: u32, axis_id: &str, location: AxisLocation) -> Self {
        Self {
            group_id: format!("stream-chart-{}-axis-{chart_id}-{axis_id}", location_name(location)),
            translation: Translation::default(),
            domain_line: None,
            tick_lines: Vec::new(),
            tick_labels: Vec::new(),
            label: None,
        }
    }

    /// Stable identifier of the axis group, unique per chart and axis.
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    #[must_use]
    pub fn translation(&self) -> Translation {
        self.translation
    }

    #[must_use]
    pub fn tick_labels(&self) -> &[TextPrimitive] {
        &self.tick_labels
    }

    #[must_use]
    pub fn tick_lines(&self) -> &[LinePrimitive] {
        &self.tick_lines
    }

    #[must_use]
    pub fn label(&self) -> Option<&TextPrimitive> {
        self.label.as_ref()
    }

    pub(crate) fn clear_ticks(&mut self) {
        self.tick_lines.clear();
        self.tick_labels.clear();
    }

    /// Appends this group's primitives to `frame` in absolute coordinates.
    #[must_use]
    pub fn append_to(&self, mut frame: RenderFrame) -> RenderFrame {
        let by = self.translation;
        if let Some(line) = self.domain_line {
            frame = frame.with_line(line.translated(by));
        }
        for line in &self.tick_lines {
            frame = frame.with_line(line.translated(by));
        }
        for text in &self.tick_labels {
            frame = frame.with_text(text.translated(by));
        }
        if let Some(label) = &self.label {
            frame = frame.with_text(label.translated(by));
        }
        frame
    }
}

/// Group offset for an axis at `location`: left/right axes move along x by the
/// margin, top/bottom axes move along y, with the bottom axis pushed below
/// the plot because SVG y grows downward.
pub(crate) fn axis_translation(
    location: AxisLocation,
    dimensions: Dimensions,
    margin: Margin,
) -> Translation {
    match location {
        AxisLocation::Left => Translation::new(margin.left, margin.top),
        AxisLocation::Right => Translation::new(margin.left + dimensions.width, margin.top),
        AxisLocation::Top => Translation::new(margin.left, margin.top),
        AxisLocation::Bottom => Translation::new(margin.left, margin.top + dimensions.height),
    }
}

/// Tick mark at `position` along the axis, pointing away from the plot.
pub(crate) fn tick_line(location: AxisLocation, position: f64, style: &AxisStyle) -> LinePrimitive {
    let size = style.tick_size_px;
    let (x1, y1, x2, y2) = match location {
        AxisLocation::Left => (0.0, position, -size, position),
        AxisLocation::Right => (0.0, position, size, position),
        AxisLocation::Top => (position, 0.0, position, -size),
        AxisLocation::Bottom => (position, 0.0, position, size),
    };
    LinePrimitive::new(x1, y1, x2, y2, style.stroke_width, style.color)
}

/// Line along the axis covering `[start, end]` in group-local pixels.
pub(crate) fn domain_line(
    location: AxisLocation,
    start: f64,
    end: f64,
    style: &AxisStyle,
) -> LinePrimitive {
    match location.dimension() {
        AxisDimension::X => {
            LinePrimitive::new(start, 0.0, end, 0.0, style.stroke_width, style.color)
        }
        AxisDimension::Y => {
            LinePrimitive::new(0.0, start, 0.0, end, style.stroke_width, style.color)
        }
    }
}

/// Tick label next to the tick at `position`.
pub(crate) fn tick_label(
    location: AxisLocation,
    position: f64,
    text: String,
    rotation_deg: f64,
    style: &AxisStyle,
) -> TextPrimitive {
    let gap = style.tick_size_px + style.tick_padding_px;
    let font = style.font_size_px;
    let (x, y, h_align) = match location {
        AxisLocation::Left => (-gap, position + font / 3.0, TextHAlign::Right),
        AxisLocation::Right => (gap, position + font / 3.0, TextHAlign::Left),
        AxisLocation::Top => (position, -gap, TextHAlign::Center),
        AxisLocation::Bottom => (position, gap + font, TextHAlign::Center),
    };
    TextPrimitive::new(text, x, y, font, style.color, h_align).with_rotation(rotation_deg)
}

/// Axis label centered along the axis, `offset` pixels away from the axis line.
pub(crate) fn axis_label(
    location: AxisLocation,
    dimensions: Dimensions,
    offset: f64,
    text: &str,
    style: &AxisStyle,
) -> Option<TextPrimitive> {
    if text.is_empty() {
        return None;
    }
    let (x, y, rotation_deg) = match location {
        AxisLocation::Left => (-offset, dimensions.height / 2.0, -90.0),
        AxisLocation::Right => (offset, dimensions.height / 2.0, 90.0),
        AxisLocation::Top => (dimensions.width / 2.0, -offset, 0.0),
        AxisLocation::Bottom => (dimensions.width / 2.0, offset, 0.0),
    };
    Some(
        TextPrimitive::new(
            text,
            x,
            y,
            style.label_font_size_px,
            style.color,
            TextHAlign::Center,
        )
        .with_rotation(rotation_deg),
    )
}

/// Margin on the side of the plot where an axis at `location` sits.
pub(crate) fn margin_on(location: AxisLocation, margin: Margin) -> f64 {
    match location {
        AxisLocation::Left => margin.left,
        AxisLocation::Right => margin.right,
        AxisLocation::Top => margin.top,
        AxisLocation::Bottom => margin.bottom,
    }
}

fn location_name(location: AxisLocation) -> &'static str {
    match location {
        AxisLocation::Left => "y-left",
        AxisLocation::Right => "y-right",
        AxisLocation::Top => "x-top",
        AxisLocation::Bottom => "x-bottom",
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisRendering, axis_translation};
    use crate::core::{AxisLocation, Dimensions, Margin};
    use crate::render::Translation;

    #[test]
    fn translation_follows_location_and_margin() {
        let dimensions = Dimensions::new(400.0, 300.0);
        let margin = Margin::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(
            axis_translation(AxisLocation::Bottom, dimensions, margin),
            Translation::new(40.0, 310.0)
        );
        assert_eq!(
            axis_translation(AxisLocation::Right, dimensions, margin),
            Translation::new(440.0, 10.0)
        );
        assert_eq!(
            axis_translation(AxisLocation::Left, dimensions, margin),
            Translation::new(40.0, 10.0)
        );
    }

    #[test]
    fn group_id_names_chart_and_axis() {
        let rendering = AxisRendering::new(3, "time", AxisLocation::Bottom);
        assert_eq!(rendering.group_id(), "stream-chart-x-bottom-axis-3-time");
    }
}
