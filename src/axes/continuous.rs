use crate::axes::rendering::{
    AxisRendering, axis_label, axis_translation, domain_line, margin_on, tick_label, tick_line,
};
use crate::axes::ticks::{nice_ticks, tick_target_count};
use crate::axes::{AxisId, AxisOptions};
use crate::core::{AxisDimension, AxisLocation, Dimensions, Interval, LinearScale, Margin};
use crate::error::{ChartError, ChartResult};

/// Numeric axis with a linear data-to-pixel mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousNumericAxis {
    id: AxisId,
    location: AxisLocation,
    scale: LinearScale,
    options: AxisOptions,
    rendering: AxisRendering,
}

/// Builds a continuous axis over `domain` and renders its ticks and label.
///
/// x axes map onto `[0, width]`; y axes map onto `[height, 0]` because SVG y
/// grows downward.
pub fn add_continuous_numeric_axis(
    chart_id: u32,
    axis_id: impl Into<AxisId>,
    location: AxisLocation,
    domain: (f64, f64),
    options: AxisOptions,
    dimensions: Dimensions,
    margin: Margin,
) -> ChartResult<ContinuousNumericAxis> {
    let dimensions = dimensions.validate()?;
    let id = axis_id.into();
    let (range_start, range_end) = pixel_range(location, dimensions);
    let scale = LinearScale::new(domain, (range_start, range_end))?;

    let mut axis = ContinuousNumericAxis {
        rendering: AxisRendering::new(chart_id, id.as_str(), location),
        id,
        location,
        scale,
        options,
    };
    axis.redraw(dimensions, margin);
    Ok(axis)
}

impl ContinuousNumericAxis {
    #[must_use]
    pub fn id(&self) -> &AxisId {
        &self.id
    }

    #[must_use]
    pub fn location(&self) -> AxisLocation {
        self.location
    }

    /// Current data-to-pixel mapping; `scale().invert(px)` maps back.
    #[must_use]
    pub fn scale(&self) -> LinearScale {
        self.scale
    }

    #[must_use]
    pub fn options(&self) -> &AxisOptions {
        &self.options
    }

    #[must_use]
    pub fn rendering(&self) -> &AxisRendering {
        &self.rendering
    }

    /// Re-derives the mapping from `range` and redraws ticks and label.
    ///
    /// The mapping is valid in both directions as soon as this returns.
    pub fn update(
        &mut self,
        range: Interval,
        dimensions: Dimensions,
        margin: Margin,
    ) -> ChartResult<()> {
        let dimensions = dimensions.validate()?;
        if range.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "cannot update axis `{}` from an empty range",
                self.id
            )));
        }

        let mut scale = self.scale;
        scale.set_domain(range.start(), range.end())?;
        let (range_start, range_end) = pixel_range(self.location, dimensions);
        scale.set_range(range_start, range_end)?;
        self.scale = scale;

        self.redraw(dimensions, margin);
        Ok(())
    }

    fn redraw(&mut self, dimensions: Dimensions, margin: Margin) {
        let style = self.options.style;
        let extent = dimensions.extent_along(self.location);
        let (domain_start, domain_end) = self.scale.domain();
        let (ticks, step) = nice_ticks(domain_start, domain_end, tick_target_count(extent));

        let rendering = &mut self.rendering;
        rendering.clear_ticks();
        rendering.translation = axis_translation(self.location, dimensions, margin);
        rendering.domain_line = Some(domain_line(self.location, 0.0, extent, &style));
        for value in ticks {
            let position = self.scale.apply(value);
            rendering
                .tick_lines
                .push(tick_line(self.location, position, &style));
            rendering.tick_labels.push(tick_label(
                self.location,
                position,
                self.options.tick_format.format(value, step),
                0.0,
                &style,
            ));
        }

        let offset = margin_on(self.location, margin) - style.label_font_size_px / 3.0;
        rendering.label = axis_label(
            self.location,
            dimensions,
            offset,
            &self.options.label,
            &style,
        );
    }
}

fn pixel_range(location: AxisLocation, dimensions: Dimensions) -> (f64, f64) {
    match location.dimension() {
        AxisDimension::X => (0.0, dimensions.width),
        AxisDimension::Y => (dimensions.height, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::add_continuous_numeric_axis;
    use crate::axes::AxisOptions;
    use crate::core::{AxisLocation, Dimensions, Interval, Margin};

    fn time_axis() -> super::ContinuousNumericAxis {
        add_continuous_numeric_axis(
            1,
            "time",
            AxisLocation::Bottom,
            (0.0, 100.0),
            AxisOptions::new("t (ms)"),
            Dimensions::new(500.0, 300.0),
            Margin::uniform(30.0),
        )
        .expect("axis")
    }

    #[test]
    fn x_axis_maps_domain_onto_width() {
        let axis = time_axis();
        assert_eq!(axis.scale().apply(0.0), 0.0);
        assert_eq!(axis.scale().apply(100.0), 500.0);
        assert!(!axis.rendering().tick_labels().is_empty());
        assert_eq!(axis.rendering().label().map(|l| l.text.as_str()), Some("t (ms)"));
    }

    #[test]
    fn y_axis_is_inverted() {
        let axis = add_continuous_numeric_axis(
            1,
            "value",
            AxisLocation::Left,
            (0.0, 10.0),
            AxisOptions::new("v"),
            Dimensions::new(500.0, 300.0),
            Margin::uniform(30.0),
        )
        .expect("axis");
        assert_eq!(axis.scale().apply(0.0), 300.0);
        assert_eq!(axis.scale().apply(10.0), 0.0);
    }

    #[test]
    fn update_rederives_scale_and_inverse() {
        let mut axis = time_axis();
        axis.update(
            Interval::from(50.0, 150.0),
            Dimensions::new(500.0, 300.0),
            Margin::uniform(30.0),
        )
        .expect("update");
        assert_eq!(axis.scale().apply(50.0), 0.0);
        assert_relative_eq!(axis.scale().invert(250.0), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn update_from_empty_range_fails_without_touching_scale() {
        let mut axis = time_axis();
        let before = axis.scale();
        let result = axis.update(
            Interval::empty(),
            Dimensions::new(500.0, 300.0),
            Margin::uniform(30.0),
        );
        assert!(result.is_err());
        assert_eq!(axis.scale(), before);
    }
}
