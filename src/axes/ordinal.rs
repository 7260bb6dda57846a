use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::axes::rendering::{
    AxisRendering, axis_label, axis_translation, domain_line, tick_label, tick_line,
};
use crate::axes::text::TextMeasurer;
use crate::axes::{AxisId, AxisOptions};
use crate::core::{AxisDimension, AxisLocation, BandScale, Dimensions, Interval, Margin};
use crate::error::{ChartError, ChartResult};

/// Category axis: each visible category owns a band of uniform pixel width.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalAxis {
    id: AxisId,
    location: AxisLocation,
    /// Every known category in arrival order, with the thickness its rotated
    /// tick label needs perpendicular to the axis.
    categories: IndexMap<String, f64>,
    filter: Option<String>,
    scale: BandScale,
    category_size: f64,
    label_offset: f64,
    options: AxisOptions,
    rendering: AxisRendering,
}

/// Builds an ordinal axis over `categories`, measuring the rotated tick labels
/// to find how far out the axis label must sit.
#[allow(clippy::too_many_arguments)]
pub fn add_ordinal_axis(
    chart_id: u32,
    axis_id: impl Into<AxisId>,
    location: AxisLocation,
    categories: &[String],
    options: AxisOptions,
    measurer: &dyn TextMeasurer,
    dimensions: Dimensions,
    margin: Margin,
) -> ChartResult<OrdinalAxis> {
    let dimensions = dimensions.validate()?;
    let id = axis_id.into();
    let extent = dimensions.extent_along(location);
    let scale = BandScale::new(Vec::new(), Interval::from(0.0, extent))
        .with_padding(options.band_padding);

    let mut axis = OrdinalAxis {
        rendering: AxisRendering::new(chart_id, id.as_str(), location),
        id,
        location,
        categories: IndexMap::with_capacity(categories.len()),
        filter: None,
        scale,
        category_size: 0.0,
        label_offset: 0.0,
        options,
    };
    for name in categories {
        axis.insert_category(name, measurer);
    }
    axis.refresh_visible();
    axis.redraw(dimensions, margin);
    Ok(axis)
}

impl OrdinalAxis {
    #[must_use]
    pub fn id(&self) -> &AxisId {
        &self.id
    }

    #[must_use]
    pub fn location(&self) -> AxisLocation {
        self.location
    }

    #[must_use]
    pub fn scale(&self) -> &BandScale {
        &self.scale
    }

    #[must_use]
    pub fn options(&self) -> &AxisOptions {
        &self.options
    }

    #[must_use]
    pub fn rendering(&self) -> &AxisRendering {
        &self.rendering
    }

    /// Every known category, including filtered-out ones.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Categories currently laid out as bands.
    #[must_use]
    pub fn visible_categories(&self) -> &[String] {
        self.scale.categories()
    }

    /// Band width in pixels.
    #[must_use]
    pub fn category_size(&self) -> f64 {
        self.category_size
    }

    /// Distance from the axis line to the axis label baseline, which grows
    /// with the tallest rotated tick label.
    #[must_use]
    pub fn label_offset(&self) -> f64 {
        self.label_offset
    }

    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Re-lays out the bands over `range` and redraws ticks and label.
    ///
    /// The pixel range is never narrower than the plot: the requested range is
    /// unioned with `[0, plot extent]`.
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

        let extent = dimensions.extent_along(self.location);
        self.scale
            .set_range(Interval::from(0.0, extent).union(range));
        self.category_size = self.scale.bandwidth();
        self.redraw(dimensions, margin);
        Ok(())
    }

    /// Adds a category to the domain. Returns `false` when it already exists.
    ///
    /// Call [`OrdinalAxis::update`] afterwards to redraw.
    pub fn add_category(&mut self, name: &str, measurer: &dyn TextMeasurer) -> bool {
        if self.categories.contains_key(name) {
            return false;
        }
        self.insert_category(name, measurer);
        self.refresh_visible();
        true
    }

    /// Restricts the visible bands to categories whose name contains
    /// `fragment` (case-insensitive). `None` shows every category.
    ///
    /// Call [`OrdinalAxis::update`] afterwards to redraw.
    pub fn set_filter(&mut self, fragment: Option<&str>) {
        self.filter = fragment
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_lowercase);
        self.refresh_visible();
    }

    fn insert_category(&mut self, name: &str, measurer: &dyn TextMeasurer) {
        let extent = measurer
            .measure(name, self.options.style.font_size_px)
            .rotated(self.options.tick_label_rotation_deg);
        let thickness = match self.location.dimension() {
            AxisDimension::X => extent.height,
            AxisDimension::Y => extent.width,
        };
        self.categories.insert(name.to_owned(), thickness);
    }

    fn refresh_visible(&mut self) {
        let visible = self
            .categories
            .keys()
            .filter(|name| match &self.filter {
                Some(fragment) => name.to_lowercase().contains(fragment.as_str()),
                None => true,
            })
            .cloned()
            .collect();
        self.scale.set_categories(visible);
        self.category_size = self.scale.bandwidth();
    }

    fn redraw(&mut self, dimensions: Dimensions, margin: Margin) {
        let style = self.options.style;
        let rotation = self.options.tick_label_rotation_deg;
        let extent = dimensions.extent_along(self.location);
        let half_band = self.scale.bandwidth() / 2.0;

        let rendering = &mut self.rendering;
        rendering.clear_ticks();
        rendering.translation = axis_translation(self.location, dimensions, margin);
        rendering.domain_line = Some(domain_line(self.location, 0.0, extent, &style));

        let mut tallest = OrderedFloat(0.0);
        for (index, name) in self.scale.categories().iter().enumerate() {
            let position = self.scale.position_at(index) + half_band;
            rendering
                .tick_lines
                .push(tick_line(self.location, position, &style));
            rendering.tick_labels.push(tick_label(
                self.location,
                position,
                name.clone(),
                rotation,
                &style,
            ));
            if let Some(thickness) = self.categories.get(name) {
                tallest = tallest.max(OrderedFloat(*thickness));
            }
        }

        self.label_offset = style.tick_size_px
            + style.tick_padding_px
            + tallest.0
            + style.tick_padding_px
            + style.label_font_size_px;
        rendering.label = axis_label(
            self.location,
            dimensions,
            self.label_offset,
            &self.options.label,
            &style,
        );
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::add_ordinal_axis;
    use crate::axes::text::EstimatedTextMeasurer;
    use crate::axes::AxisOptions;
    use crate::core::{AxisLocation, Dimensions, Interval, Margin};

    fn neurons(count: usize) -> Vec<String> {
        (0..count).map(|index| format!("neuron-{index}")).collect()
    }

    fn raster_axis(rotation: f64) -> super::OrdinalAxis {
        add_ordinal_axis(
            7,
            "neurons",
            AxisLocation::Bottom,
            &neurons(4),
            AxisOptions::new("neuron").with_tick_label_rotation(rotation),
            &EstimatedTextMeasurer,
            Dimensions::new(400.0, 200.0),
            Margin::uniform(40.0),
        )
        .expect("axis")
    }

    #[test]
    fn bands_cover_the_plot_width() {
        let axis = raster_axis(0.0);
        assert_relative_eq!(axis.category_size(), 100.0);
        assert_eq!(axis.rendering().tick_labels().len(), 4);
        assert_eq!(axis.scale().position_of("neuron-2"), Some(200.0));
    }

    #[test]
    fn rotated_tick_labels_push_axis_label_outward() {
        let flat = raster_axis(0.0);
        let rotated = raster_axis(-60.0);
        assert!(rotated.label_offset() > flat.label_offset());
        let label = rotated.rendering().label().expect("axis label");
        assert_relative_eq!(label.y, rotated.label_offset());
        assert!(
            rotated
                .rendering()
                .tick_labels()
                .iter()
                .all(|text| text.rotation_deg == -60.0)
        );
    }

    #[test]
    fn update_never_narrows_below_plot_extent() {
        let mut axis = raster_axis(0.0);
        let dimensions = Dimensions::new(400.0, 200.0);
        axis.update(Interval::from(100.0, 300.0), dimensions, Margin::uniform(40.0))
            .expect("update");
        assert_eq!(axis.scale().range(), Interval::from(0.0, 400.0));
        assert_relative_eq!(axis.category_size(), 100.0);

        axis.update(Interval::from(-200.0, 600.0), dimensions, Margin::uniform(40.0))
            .expect("update");
        assert_eq!(axis.scale().range(), Interval::from(-200.0, 600.0));
        assert_relative_eq!(axis.category_size(), 200.0);
    }

    #[test]
    fn filter_recomputes_bandwidth() {
        let mut axis = raster_axis(0.0);
        axis.set_filter(Some("NEURON-1"));
        assert_eq!(axis.visible_categories(), ["neuron-1".to_owned()]);
        assert_relative_eq!(axis.category_size(), 400.0);

        axis.set_filter(None);
        assert_eq!(axis.visible_categories().len(), 4);
        assert_relative_eq!(axis.category_size(), 100.0);
    }

    #[test]
    fn adding_known_category_is_a_noop() {
        let mut axis = raster_axis(0.0);
        assert!(!axis.add_category("neuron-0", &EstimatedTextMeasurer));
        assert!(axis.add_category("neuron-9", &EstimatedTextMeasurer));
        assert_eq!(axis.categories().count(), 5);
        assert_relative_eq!(axis.category_size(), 80.0);
    }
}
