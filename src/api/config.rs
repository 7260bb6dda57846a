use serde::{Deserialize, Serialize};

use crate::axes::{AxisOptions, AxisStyle, TickFormat};
use crate::core::{Dimensions, Margin};
use crate::error::{ChartError, ChartResult};

/// Zoom gesture tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBehavior {
    /// Largest zoom-out factor relative to the baseline of continuous axes.
    /// `None` lets a continuous axis zoom out anywhere within `[0, inf)`.
    #[serde(default)]
    pub zoom_max: Option<f64>,
    /// Scale change per wheel notch.
    #[serde(default = "default_wheel_step_ratio")]
    pub wheel_step_ratio: f64,
    #[serde(default = "default_true")]
    pub zoom_x: bool,
    #[serde(default)]
    pub zoom_y: bool,
}

impl Default for ZoomBehavior {
    fn default() -> Self {
        Self {
            zoom_max: None,
            wheel_step_ratio: default_wheel_step_ratio(),
            zoom_x: true,
            zoom_y: false,
        }
    }
}

/// Drag gesture tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanBehavior {
    /// Rejects drags that would move a range off its baseline.
    #[serde(default)]
    pub constrain_to_original: bool,
    #[serde(default = "default_true")]
    pub pan_x: bool,
    #[serde(default)]
    pub pan_y: bool,
}

impl Default for PanBehavior {
    fn default() -> Self {
        Self {
            constrain_to_original: false,
            pan_x: true,
            pan_y: false,
        }
    }
}

/// How the time baseline follows streamed data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DomainUpdatePolicy {
    /// Baseline end grows to the latest time; the start stays put.
    #[default]
    Extend,
    /// Baseline is the last `duration` time units; the view slides with it.
    Window { duration: f64 },
}

/// Defaults applied to ordinal axes created through [`ChartConfig::axis_options`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrdinalAxisBehavior {
    #[serde(default)]
    pub tick_label_rotation_deg: f64,
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
}

impl Default for OrdinalAxisBehavior {
    fn default() -> Self {
        Self {
            tick_label_rotation_deg: 0.0,
            band_padding: default_band_padding(),
        }
    }
}

/// Chart bootstrap configuration.
///
/// Serializable so hosts can persist chart setup and restore it later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub chart_id: u32,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default)]
    pub axis_style: AxisStyle,
    #[serde(default)]
    pub zoom: ZoomBehavior,
    #[serde(default)]
    pub pan: PanBehavior,
    #[serde(default)]
    pub domain_update_policy: DomainUpdatePolicy,
    #[serde(default)]
    pub ordinal_axis: OrdinalAxisBehavior,
}

impl ChartConfig {
    #[must_use]
    pub fn new(chart_id: u32, dimensions: Dimensions) -> Self {
        Self {
            chart_id,
            dimensions,
            margin: Margin::default(),
            axis_style: AxisStyle::default(),
            zoom: ZoomBehavior::default(),
            pan: PanBehavior::default(),
            domain_update_policy: DomainUpdatePolicy::default(),
            ordinal_axis: OrdinalAxisBehavior::default(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_axis_style(mut self, style: AxisStyle) -> Self {
        self.axis_style = style;
        self
    }

    #[must_use]
    pub fn with_zoom_behavior(mut self, zoom: ZoomBehavior) -> Self {
        self.zoom = zoom;
        self
    }

    /// Limits zoom-out of continuous axes to `zoom_max` times their baseline.
    #[must_use]
    pub fn with_zoom_max(mut self, zoom_max: Option<f64>) -> Self {
        self.zoom.zoom_max = zoom_max;
        self
    }

    #[must_use]
    pub fn with_pan_behavior(mut self, pan: PanBehavior) -> Self {
        self.pan = pan;
        self
    }

    #[must_use]
    pub fn with_domain_update_policy(mut self, policy: DomainUpdatePolicy) -> Self {
        self.domain_update_policy = policy;
        self
    }

    #[must_use]
    pub fn with_ordinal_axis_behavior(mut self, behavior: OrdinalAxisBehavior) -> Self {
        self.ordinal_axis = behavior;
        self
    }

    /// Axis options carrying this chart's style and ordinal defaults.
    #[must_use]
    pub fn axis_options(&self, label: impl Into<String>) -> AxisOptions {
        AxisOptions::new(label)
            .with_style(self.axis_style)
            .with_tick_label_rotation(self.ordinal_axis.tick_label_rotation_deg)
            .with_band_padding(self.ordinal_axis.band_padding)
    }

    /// Like [`ChartConfig::axis_options`], with elapsed-time tick labels.
    #[must_use]
    pub fn time_axis_options(&self, label: impl Into<String>) -> AxisOptions {
        self.axis_options(label)
            .with_tick_format(TickFormat::ElapsedTime)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.dimensions.validate()?;
        let margin = self.margin;
        for value in [margin.top, margin.right, margin.bottom, margin.left] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(
                    "chart margin must be finite and >= 0".to_owned(),
                ));
            }
        }
        if let Some(zoom_max) = self.zoom.zoom_max {
            if !zoom_max.is_finite() || zoom_max < 1.0 {
                return Err(ChartError::InvalidData(
                    "zoom max must be finite and >= 1".to_owned(),
                ));
            }
        }
        if !self.zoom.wheel_step_ratio.is_finite() || self.zoom.wheel_step_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "wheel zoom step ratio must be finite and > 0".to_owned(),
            ));
        }
        if let DomainUpdatePolicy::Window { duration } = self.domain_update_policy {
            if !duration.is_finite() || duration <= 0.0 {
                return Err(ChartError::InvalidData(
                    "domain window duration must be finite and > 0".to_owned(),
                ));
            }
        }
        let padding = self.ordinal_axis.band_padding;
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "ordinal band padding must be in [0, 1)".to_owned(),
            ));
        }
        if !self.ordinal_axis.tick_label_rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "ordinal tick label rotation must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_wheel_step_ratio() -> f64 {
    0.1
}

fn default_band_padding() -> f64 {
    0.0
}
