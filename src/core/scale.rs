use serde::{Deserialize, Serialize};

use crate::core::Interval;
use crate::error::{ChartError, ChartResult};

/// Continuous, invertible, monotonic mapping from a data domain onto a pixel
/// range. The range may be reversed (`[height, 0]` for y axes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let mut scale = Self {
            domain_start: 0.0,
            domain_end: 1.0,
            range_start: 0.0,
            range_end: 1.0,
        };
        scale.set_domain(domain.0, domain.1)?;
        scale.set_range(range.0, range.1)?;
        Ok(scale)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn set_domain(&mut self, start: f64, end: f64) -> ChartResult<()> {
        if !start.is_finite() || !end.is_finite() || start == end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        self.domain_start = start;
        self.domain_end = end;
        Ok(())
    }

    pub fn set_range(&mut self, start: f64, end: f64) -> ChartResult<()> {
        if !start.is_finite() || !end.is_finite() || start == end {
            return Err(ChartError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }
        self.range_start = start;
        self.range_end = end;
        Ok(())
    }

    /// Maps a data value to a pixel coordinate.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel coordinate back to a data value.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// Uniform bands over an ordered list of categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    categories: Vec<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
}

impl BandScale {
    #[must_use]
    pub fn new(categories: Vec<String>, range: Interval) -> Self {
        Self {
            categories,
            range_start: range.start(),
            range_end: range.end(),
            padding: 0.0,
        }
    }

    /// Sets inner/outer padding as a fraction of the band step.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = if padding.is_finite() {
            padding.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.categories = categories;
    }

    #[must_use]
    pub fn range(&self) -> Interval {
        Interval::from(self.range_start, self.range_end)
    }

    pub fn set_range(&mut self, range: Interval) {
        self.range_start = range.start();
        self.range_end = range.end();
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Distance between the starts of two neighbouring bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        let count = self.categories.len() as f64;
        if count == 0.0 {
            return 0.0;
        }
        let span = self.range_end - self.range_start;
        span / (count + self.padding).max(1.0)
    }

    /// Pixel width of one band.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Pixel start of the band for `category`, if it is part of the domain.
    #[must_use]
    pub fn position_of(&self, category: &str) -> Option<f64> {
        let index = self.categories.iter().position(|name| name == category)?;
        Some(self.position_at(index))
    }

    #[must_use]
    pub fn position_at(&self, index: usize) -> f64 {
        let step = self.step();
        self.range_start + step * self.padding + step * index as f64
    }

    /// Center pixel of the band for `category`.
    #[must_use]
    pub fn center_of(&self, category: &str) -> Option<f64> {
        self.position_of(category)
            .map(|start| start + self.bandwidth() / 2.0)
    }

    /// Category whose band step contains `pixel`.
    #[must_use]
    pub fn category_at(&self, pixel: f64) -> Option<&str> {
        let step = self.step();
        if step <= 0.0 || !pixel.is_finite() {
            return None;
        }
        let offset = (pixel - self.range_start - step * self.padding) / step;
        if offset < 0.0 {
            return None;
        }
        self.categories
            .get(offset.floor() as usize)
            .map(String::as_str)
    }
}
