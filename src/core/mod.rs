pub mod axis_range;
pub mod interval;
pub mod scale;
pub mod types;

pub use axis_range::{
    AxisRange, AxisRangeKind, continuous_axis_range_for, ordinal_axis_range_for,
    scale_ordinal_bounds,
};
pub use interval::Interval;
pub use scale::{BandScale, LinearScale};
pub use types::{AxisDimension, AxisLocation, Datum, Dimensions, Margin};
