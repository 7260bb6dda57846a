//! Chart controller consumed by host applications.

mod chart;
mod config;
mod data_controller;
mod interaction_controller;
mod json_contract;
mod plot;
mod snapshot;

pub use chart::Chart;
pub use config::{
    ChartConfig, DomainUpdatePolicy, OrdinalAxisBehavior, PanBehavior, ZoomBehavior,
};
pub use data_controller::{DataBatch, SeriesExtent};
pub use json_contract::{
    CHART_CONFIG_JSON_SCHEMA_V1, CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartConfigJsonContractV1,
    ChartSnapshotJsonContractV1,
};
pub use plot::PlotKind;
pub use snapshot::{AxisSnapshot, ChartSnapshot};
