use stream_charts::api::{
    Chart, ChartConfig, ChartSnapshot, DataBatch, DomainUpdatePolicy, PlotKind,
};
use stream_charts::core::{AxisDimension, AxisLocation, AxisRangeKind, Datum, Dimensions};
use stream_charts::interaction::{AxisAssignment, ZoomTransform};
use stream_charts::render::NullRenderer;
use stream_charts::ChartError;

fn raster_chart() -> Chart<NullRenderer> {
    let mut chart = Chart::new(
        NullRenderer::default(),
        ChartConfig::new(7, Dimensions::new(500.0, 200.0)),
    )
    .expect("chart");
    let time = chart.config().time_axis_options("t (ms)");
    chart
        .add_continuous_axis("time", AxisLocation::Bottom, (0.0, 100.0), time)
        .expect("time");
    let categories = vec!["n0".to_owned(), "n1".to_owned()];
    let options = chart.axis_options("neuron");
    chart
        .add_ordinal_axis("neurons", AxisLocation::Left, &categories, options)
        .expect("neurons");
    chart
}

#[test]
fn plot_validation_checks_axis_kinds() {
    let chart = raster_chart();
    chart.validate_plot(PlotKind::Raster).expect("raster fits");

    let err = chart
        .validate_plot(PlotKind::Poincare)
        .expect_err("ordinal y axis");
    match &err {
        ChartError::AxisKindMismatch {
            axis_id,
            expected,
            actual,
            ..
        } => {
            assert_eq!(axis_id, "neurons");
            assert_eq!(*expected, AxisRangeKind::Continuous);
            assert_eq!(*actual, AxisRangeKind::Ordinal);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(format!("{err}").contains("poincare"));
    assert!(chart.validate_plot(PlotKind::Bar).is_err());
}

#[test]
fn plot_validation_needs_both_dimensions() {
    let mut chart = Chart::new(
        NullRenderer::default(),
        ChartConfig::new(1, Dimensions::new(300.0, 100.0)),
    )
    .expect("chart");
    let options = chart.axis_options("x");
    chart
        .add_continuous_axis("x", AxisLocation::Bottom, (0.0, 1.0), options)
        .expect("x");
    assert!(chart.validate_plot(PlotKind::Scatter).is_err());
}

#[test]
fn render_emits_axis_primitives() {
    let _ = stream_charts::telemetry::init_default_tracing();
    let mut chart = raster_chart();
    chart.render().expect("render");
    let renderer = chart.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert!(renderer.last_line_count > 0);
    assert_eq!(renderer.last_text_count, renderer.last_labels.len());
    assert!(renderer.drew_label("n0") && renderer.drew_label("n1"));
    assert!(renderer.drew_label("neuron"));
    assert_eq!(renderer.last_dimensions, Some(Dimensions::new(500.0, 200.0)));

    chart.pan(25.0, 0.0).expect("pan");
    chart.render().expect("render after pan");
    assert_eq!(chart.into_renderer().frames_rendered, 2);
}

#[test]
fn snapshot_reports_zoom_state_and_round_trips() {
    let mut chart = raster_chart();
    chart.assign_series("n0", AxisAssignment::new("time", "neurons"));
    chart
        .zoom(ZoomTransform::new(0.5, 250.0, 0.0).expect("transform"))
        .expect("zoom");
    chart
        .ingest(&DataBatch::new(50.0).with_points("n0", vec![Datum::new(10.0, 1.0)]))
        .expect("ingest");

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.chart_id, 7);
    assert_eq!(snapshot.axes.len(), 2);
    let time = snapshot.axis(AxisDimension::X, "time").expect("time");
    assert_eq!(time.kind, AxisRangeKind::Continuous);
    assert_eq!(time.current.bounds(), (25.0, 75.0));
    assert_eq!(time.original.bounds(), (0.0, 100.0));
    assert_eq!(time.zoom_factor, 0.5);
    let neurons = snapshot.axis(AxisDimension::Y, "neurons").expect("neurons");
    assert_eq!(neurons.kind, AxisRangeKind::Ordinal);
    assert_eq!(neurons.original.bounds(), (0.0, 200.0));
    assert_eq!(snapshot.series["n0"].count, 1);

    let contract = chart.snapshot_json_contract_v1_pretty().expect("contract");
    assert!(contract.contains("\"schema_version\": 1"));
    let parsed = ChartSnapshot::from_json_compat_str(&contract).expect("parse contract");
    assert_eq!(parsed, snapshot);

    let bare = snapshot.to_json_pretty().expect("bare");
    let parsed = ChartSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, snapshot);
}

#[test]
fn snapshot_contract_rejects_unknown_schema() {
    let snapshot = raster_chart().snapshot();
    let contract = snapshot
        .to_json_contract_v1_pretty()
        .expect("contract")
        .replace("\"schema_version\": 1", "\"schema_version\": 9");
    assert!(ChartSnapshot::from_json_compat_str(&contract).is_err());
}

#[test]
fn config_contract_round_trips_and_validates() {
    let config = ChartConfig::new(4, Dimensions::new(640.0, 480.0))
        .with_zoom_max(Some(8.0))
        .with_domain_update_policy(DomainUpdatePolicy::Window { duration: 500.0 });
    let contract = config.to_json_contract_v1_pretty().expect("contract");
    let parsed = ChartConfig::from_json_compat_str(&contract).expect("parse");
    assert_eq!(parsed, config);

    let invalid = contract.replace("640.0", "-640.0");
    assert!(ChartConfig::from_json_compat_str(&invalid).is_err());
}
