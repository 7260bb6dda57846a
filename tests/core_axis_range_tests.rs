use approx::assert_abs_diff_eq;
use stream_charts::ChartError;
use stream_charts::axes::{AxesState, Axis, AxisOptions, add_continuous_numeric_axis};
use stream_charts::core::{
    AxisLocation, AxisRangeKind, Dimensions, Interval, Margin, continuous_axis_range_for,
    ordinal_axis_range_for, scale_ordinal_bounds,
};

#[test]
fn doubling_scale_around_center() {
    let range = continuous_axis_range_for(0.0, 100.0)
        .expect("range")
        .scale(2.0, 50.0);
    assert_eq!(range.current().bounds(), (-50.0, 150.0));
    assert_eq!(range.scale_factor(), 2.0);
}

#[test]
fn scaling_back_restores_exact_bounds() {
    let range = continuous_axis_range_for(0.0, 100.0)
        .expect("range")
        .scale(2.0, 50.0)
        .scale(1.0, 50.0);
    assert_eq!(range.current().bounds(), (0.0, 100.0));
    assert!(range.is_at_original());
}

#[test]
fn translate_moves_current_window() {
    let range = continuous_axis_range_for(0.0, 100.0)
        .expect("range")
        .translate(50.0);
    assert_eq!(range.current().bounds(), (50.0, 150.0));
    assert!(range.matches_original(0.0, 100.0));
}

#[test]
fn ordinal_bounds_follow_plot_resize() {
    let previous = ordinal_axis_range_for(0.0, 100.0)
        .expect("range")
        .update(-50.0, 200.0);
    let resized = scale_ordinal_bounds(100.0, 110.0, previous).expect("resize");
    assert_abs_diff_eq!(resized.start(), -55.0, epsilon = 0.005);
    assert_abs_diff_eq!(resized.end(), 220.0, epsilon = 0.005);
    assert!(resized.matches_original(0.0, 110.0));
    assert_abs_diff_eq!(
        resized.scale_factor(),
        previous.scale_factor(),
        epsilon = 1e-10
    );
}

#[test]
fn resize_rescaling_is_ordinal_only() {
    let range = continuous_axis_range_for(0.0, 100.0).expect("range");
    let err = scale_ordinal_bounds(100.0, 110.0, range).expect_err("continuous");
    assert!(matches!(
        err,
        ChartError::UnsupportedRangeOperation {
            kind: AxisRangeKind::Continuous,
            ..
        }
    ));

    let ordinal = ordinal_axis_range_for(0.0, 100.0).expect("range");
    assert!(scale_ordinal_bounds(0.0, 110.0, ordinal).is_err());
}

#[test]
fn unknown_axis_id_resolves_to_primary_axis() {
    let axis: Axis = add_continuous_numeric_axis(
        1,
        "primary",
        AxisLocation::Bottom,
        (0.0, 10.0),
        AxisOptions::new("t"),
        Dimensions::new(300.0, 200.0),
        Margin::default(),
    )
    .expect("axis")
    .into();
    let state = AxesState::new().add_axis(axis, "primary");

    let fallback = state.axis_for("nonexistent").expect("fallback");
    let primary = state.axis_for("primary").expect("primary");
    assert!(std::ptr::eq(fallback, primary));
    assert_eq!(state.default_axis().map(|axis| axis.id().as_str()), Some("primary"));
}

#[test]
fn constrained_scale_differs_by_kind() {
    let constraint = Interval::from(0.0, 100.0);

    let continuous = continuous_axis_range_for(0.0, 100.0)
        .expect("range")
        .constrained_scale(1.5, 20.0, constraint);
    assert_eq!(continuous.current().bounds(), (0.0, 100.0));

    let ordinal = ordinal_axis_range_for(0.0, 100.0)
        .expect("range")
        .constrained_scale(1.5, 20.0, constraint);
    assert_eq!(ordinal.current().bounds(), (-10.0, 140.0));

    let ordinal_in = ordinal_axis_range_for(0.0, 100.0)
        .expect("range")
        .constrained_scale(0.5, 20.0, constraint);
    assert_eq!(ordinal_in.current().bounds(), (0.0, 100.0));
}

#[test]
fn empty_ranges_stay_empty() {
    let range = ordinal_axis_range_for(0.0, f64::NAN).expect("empty");
    assert!(range.is_empty());
    assert!(range.translate(10.0).is_empty());
    assert!(range.scale(0.5, 3.0).is_empty());
    assert!(range.update(1.0, f64::NAN).is_empty());
}

#[test]
fn degenerate_baseline_is_a_construction_error() {
    assert!(matches!(
        continuous_axis_range_for(7.0, 7.0),
        Err(ChartError::DegenerateRange { .. })
    ));
    assert!(continuous_axis_range_for(0.0, f64::INFINITY).is_err());
}

#[test]
fn reset_returns_to_baseline() {
    let range = continuous_axis_range_for(10.0, 20.0)
        .expect("range")
        .scale(3.0, 12.0)
        .translate(-4.0)
        .reset();
    assert!(range.is_at_original());
    assert_eq!(range.scale_factor(), 1.0);
}
