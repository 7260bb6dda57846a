use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stream_charts::api::{Chart, ChartConfig, DataBatch};
use stream_charts::core::{
    AxisLocation, Datum, Dimensions, Interval, LinearScale, continuous_axis_range_for,
};
use stream_charts::interaction::{AxisAssignment, ZoomTransform};
use stream_charts::render::NullRenderer;

fn bench_axis_range_scale_translate(c: &mut Criterion) {
    let range = continuous_axis_range_for(0.0, 10_000.0).expect("valid range");
    let constraint = Interval::from(0.0, 20_000.0);

    c.bench_function("axis_range_scale_translate", |b| {
        b.iter(|| {
            let zoomed = black_box(range).constrained_scale(black_box(0.8), 4_321.0, constraint);
            let _ = zoomed.translate_within(black_box(125.0), constraint);
        })
    });
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (0.0, 1_920.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.apply(black_box(4_321.123));
            let _ = scale.invert(px);
        })
    });
}

fn bench_gesture_fan_out_16_axes(c: &mut Criterion) {
    let config = ChartConfig::new(1, Dimensions::new(1_600.0, 900.0));
    let mut chart = Chart::new(NullRenderer::default(), config).expect("chart init");
    for i in 0..16 {
        let options = chart.axis_options(format!("t{i}"));
        let end = 100.0 * f64::from(i + 1);
        chart
            .add_continuous_axis(format!("time-{i}"), AxisLocation::Bottom, (0.0, end), options)
            .expect("time axis");
        chart.assign_series(format!("s{i}"), AxisAssignment::new(format!("time-{i}"), "value"));
    }
    let options = chart.axis_options("value");
    chart
        .add_continuous_axis("value", AxisLocation::Left, (0.0, 1.0), options)
        .expect("value axis");

    c.bench_function("gesture_fan_out_16_axes", |b| {
        b.iter(|| {
            chart.pan(black_box(3.0), 0.0).expect("pan");
            chart
                .zoom(ZoomTransform::new(0.9, 800.0, 450.0).expect("transform"))
                .expect("zoom");
            chart.reset_zoom().expect("reset");
        })
    });
}

fn bench_ingest_batch_1k(c: &mut Criterion) {
    let config = ChartConfig::new(2, Dimensions::new(1_600.0, 900.0));
    let mut chart = Chart::new(NullRenderer::default(), config).expect("chart init");
    let options = chart.config().time_axis_options("t (ms)");
    chart
        .add_continuous_axis("time", AxisLocation::Bottom, (0.0, 1_000.0), options)
        .expect("time axis");
    let options = chart.axis_options("neuron");
    chart
        .add_ordinal_axis("neurons", AxisLocation::Left, &[], options)
        .expect("neuron axis");

    let mut batch = DataBatch::new(1_000.0);
    for series in 0..10 {
        let points: Vec<Datum> = (0..100)
            .map(|i| Datum::new(f64::from(i) * 10.0, f64::from(series)))
            .collect();
        batch = batch.with_points(format!("neuron-{series}"), points);
    }

    c.bench_function("ingest_batch_1k", |b| {
        b.iter(|| {
            chart.ingest(black_box(&batch)).expect("ingest");
        })
    });
}

criterion_group!(
    benches,
    bench_axis_range_scale_translate,
    bench_linear_scale_round_trip,
    bench_gesture_fan_out_16_axes,
    bench_ingest_batch_1k
);
criterion_main!(benches);
