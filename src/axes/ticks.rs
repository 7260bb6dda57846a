use chrono::TimeDelta;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub(crate) const TICK_TARGET_SPACING_PX: f64 = 80.0;
pub(crate) const TICK_MIN_COUNT: usize = 2;
pub(crate) const TICK_MAX_COUNT: usize = 12;

/// How tick values are turned into label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickFormat {
    /// Plain decimal number, rounded to the precision of the tick step.
    #[default]
    Number,
    /// Value is elapsed milliseconds, shown as `m:ss.SSS`.
    ElapsedTime,
}

impl TickFormat {
    #[must_use]
    pub fn format(self, value: f64, step: f64) -> String {
        match self {
            Self::Number => format_number(value, step),
            Self::ElapsedTime => format_elapsed_millis(value),
        }
    }
}

pub(crate) fn tick_target_count(axis_span_px: f64) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return TICK_MIN_COUNT;
    }
    let raw = (axis_span_px / TICK_TARGET_SPACING_PX).floor() as usize + 1;
    raw.clamp(TICK_MIN_COUNT, TICK_MAX_COUNT)
}

/// Round-numbered tick values inside `[min, max]` and the step between them.
pub(crate) fn nice_ticks(min: f64, max: f64, count: usize) -> (Vec<f64>, f64) {
    let (min, max) = (min.min(max), min.max(max));
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return (Vec::new(), 0.0);
    }
    if min == max {
        return (vec![min], 0.0);
    }

    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return (vec![min, max], max - min);
    }

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    let ticks = (first..=last)
        .take(TICK_MAX_COUNT * 4)
        .map(|index| index as f64 * step)
        .collect();
    (ticks, step)
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

fn format_number(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).clamp(0.0, 12.0) as u32
    } else {
        2
    };
    match Decimal::from_f64_retain(value) {
        Some(decimal) => {
            let rounded = decimal.round_dp(decimals).normalize();
            if rounded.is_zero() {
                Decimal::ZERO.to_string()
            } else {
                rounded.to_string()
            }
        }
        None => format!("{value}"),
    }
}

fn format_elapsed_millis(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let Some(delta) = TimeDelta::try_milliseconds(value.round().abs() as i64) else {
        return format!("{value}");
    };
    let sign = if value.round() < 0.0 { "-" } else { "" };
    let minutes = delta.num_minutes();
    let seconds = delta.num_seconds() % 60;
    let millis = delta.num_milliseconds() % 1000;
    format!("{sign}{minutes}:{seconds:02}.{millis:03}")
}
