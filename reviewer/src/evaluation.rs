/// Dampening applied to raw evaluations before normalisation.
const DAMPENING: f64 = 0.4;

/// Which half of the two-sided meter carries the numeric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterSide {
    Top,
    Bottom,
}

/// Display values for the evaluation meter.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationDisplay {
    /// Height of the top (second player's) segment, in percent.
    pub height_percent: f64,
    /// Absolute evaluation, one decimal.
    pub display_value: String,
    pub favor: MeterSide,
}

/// Map a raw evaluation (positive favours the first player) onto the meter.
///
/// `s = 0.4e / (1 + |0.4e|)` stays inside (-1, 1) for every finite input, so
/// the top segment approaches but never reaches 0% or 100%. Non-finite input
/// is clamped into range.
pub fn scale(raw: f64) -> EvaluationDisplay {
    let dampened = DAMPENING * raw;
    let s = dampened / (1.0 + dampened.abs());
    let height = 50.0 - 50.0 * s;
    let height_percent = if height.is_nan() {
        50.0
    } else {
        height.clamp(0.0, 100.0)
    };

    EvaluationDisplay {
        height_percent,
        display_value: one_decimal(raw.abs()),
        favor: if s > 0.0 {
            MeterSide::Bottom
        } else {
            MeterSide::Top
        },
    }
}

/// Format with one decimal, rounding exact ties away from zero.
///
/// `{:.1}` rounds an exactly representable tie such as 1.25 to even. A tie at
/// the second decimal is only exact when `4x` is an odd integer.
fn one_decimal(x: f64) -> String {
    let quarters = x * 4.0;
    if quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0 {
        return format!("{:.1}", (x * 10.0).ceil() / 10.0);
    }
    format!("{:.1}", x)
}
