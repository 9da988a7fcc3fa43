//! Formatting utilities for race data display.

/// Render a number the way the browser prints it in text.
///
/// Integral values carry no fraction (`3`, not `3.0`), `-0` prints as `0`,
/// and magnitudes from `1e21` (or below `1e-6`) switch to `1.5e+21` notation.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exp = format!("{:e}", value);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        format!("{}", value)
    }
}

/// Left-pad with zeros up to two characters; longer text is left alone.
fn pad2(value: f64) -> String {
    format!("{:0>2}", format_number(value))
}

/// Format milliseconds as `MM:SS`. Negative input is clamped to zero.
///
/// Everything below a whole second is dropped, fractional milliseconds included.
pub fn format_ms(ms: f64) -> String {
    let ms = if ms < 0.0 { 0.0 } else { ms };
    let total = (ms / 1000.0).floor();
    format!("{}:{}", pad2((total / 60.0).floor()), pad2(total % 60.0))
}

/// Format seconds as `MM:SS`.
///
/// No clamping and no rounding of the seconds: a negative countdown floors
/// the minutes and keeps the remainder's sign, and a fractional countdown
/// keeps its fraction (`29.5` renders `00:29.5`).
pub fn format_sec(sec: f64) -> String {
    format!("{}:{}", pad2((sec / 60.0).floor()), pad2(sec % 60.0))
}

/// Format a finish time in milliseconds as `Xm SSs` (e.g. `12m 34s`).
pub fn format_finish(ms: f64) -> String {
    let total = (ms / 1000.0).floor();
    let min = (total / 60.0).floor();
    format!("{}m {}s", format_number(min), pad2(total % 60.0))
}

/// Render a percentage as a CSS width.
pub fn format_percent(pct: f64) -> String {
    format!("{}%", format_number(pct))
}

/// Progress bar fill: share of checkpoints already passed.
///
/// Not clamped: checkpoint 0 goes negative and overshooting goes past 100.
/// Whole percentages come out exact (`110`, not `110.00000000000001`).
pub fn progress_percent(checkpoint: f64, total: f64) -> f64 {
    (checkpoint - 1.0) * 100.0 / total
}
