//! # Formatter
//!
//! Pure display formatting for the price card. Every function accepts the
//! zero placeholder snapshot and never panics.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Shown in place of a time before the first successful fetch.
pub const TIME_PLACEHOLDER: &str = "--:--:--";

const COMPACT_UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// USD with exactly two decimals and thousands separators: `$1,234.50`.
///
/// Non-finite input renders as `$0.00`.
pub fn format_price(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

/// Compact USD with at most two fraction digits: `$950`, `$1.23K`, `$18.23B`.
pub fn format_volume(value: f64) -> String {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };

    let mut unit_index = COMPACT_UNITS.iter().position(|(scale, _)| value >= *scale);
    // Rounding may carry into the next unit (999,999 -> 1000K -> 1M).
    if let Some(i) = unit_index {
        if i > 0 && round2(value / COMPACT_UNITS[i].0) >= 1000.0 {
            unit_index = Some(i - 1);
        }
    } else if round2(value) >= 1000.0 {
        unit_index = Some(COMPACT_UNITS.len() - 1);
    }

    match unit_index {
        Some(i) => {
            let (scale, suffix) = COMPACT_UNITS[i];
            format!("${}{}", trim_fraction(round2(value / scale)), suffix)
        }
        None => format!("${}", trim_fraction(round2(value))),
    }
}

/// Local time of day, `3:04:05 PM`, or [`TIME_PLACEHOLDER`] for `None`.
pub fn format_time(observed_at: Option<DateTime<Utc>>) -> String {
    format_time_in(observed_at, &Local)
}

/// [`format_time`] in an explicit zone.
pub fn format_time_in<Tz>(observed_at: Option<DateTime<Utc>>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match observed_at {
        Some(ts) => ts.with_timezone(zone).format("%-I:%M:%S %p").to_string(),
        None => TIME_PLACEHOLDER.to_string(),
    }
}

/// Direction of a 24h change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    /// Zero or positive
    Up,
    Down,
}

/// Rendered 24h change: direction for colouring plus the marker text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeIndicator {
    pub direction: ChangeDirection,
    /// `↑ 2.50%` or `↓ 1.84%`
    pub text: String,
}

pub fn format_change(change_pct: f64) -> ChangeIndicator {
    let change_pct = if change_pct.is_finite() { change_pct } else { 0.0 };
    let (direction, arrow) = if change_pct < 0.0 {
        (ChangeDirection::Down, '↓')
    } else {
        (ChangeDirection::Up, '↑')
    };
    ChangeIndicator {
        direction,
        text: format!("{} {:.2}%", arrow, change_pct.abs()),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn trim_fraction(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
