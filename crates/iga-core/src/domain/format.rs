//! Display formatting for statuses, amounts, grades and dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub fn payment_status_label(status: &str) -> &'static str {
    match status.trim().to_ascii_uppercase().as_str() {
        "PENDING" => "Pending",
        "COMPLETED" => "Completed",
        "FAILED" => "Failed",
        "REFUNDED" => "Refunded",
        "CANCELLED" => "Cancelled",
        _ => "Unknown",
    }
}

pub fn progress_label(progress: &str) -> &'static str {
    match progress.trim().to_ascii_uppercase().as_str() {
        "NOT_STARTED" => "Not Started",
        "IN_PROGRESS" => "In Progress",
        "COMPLETED" => "Completed",
        "DROPPED" => "Dropped",
        _ => "Unknown",
    }
}

/// `RWF 25,000`. At most two decimals, trailing zeros dropped.
pub fn format_amount(amount: f64, currency: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let fraction = match cents {
        0 => String::new(),
        c if c % 10 == 0 => format!(".{}", c / 10),
        c => format!(".{c:02}"),
    };
    format!("{currency} {sign}{grouped}{fraction}")
}

/// Rounded to two decimals with trailing zeros dropped, e.g. `87.5%`.
pub fn format_grade_percentage(percentage: f64) -> String {
    format!("{}%", round2(percentage))
}

pub fn letter_grade(percentage: f64) -> char {
    match percentage {
        p if p >= 90.0 => 'A',
        p if p >= 80.0 => 'B',
        p if p >= 70.0 => 'C',
        p if p >= 60.0 => 'D',
        _ => 'F',
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Strip stray quoting the backend leaves around some strings:
/// `"\"Learn Python\""` becomes `Learn Python`.
pub fn clean_escaped_quotes(value: &str) -> String {
    let mut cleaned = value.strip_prefix("\\\"").unwrap_or(value);
    cleaned = cleaned.strip_suffix('"').unwrap_or(cleaned);
    cleaned = cleaned.strip_prefix('"').unwrap_or(cleaned);
    cleaned = cleaned.strip_suffix('"').unwrap_or(cleaned);
    cleaned.trim().to_string()
}

/// Backend timestamps as `Oct 17, 2026, 02:30 PM`. Dates without a time
/// print as `Oct 17, 2026`; anything unparseable is returned as given.
pub fn format_date_time(value: &str) -> String {
    const DISPLAY: &str = "%b %-d, %Y, %I:%M %p";
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return parsed.format(DISPLAY).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(DISPLAY).to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return parsed.format("%b %-d, %Y").to_string();
    }
    value.to_string()
}
