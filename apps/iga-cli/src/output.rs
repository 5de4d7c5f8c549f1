//! Printing command results to stdout.

use anyhow::Result;
use serde::Serialize;

use iga_client::GradingDashboard;
use iga_core::domain::format::{
    clean_escaped_quotes, format_amount, format_date_time, format_grade_percentage, letter_grade,
    payment_status_label, progress_label,
};
use iga_shared::ApiResponse;
use iga_shared::dto::{DEFAULT_CURRENCY, Enrollment, Page, PaymentHistoryItem};

fn date_or_dash(value: Option<&str>) -> String {
    value.map(format_date_time).unwrap_or_else(|| "-".to_string())
}

pub fn json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line acknowledgement for actions that return no useful data.
pub fn ack_line<T>(response: &ApiResponse<T>, fallback: &str) -> String {
    response.message_or(fallback).to_string()
}

pub fn payment_lines(page: &Page<PaymentHistoryItem>) -> Vec<String> {
    page.content
        .iter()
        .map(|item| {
            format!(
                "{:<24} {:>14}  {:<10} {}",
                clean_escaped_quotes(item.course_name.as_deref().unwrap_or("-")),
                format_amount(item.amount, DEFAULT_CURRENCY),
                payment_status_label(item.payment_status.as_deref().unwrap_or_default()),
                date_or_dash(item.payment_date.as_deref()),
            )
        })
        .collect()
}

pub fn enrollment_lines(page: &Page<Enrollment>) -> Vec<String> {
    page.content
        .iter()
        .map(|enrollment| {
            format!(
                "{:<28} {:<12} {}",
                clean_escaped_quotes(&enrollment.course_name),
                progress_label(enrollment.progress.as_str()),
                date_or_dash(enrollment.enrollment_date.as_deref()),
            )
        })
        .collect()
}

pub fn grade_lines(dashboard: &GradingDashboard) -> Vec<String> {
    let mut lines: Vec<String> = dashboard
        .course_stats
        .iter()
        .map(|course| {
            format!(
                "{:<28} {:>8}  {}",
                clean_escaped_quotes(&course.course_name),
                format_grade_percentage(course.percentage),
                letter_grade(course.percentage),
            )
        })
        .collect();
    lines.push(format!(
        "Average {} over {} graded assignments",
        format_grade_percentage(dashboard.summary.average_grade),
        dashboard.summary.total_assignments
    ));
    lines
}

pub fn lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
