//! Preview command implementation
//!
//! Renders the planned window as a text heatmap, one line per weekday.

use anyhow::Result;
use chrono::Datelike;
use colored::Colorize;
use contrib_art_core::{Plan, SystemClock, Window};
use std::process::ExitCode;

use super::json_output::{input_error_to_json, to_pretty_json, PlacementSummary, PreviewOutput};
use super::reporting;
use crate::input::{resolve_plan, PlacementOverrides};

/// Character for a lit cell.
pub const LIT: char = '#';
/// Character for a dark cell.
pub const DARK: char = '.';

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Run the preview command
///
/// # Arguments
/// * `overrides` - Placement values from the command line
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 invalid configuration
pub fn run(overrides: &PlacementOverrides, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return Ok(run_json(overrides));
    }

    let plan = resolve_plan(overrides, &SystemClock)?;
    reporting::print_plan_summary(&plan);
    println!();
    println!("    {}", month_header(&plan.window).dimmed());
    let lit = LIT.to_string().green().to_string();
    for (row, line) in render_grid(&plan, LIT, DARK).iter().enumerate() {
        println!("{} {}", row_label(row).dimmed(), line.replace(LIT, &lit));
    }
    Ok(ExitCode::SUCCESS)
}

fn run_json(overrides: &PlacementOverrides) -> ExitCode {
    let output = match resolve_plan(overrides, &SystemClock) {
        Ok(plan) => PreviewOutput {
            success: true,
            errors: Vec::new(),
            summary: Some(PlacementSummary::from(&plan)),
            rows: Some(render_grid(&plan, LIT, DARK)),
        },
        Err(e) => PreviewOutput {
            success: false,
            errors: vec![input_error_to_json(&e)],
            summary: None,
            rows: None,
        },
    };
    println!("{}", to_pretty_json(&output));
    if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Renders the window, one string per row, one character per column.
pub fn render_grid(plan: &Plan, lit: char, dark: char) -> Vec<String> {
    (0..plan.window.height())
        .map(|row| {
            (0..plan.window.width())
                .map(|column| if plan.is_lit(column, row) { lit } else { dark })
                .collect()
        })
        .collect()
}

/// Three-letter month labels over the first column of each month.
pub fn month_header(window: &Window) -> String {
    let mut header = vec![' '; window.width() as usize];
    let mut previous_month = None;
    for column in 0..window.width() {
        let Some(date) = window.date_for(column, 0) else {
            continue;
        };
        if previous_month == Some(date.month()) {
            continue;
        }
        previous_month = Some(date.month());

        let label: Vec<char> = date.format("%b").to_string().chars().collect();
        let slots = header.iter_mut().skip(column as usize).take(label.len());
        let slots: Vec<&mut char> = slots.collect();
        if slots.len() == label.len() && slots.iter().all(|c| **c == ' ') {
            for (slot, ch) in slots.into_iter().zip(label) {
                *slot = ch;
            }
        }
    }
    header.into_iter().collect::<String>().trim_end().to_string()
}

fn row_label(row: usize) -> String {
    match WEEKDAYS.get(row) {
        Some(day) => (*day).to_string(),
        None => format!("{:>3}", row),
    }
}
