//! Plan command implementation
//!
//! Computes the lit cells and prints them without touching any repository.

use anyhow::Result;
use colored::Colorize;
use contrib_art_core::{Plan, SystemClock};
use std::process::ExitCode;

use super::json_output::{input_error_to_json, to_pretty_json, PlanOutput};
use super::reporting;
use crate::input::{resolve_plan, PlacementOverrides};

/// Run the plan command
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
    for line in cell_lines(&plan) {
        println!("  {}", line);
    }
    println!();
    println!("{} Planned {} writes", "SUCCESS".green().bold(), plan.total_writes());
    Ok(ExitCode::SUCCESS)
}

fn run_json(overrides: &PlacementOverrides) -> ExitCode {
    match resolve_plan(overrides, &SystemClock) {
        Ok(plan) => {
            println!("{}", to_pretty_json(&PlanOutput::success(&plan)));
            ExitCode::SUCCESS
        }
        Err(e) => {
            let output = PlanOutput::failure(vec![input_error_to_json(&e)]);
            println!("{}", to_pretty_json(&output));
            ExitCode::from(1)
        }
    }
}

/// One human-readable line per lit cell, in write order.
pub fn cell_lines(plan: &Plan) -> Vec<String> {
    plan.cells
        .iter()
        .map(|cell| {
            format!(
                "{} {}  col={:>2} row={}  x{}",
                cell.date,
                cell.date.format("%a"),
                cell.column,
                cell.row,
                cell.write_count
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contrib_art_core::{plan, FixedClock, PlanRequest};

    #[test]
    fn test_cell_lines() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let plan = plan(
            &PlanRequest::new("T").with_intensity(3).with_start_date(start),
            &FixedClock(start),
        )
        .unwrap();
        let lines = cell_lines(&plan);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "2024-01-07 Sun  col= 0 row=0  x3");
        assert_eq!(lines[3], "2024-01-22 Mon  col= 2 row=1  x3");
    }
}
