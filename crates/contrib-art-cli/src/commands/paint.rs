//! Paint command implementation
//!
//! Plans the art, then writes the backdated commits into a git repository.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use contrib_art_core::{Plan, SystemClock};
use contrib_art_git::{
    pending_commits, Author, EmitError, EmitProgress, EmitterConfig, GitEmitter,
};
use std::process::ExitCode;

use super::json_output::{
    emit_error_to_json, error_codes, input_error_to_json, to_pretty_json, JsonError, PaintOutput,
    PaintResult, PlacementSummary,
};
use super::reporting;
use crate::input::{resolve_plan, PlacementOverrides};

/// Commits between progress lines.
const PROGRESS_EVERY: u64 = 50;

/// Number of pending commits listed by a dry run.
const DRY_RUN_SAMPLE: usize = 10;

/// Repository and emitter options for `paint`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintOptions {
    /// Work tree to commit into.
    pub repo: String,
    /// Plan and report without writing.
    pub dry_run: bool,
    /// Run `git init` when the repo does not exist.
    pub init: bool,
    /// Author name override.
    pub author_name: Option<String>,
    /// Author email override.
    pub author_email: Option<String>,
    /// Hour of day for the first commit on each date.
    pub commit_hour: u32,
    /// Art file, relative to the repo.
    pub art_file: String,
    /// Explicit git executable.
    pub git_path: Option<String>,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            repo: ".".to_string(),
            dry_run: false,
            init: false,
            author_name: None,
            author_email: None,
            commit_hour: contrib_art_git::DEFAULT_COMMIT_HOUR,
            art_file: contrib_art_git::DEFAULT_ART_FILE.to_string(),
            git_path: None,
        }
    }
}

impl PaintOptions {
    /// Builds and validates the emitter configuration.
    ///
    /// Author name and email must be given together, the commit hour must be
    /// in `0..=23`, and the art file must be a relative path. Runs before the
    /// dry-run branch, so a dry run rejects what a real run would.
    pub fn emitter_config(&self) -> Result<EmitterConfig> {
        let mut config = EmitterConfig::with_repo(&self.repo)
            .art_file(&self.art_file)
            .commit_hour(self.commit_hour)
            .init_if_missing(self.init);
        match (&self.author_name, &self.author_email) {
            (Some(name), Some(email)) => config = config.author(Author::new(name, email)),
            (None, None) => {}
            _ => bail!("--author-name and --author-email must be given together"),
        }
        if let Some(git) = &self.git_path {
            config = config.git_path(git);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Run the paint command
///
/// # Arguments
/// * `overrides` - Placement values from the command line
/// * `options` - Repository and emitter options
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    overrides: &PlacementOverrides,
    options: &PaintOptions,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        return Ok(run_json(overrides, options));
    }

    let config = options.emitter_config()?;
    let plan = resolve_plan(overrides, &SystemClock)?;
    reporting::print_plan_summary(&plan);
    println!();

    if plan.total_writes() == 0 {
        eprintln!(
            "{} Plan has no writes; repository left untouched",
            "!".yellow()
        );
        return Ok(ExitCode::SUCCESS);
    }
    pending_commits(&plan, options.commit_hour).context("Cannot schedule commits")?;

    if options.dry_run {
        print_dry_run(&plan, options)?;
        return Ok(ExitCode::SUCCESS);
    }

    let emitter = GitEmitter::new(config).context("Failed to set up git")?;

    let state = emitter
        .ensure_repository()
        .with_context(|| format!("Failed to prepare repository: {}", options.repo))?;
    if state.initialized {
        println!("  {} Initialized git repository in {}", "ok".green(), options.repo);
    }
    if state.initial_commit {
        println!("  {} Created initial commit", "ok".green());
    }

    println!("{} {}", "Painting:".cyan().bold(), options.repo);
    let report = emitter
        .emit_with_progress(&plan, print_progress)
        .context("Failed to write commits")?;

    println!();
    if let (Some(first), Some(last)) = (report.first_date, report.last_date) {
        println!("  {} Commits dated {} to {}", "->".green(), first, last);
    }
    println!(
        "{} Done. Created {} commits for '{}'.",
        "SUCCESS".green().bold(),
        report.commits,
        plan.word
    );
    Ok(ExitCode::SUCCESS)
}

fn print_progress(progress: &EmitProgress) {
    if progress.made % PROGRESS_EVERY == 0 || progress.made == progress.total {
        println!(
            "  {} {}/{} commits (at {})",
            "->".green(),
            progress.made,
            progress.total,
            progress.cell.date
        );
    }
}

fn print_dry_run(plan: &Plan, options: &PaintOptions) -> Result<()> {
    let total = plan.total_writes();
    let sample = pending_commits(plan, options.commit_hour)
        .context("Cannot schedule commits")?
        .take(DRY_RUN_SAMPLE)
        .collect::<Result<Vec<_>, _>>()?;

    println!("{} {}", "Dry run:".cyan().bold(), options.repo);
    for commit in &sample {
        println!("  {}  {}", commit.git_date(), commit.message());
    }
    let shown = sample.len() as u64;
    if total > shown {
        println!("  {}", format!("... and {} more", total - shown).dimmed());
    }
    println!();
    println!(
        "{} Would create {} commits for '{}'",
        "DRY RUN".yellow().bold(),
        total,
        plan.word
    );
    Ok(())
}

/// Maps an option error to JSON, keeping the emitter's code when there is one.
fn options_error_to_json(err: &anyhow::Error) -> JsonError {
    match err.downcast_ref::<EmitError>() {
        Some(e) => emit_error_to_json(e),
        None => JsonError::new(error_codes::INVALID_OPTIONS, err.to_string()),
    }
}

fn run_json(overrides: &PlacementOverrides, options: &PaintOptions) -> ExitCode {
    let output = paint_json(overrides, options);
    println!("{}", to_pretty_json(&output));
    if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn paint_json(overrides: &PlacementOverrides, options: &PaintOptions) -> PaintOutput {
    let failure = |summary: Option<PlacementSummary>, error: JsonError| PaintOutput {
        success: false,
        errors: vec![error],
        summary,
        result: None,
    };

    let config = match options.emitter_config() {
        Ok(config) => config,
        Err(e) => return failure(None, options_error_to_json(&e)),
    };
    let plan = match resolve_plan(overrides, &SystemClock) {
        Ok(plan) => plan,
        Err(e) => return failure(None, input_error_to_json(&e)),
    };
    let summary = PlacementSummary::from(&plan);
    if let Err(e) = pending_commits(&plan, options.commit_hour) {
        return failure(Some(summary), emit_error_to_json(&e));
    }

    let mut result = PaintResult {
        repo: options.repo.clone(),
        dry_run: options.dry_run,
        initialized: false,
        initial_commit: false,
        commits: plan.total_writes(),
        first_date: None,
        last_date: None,
    };
    if let Some((first, last)) = plan.date_range().filter(|_| plan.total_writes() > 0) {
        result.first_date = Some(first.to_string());
        result.last_date = Some(last.to_string());
    }

    if options.dry_run || plan.total_writes() == 0 {
        return PaintOutput {
            success: true,
            errors: Vec::new(),
            summary: Some(summary),
            result: Some(result),
        };
    }

    let emitted = GitEmitter::new(config).and_then(|emitter| {
        let state = emitter.ensure_repository()?;
        let report = emitter.emit(&plan)?;
        Ok((state, report))
    });

    match emitted {
        Ok((state, report)) => {
            let mut result = PaintResult::from_report(options.repo.clone(), &report);
            result.initialized = state.initialized;
            result.initial_commit = state.initial_commit;
            PaintOutput {
                success: true,
                errors: Vec::new(),
                summary: Some(summary),
                result: Some(result),
            }
        }
        Err(e) => failure(Some(summary), emit_error_to_json(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PaintOptions::default();
        assert_eq!(options.repo, ".");
        assert_eq!(options.commit_hour, 12);
        assert_eq!(options.art_file, "art.txt");
    }

    #[test]
    fn test_author_requires_both_fields() {
        let options = PaintOptions {
            author_name: Some("Ada".to_string()),
            ..Default::default()
        };
        let err = options.emitter_config().unwrap_err();
        assert!(err.to_string().contains("--author-email"));
    }

    #[test]
    fn test_emitter_config_from_options() {
        let options = PaintOptions {
            repo: "art".to_string(),
            init: true,
            author_name: Some("Ada".to_string()),
            author_email: Some("ada@example.com".to_string()),
            commit_hour: 8,
            ..Default::default()
        };
        let config = options.emitter_config().unwrap();
        assert_eq!(config.repo_dir, std::path::PathBuf::from("art"));
        assert!(config.init_if_missing);
        assert_eq!(config.commit_hour, 8);
        assert_eq!(config.author, Some(Author::new("Ada", "ada@example.com")));
    }

    #[test]
    fn test_json_dry_run_reports_without_repo() {
        let overrides = PlacementOverrides {
            start_date: Some("2024-01-07".to_string()),
            intensity: Some(2),
            ..Default::default()
        };
        let options = PaintOptions {
            repo: "/nonexistent/repo".to_string(),
            dry_run: true,
            ..Default::default()
        };
        let output = paint_json(&overrides, &options);
        assert!(output.success);
        let result = output.result.unwrap();
        assert!(result.dry_run);
        assert_eq!(result.commits, output.summary.unwrap().total_writes);
        assert_eq!(result.first_date.as_deref(), Some("2024-01-07"));
    }

    #[test]
    fn test_dry_run_validates_options() {
        let options = PaintOptions {
            dry_run: true,
            commit_hour: 30,
            ..Default::default()
        };
        let err = options.emitter_config().unwrap_err();
        assert!(err.to_string().contains("commit hour"));
    }

    #[test]
    fn test_json_dry_run_rejects_half_author() {
        let overrides = PlacementOverrides {
            start_date: Some("2024-01-07".to_string()),
            ..Default::default()
        };
        let options = PaintOptions {
            dry_run: true,
            author_name: Some("Ada".to_string()),
            ..Default::default()
        };
        let output = paint_json(&overrides, &options);
        assert!(!output.success);
        assert_eq!(output.errors[0].code, "CLI_004");
        assert!(output.result.is_none());
    }

    #[test]
    fn test_json_dry_run_rejects_bad_hour() {
        let options = PaintOptions {
            dry_run: true,
            commit_hour: 30,
            ..Default::default()
        };
        let output = paint_json(&PlacementOverrides::default(), &options);
        assert!(!output.success);
        assert_eq!(output.errors[0].code, "GIT_005");
    }

    #[test]
    fn test_json_dry_run_rejects_overfull_day() {
        let overrides = PlacementOverrides {
            start_date: Some("2024-01-07".to_string()),
            intensity: Some(i64::from(u32::MAX)),
            ..Default::default()
        };
        let options = PaintOptions {
            dry_run: true,
            ..Default::default()
        };
        let output = paint_json(&overrides, &options);
        assert!(!output.success);
        assert_eq!(output.errors[0].code, "GIT_008");
        assert!(output.summary.is_some());
        assert!(output.result.is_none());
    }

    #[test]
    fn test_json_invalid_config_fails_before_git() {
        let overrides = PlacementOverrides {
            window_width: Some(0),
            ..Default::default()
        };
        let output = paint_json(&overrides, &PaintOptions::default());
        assert!(!output.success);
        assert_eq!(output.errors[0].code, "ART_002");
        assert!(output.result.is_none());
    }
}
