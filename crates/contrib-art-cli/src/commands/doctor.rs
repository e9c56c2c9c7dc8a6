//! Doctor command implementation
//!
//! Checks that git is usable and the target repository is ready for painting.

use anyhow::Result;
use colored::Colorize;
use contrib_art_git::{EmitError, EmitterConfig, GitEmitter};
use std::process::ExitCode;

/// Run the doctor command
///
/// Checks:
/// - Git installation and version
/// - Target directory is a git work tree with a `HEAD`
/// - Commit identity (`user.name`, `user.email`)
///
/// # Returns
/// Exit code: 0 if all checks pass, 1 if any fail
pub fn run(repo: &str) -> Result<ExitCode> {
    println!("{}", "contrib-art Doctor".cyan().bold());
    println!("{}", "==================".cyan());
    println!();

    let mut all_ok = true;

    println!("{}", "Versions:".bold());
    println!(
        "  {} contrib-art-cli v{}",
        "->".green(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("{}", "Dependencies:".bold());
    let emitter = match GitEmitter::new(EmitterConfig::with_repo(repo)) {
        Ok(emitter) => emitter,
        Err(EmitError::GitNotFound) => {
            println!("  {} git not found in PATH", "!!".red());
            println!(
                "     {}",
                "Install git or set CONTRIB_ART_GIT to its path.".dimmed()
            );
            println!();
            println!(
                "{} Some checks failed. See above for details.",
                "WARNING".yellow().bold()
            );
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e.into()),
    };
    match emitter.version() {
        Ok(version) => println!(
            "  {} {} ({})",
            "ok".green(),
            parse_git_version(&version).map_or(version.clone(), |v| format!("git {v}")),
            emitter.git_path().display()
        ),
        Err(e) => {
            println!("  {} git check failed: {}", "!!".red(), e);
            all_ok = false;
        }
    }
    println!();

    println!("{}", "Repository:".bold());
    match emitter.is_repository() {
        Ok(true) => {
            println!("  {} {} is a git work tree", "ok".green(), repo);
            match emitter.has_head() {
                Ok(true) => println!("  {} HEAD exists", "ok".green()),
                Ok(false) => println!(
                    "  {} No commits yet (paint will create an initial commit)",
                    "!!".yellow()
                ),
                Err(e) => {
                    println!("  {} HEAD check failed: {}", "!!".red(), e);
                    all_ok = false;
                }
            }
        }
        Ok(false) => {
            println!("  {} {} is not a git repository", "!!".yellow(), repo);
            println!(
                "     {}",
                "Run `git init` there, or pass --init to paint.".dimmed()
            );
        }
        Err(e) => {
            println!("  {} Repository check failed: {}", "!!".red(), e);
            all_ok = false;
        }
    }
    println!();

    println!("{}", "Identity:".bold());
    for key in ["user.name", "user.email"] {
        match emitter.config_value(key) {
            Ok(Some(value)) => println!("  {} {} = {}", "ok".green(), key, value),
            Ok(None) => {
                println!("  {} {} is not set", "!!".yellow(), key);
                println!(
                    "     {}",
                    "Set it with git config, or pass --author-name/--author-email to paint."
                        .dimmed()
                );
            }
            Err(e) => {
                println!("  {} Cannot read {}: {}", "!!".red(), key, e);
                all_ok = false;
            }
        }
    }
    println!();

    if all_ok {
        println!("{} All checks passed!", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} Some checks failed. See above for details.",
            "WARNING".yellow().bold()
        );
        Ok(ExitCode::from(1))
    }
}

/// Extract the version from `git --version` output: "git version 2.43.0"
/// becomes "2.43.0".
fn parse_git_version(output: &str) -> Option<&str> {
    output
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("git version "))
        .map(|v| v.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_git_version() {
        assert_eq!(parse_git_version("git version 2.43.0\n"), Some("2.43.0"));
        assert_eq!(
            parse_git_version("git version 2.39.3 (Apple Git-145)"),
            Some("2.39.3 (Apple Git-145)")
        );
        assert_eq!(parse_git_version("hg 6.0"), None);
    }
}
