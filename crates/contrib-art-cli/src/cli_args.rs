//! CLI argument definitions for the contrib-art command-line interface.
//!
//! All `#[derive(Parser)]`, `#[derive(Subcommand)]` and `#[derive(Args)]`
//! types are defined here, keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};
use contrib_art_cli::commands::paint::PaintOptions;
use contrib_art_cli::input::PlacementOverrides;

/// contrib-art - Paint words onto a git contribution graph
#[derive(Parser)]
#[command(name = "contrib-art")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Compute the lit cells, their dates and write counts
    Plan {
        #[command(flatten)]
        placement: PlacementArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render the planned art as a 7-row text grid
    Preview {
        #[command(flatten)]
        placement: PlacementArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Write backdated commits that draw the art into a git repository
    Paint {
        #[command(flatten)]
        placement: PlacementArgs,

        #[command(flatten)]
        repo: RepoArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check git and repository setup
    Doctor {
        /// Repository to check
        #[arg(long, default_value = ".")]
        repo: String,
    },
}

/// Placement flags shared by every planning command.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct PlacementArgs {
    /// Path to a JSON art spec (flags override its values)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Word to draw (default: SHOWKAT)
    #[arg(short, long)]
    pub word: Option<String>,

    /// Horizontal anchor inside the window
    #[arg(short, long, value_parser = ["left", "center", "right"])]
    pub anchor: Option<String>,

    /// Extra columns to shift the word by (may be negative)
    #[arg(short, long, allow_negative_numbers = true)]
    pub offset: Option<i64>,

    /// Writes per lit pixel (default: 5)
    #[arg(short, long, allow_negative_numbers = true)]
    pub intensity: Option<i64>,

    /// Pin the window start to this Sunday (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Window width in weeks (default: 52)
    #[arg(long, allow_negative_numbers = true)]
    pub window_width: Option<i64>,

    /// Window height in days (default: 7)
    #[arg(long, allow_negative_numbers = true)]
    pub window_height: Option<i64>,
}

impl From<PlacementArgs> for PlacementOverrides {
    fn from(args: PlacementArgs) -> Self {
        Self {
            config: args.config,
            word: args.word,
            anchor: args.anchor,
            offset: args.offset,
            intensity: args.intensity,
            start_date: args.start_date,
            window_width: args.window_width,
            window_height: args.window_height,
        }
    }
}

/// Repository flags for `paint`.
#[derive(Args, Debug, Clone)]
pub(crate) struct RepoArgs {
    /// Git work tree to commit into
    #[arg(short, long, default_value = ".")]
    pub repo: String,

    /// Show what would be written without touching the repository
    #[arg(long)]
    pub dry_run: bool,

    /// Run `git init` if the repository does not exist yet
    #[arg(long)]
    pub init: bool,

    /// Author name for the commits (requires --author-email)
    #[arg(long)]
    pub author_name: Option<String>,

    /// Author email for the commits (requires --author-name)
    #[arg(long)]
    pub author_email: Option<String>,

    /// Hour of day for the first commit on each date (0-23)
    #[arg(long, default_value_t = contrib_art_git::DEFAULT_COMMIT_HOUR)]
    pub commit_hour: u32,

    /// File inside the repository that each commit appends to
    #[arg(long, default_value = contrib_art_git::DEFAULT_ART_FILE)]
    pub art_file: String,

    /// Path to the git executable
    #[arg(long)]
    pub git: Option<String>,
}

impl From<RepoArgs> for PaintOptions {
    fn from(args: RepoArgs) -> Self {
        Self {
            repo: args.repo,
            dry_run: args.dry_run,
            init: args.init,
            author_name: args.author_name,
            author_email: args.author_email,
            commit_hour: args.commit_hour,
            art_file: args.art_file,
            git_path: args.git,
        }
    }
}
