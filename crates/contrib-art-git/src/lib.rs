//! contrib-art git emitter
//!
//! Turns a [`contrib_art_core::Plan`] into backdated commits. Each lit cell
//! gets `write_count` commits dated from noon (by default) on the cell's day,
//! one minute apart (one second apart when that would run past midnight),
//! each appending a line to an art file so the commit is never empty.
//!
//! ```no_run
//! use contrib_art_core::{plan, PlanRequest, SystemClock};
//! use contrib_art_git::{EmitterConfig, GitEmitter};
//!
//! let plan = plan(&PlanRequest::default(), &SystemClock).unwrap();
//! let emitter = GitEmitter::new(EmitterConfig::with_repo("art-repo").init_if_missing(true)).unwrap();
//! emitter.ensure_repository().unwrap();
//! let report = emitter.emit(&plan).unwrap();
//! println!("created {} commits", report.commits);
//! ```

pub mod emitter;
pub mod error;
pub mod record;

pub use emitter::{
    find_git, Author, EmitProgress, EmitReport, EmitterConfig, GitEmitter, RepositoryState,
    DEFAULT_ART_FILE, GIT_PATH_ENV, INITIAL_COMMIT_MESSAGE, KEEP_FILE,
};
pub use error::{EmitError, EmitResult};
pub use record::{
    commit_spacing, commit_timestamp, max_commits_per_day, pending_commits, PendingCommit,
    DEFAULT_COMMIT_HOUR,
};
