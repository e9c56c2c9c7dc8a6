//! contrib-art End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the placement laws and for
//! painting into a real git repository:
//!
//! - Placement: word -> lit cells, dates, and write counts
//! - Painting: plan -> backdated commits in a scratch repository
//!
//! ## Running Tests
//!
//! ```bash
//! # Run everything (git tests skip themselves when git is missing)
//! cargo test -p contrib-art-tests
//! ```

pub mod fixtures;
pub mod harness;

// Re-export commonly used items
pub use fixtures::{date, fixed_clock, pinned_request, REFERENCE_SUNDAY};
pub use harness::{is_git_available, ScratchRepo};
