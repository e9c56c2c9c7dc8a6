//! contrib-art CLI library.
//!
//! This crate provides the command implementations behind the `contrib-art`
//! binary: config loading, planning, previewing, and painting commits.

pub mod commands;
pub mod input;
