//! CLI command implementations

pub mod doctor;
pub mod json_output;
pub mod paint;
pub mod plan;
pub mod preview;

mod reporting;
