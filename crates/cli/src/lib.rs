//! Command-line front-end for the stat planner.
//!
//! The binary is a thin composition root: it reads configuration, sets up
//! logging, loads content and hands a [`plan::PlanRequest`] to
//! [`plan::build_plan`]. Rendering lives in [`report`].

pub mod args;
pub mod config;
pub mod logging;
pub mod plan;
pub mod report;

pub use args::Cli;
pub use config::{CliConfig, OutputFormat};
pub use plan::{BuildPlan, PlanRequest, build_plan};
