//! Intercept CLI - command line front end for interceptor camera analysis.
//!
//! This crate provides:
//! - intercept presets: list the camera presets
//! - intercept eval: evaluate one flight scenario and print a report
//! - intercept session: line-delimited JSON requests against one registry

pub mod config;
pub mod eval;
pub mod logging;
pub mod report;
pub mod session;

pub use config::{Config, OutputFormat};
pub use eval::{run_eval, EvalRequest};
pub use logging::init_tracing;
pub use report::{Report, ViewCone};
pub use session::Session;
