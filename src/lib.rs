//! Read-only analysis of HTML design drafts and of the front-end projects
//! they are restored into.

pub mod classify;
pub mod cli;
pub mod config;
pub mod css;
pub mod detect;
pub mod error;
pub mod html;
pub mod project;
pub mod target;

pub use detect::{detect_project, DetectOptions, StackReport};
pub use error::ScanError;
pub use html::{inspect, inspect_file, Inspection, InspectionReport};
pub use target::{suggest_target, TargetOptions, TargetReport};
