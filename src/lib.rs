//! Clockify month filler library
//!
//! This library lists Clockify workspaces, projects and tasks, and creates
//! one time entry per working day of the current month.

pub mod cli;
pub mod config;
pub mod error;
pub mod helpers;
pub mod models;
pub mod service;

pub use config::{EntryTarget, Mode, RunConfig};
pub use error::ClockifyError;
pub use service::{run_bulk_creation, ClockifyService};

// Re-export key types for convenience
pub use helpers::calendar::{generate_days, CalendarDay};
pub use helpers::clockify::{ApiResponse, HttpRestClient, RestClient};
pub use helpers::entry::FixedOffsetPolicy;
pub use models::outcome::{OutcomeStatus, SubmissionOutcome};
