//! Command-line argument definitions.

use clap::Parser;
use thiserror::Error;
use tracing::debug;

use crate::config::{Mode, RunConfig};
use crate::helpers::clockify::CLOCKIFY_API_URL;

pub const USAGE: &str = "\
Usage: clockify-month-fill <api_key> [workspace_id] [project_id] [task_id]
  - If only <api_key> is provided: Lists available workspaces.
  - If <api_key> and <workspace_id> are provided: Lists projects in that workspace.
  - If <api_key>, <workspace_id>, and <project_id> are provided: Lists tasks for that project.
  - If <api_key>, <workspace_id>, <project_id>, and <task_id> are provided: Creates time entries for the current month.";

/// Lists Clockify workspaces, projects and tasks, or fills the current month
/// with 08:00-16:00 time entries.
#[derive(Debug, Parser)]
#[command(name = "clockify-month-fill", version, about, long_about = None, after_help = USAGE)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Root of the Clockify REST API.
    #[arg(long, env = "CLOCKIFY_API_URL", default_value = CLOCKIFY_API_URL)]
    pub base_url: String,

    /// Clockify API key, sent as X-Api-Key.
    pub api_key: Option<String>,

    /// Workspace to list projects of.
    pub workspace_id: Option<String>,

    /// Project to list tasks of.
    pub project_id: Option<String>,

    /// Task to book the current month on.
    pub task_id: Option<String>,

    /// Anything after the task id is ignored.
    #[arg(hide = true, num_args = 0..)]
    pub ignored: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("missing API key")]
    MissingApiKey,
}

impl Cli {
    pub fn into_config(self) -> Result<RunConfig, CliError> {
        let api_key = match self.api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(CliError::MissingApiKey),
        };

        if !self.ignored.is_empty() {
            debug!("Ignoring {} trailing arguments", self.ignored.len());
        }

        let mode = Mode::from_ids(self.workspace_id, self.project_id, self.task_id);
        Ok(RunConfig {
            api_key,
            base_url: self.base_url,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EntryTarget;

    fn parse(args: &[&str]) -> Result<RunConfig, CliError> {
        let argv = std::iter::once("clockify-month-fill").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().into_config()
    }

    #[test]
    fn no_arguments_is_missing_api_key() {
        assert_eq!(parse(&[]).unwrap_err(), CliError::MissingApiKey);
    }

    #[test]
    fn blank_api_key_is_missing_api_key() {
        assert_eq!(parse(&["  "]).unwrap_err(), CliError::MissingApiKey);
    }

    #[test]
    fn arity_selects_mode() {
        assert_eq!(parse(&["key"]).unwrap().mode, Mode::ListWorkspaces);
        assert_eq!(
            parse(&["key", "ws"]).unwrap().mode,
            Mode::ListProjects { workspace_id: "ws".into() }
        );
        assert_eq!(
            parse(&["key", "ws", "p"]).unwrap().mode,
            Mode::ListTasks {
                workspace_id: "ws".into(),
                project_id: "p".into()
            }
        );
        assert_eq!(
            parse(&["key", "ws", "p", "t"]).unwrap().mode,
            Mode::CreateEntries(EntryTarget {
                workspace_id: "ws".into(),
                project_id: "p".into(),
                task_id: "t".into(),
            })
        );
    }

    #[test]
    fn base_url_flag_overrides_default() {
        let config = parse(&["--base-url", "http://localhost:9000/api/v1/", "key"]).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/api/v1/");
        assert_eq!(config.api_key, "key");
    }

    #[test]
    fn arguments_after_task_id_are_ignored() {
        assert_eq!(
            parse(&["key", "ws", "p", "t", "extra", "more"]).unwrap().mode,
            Mode::CreateEntries(EntryTarget {
                workspace_id: "ws".into(),
                project_id: "p".into(),
                task_id: "t".into(),
            })
        );
    }
}
