use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Display;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::{
    config::{EntryTarget, Mode},
    error::ClockifyError,
    helpers::{
        calendar::generate_days,
        clockify::RestClient,
        entry::FixedOffsetPolicy,
    },
    models::{
        clockify::{Project, Task, Workspace},
        outcome::{OutcomeStatus, RunSummary, SubmissionOutcome},
    },
};

/// Pause after every submitted entry; the API allows about 50 requests/second.
pub const SUBMISSION_DELAY: Duration = Duration::from_millis(20);

/// Lists Clockify data and fills the current month with time entries
pub struct ClockifyService<C: RestClient> {
    pub client: C,
    pub policy: FixedOffsetPolicy,
    pub delay: Duration,
}

impl<C: RestClient> ClockifyService<C> {
    pub fn new(client: C, policy: FixedOffsetPolicy) -> Self {
        info!("Creating new ClockifyService instance");
        Self {
            client,
            policy,
            delay: SUBMISSION_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Runs the selected mode, printing its report to stdout.
    pub async fn run(&self, mode: &Mode, today: NaiveDate) -> Result<(), ClockifyError> {
        match mode {
            Mode::ListWorkspaces => {
                println!("Listing available workspaces...");
                println!("{}", self.list_workspaces().await?);
            }
            Mode::ListProjects { workspace_id } => {
                println!("Listing projects in workspace: {workspace_id}...");
                println!("{}", self.list_projects(workspace_id).await?);
            }
            Mode::ListTasks {
                workspace_id,
                project_id,
            } => {
                println!("Listing tasks for project: {project_id} in workspace: {workspace_id}...");
                println!("{}", self.list_tasks(workspace_id, project_id).await?);
            }
            Mode::CreateEntries(target) => {
                println!("Creating time entries for current month...");
                let outcomes = self.create_entries(today, target).await?;
                println!("{}", RunSummary::from_outcomes(&outcomes));
            }
        }
        Ok(())
    }

    pub async fn list_workspaces(&self) -> Result<String, ClockifyError> {
        let workspaces = match self.fetch_list::<Workspace>("workspaces").await? {
            Ok(workspaces) => workspaces,
            Err(failure) => return Ok(format!("Error fetching workspaces {failure}")),
        };

        Ok(render_list(&workspaces, None, "No workspaces found."))
    }

    pub async fn list_projects(&self, workspace_id: &str) -> Result<String, ClockifyError> {
        let path = format!("workspaces/{workspace_id}/projects");
        let projects = match self.fetch_list::<Project>(&path).await? {
            Ok(projects) => projects,
            Err(failure) => {
                return Ok(format!(
                    "Error fetching projects for workspace '{workspace_id}' {failure}"
                ));
            }
        };

        Ok(render_list(
            &projects,
            Some(format!("Projects in workspace '{workspace_id}':")),
            &format!("No projects found in workspace ID '{workspace_id}'."),
        ))
    }

    pub async fn list_tasks(
        &self,
        workspace_id: &str,
        project_id: &str,
    ) -> Result<String, ClockifyError> {
        let path = format!("workspaces/{workspace_id}/projects/{project_id}/tasks");
        let tasks = match self.fetch_list::<Task>(&path).await? {
            Ok(tasks) => tasks,
            Err(failure) => {
                return Ok(format!(
                    "Error fetching tasks for project '{project_id}' {failure}"
                ));
            }
        };

        Ok(render_list(
            &tasks,
            Some(format!(
                "Tasks for project '{project_id}' (in workspace '{workspace_id}'):"
            )),
            &format!(
                "No tasks found for project ID '{project_id}' in workspace ID '{workspace_id}'."
            ),
        ))
    }

    /// Bulk creation with each outcome printed as soon as it is known.
    pub async fn create_entries(
        &self,
        today: NaiveDate,
        target: &EntryTarget,
    ) -> Result<Vec<SubmissionOutcome>, ClockifyError> {
        run_bulk_creation(
            today,
            target,
            &self.policy,
            &self.client,
            self.delay,
            |outcome| println!("{outcome}"),
        )
        .await
    }

    /// `Ok(Err(..))` carries the "(status): body" text of a non-2xx answer.
    async fn fetch_list<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Result<Vec<T>, String>, ClockifyError> {
        let response = self.client.get(path).await?;
        if !response.is_success() {
            return Ok(Err(format!("({}): {}", response.status, response.body)));
        }

        match serde_json::from_str::<Vec<T>>(&response.body) {
            Ok(items) => {
                info!("Fetched {} items from {}", items.len(), path);
                Ok(Ok(items))
            }
            Err(e) => {
                error!("Failed to parse response from {}: {}", path, e);
                debug!("Raw response: {}", response.body);
                Err(e.into())
            }
        }
    }
}

fn render_list<T: Display>(items: &[T], header: Option<String>, empty_message: &str) -> String {
    if items.is_empty() {
        return empty_message.to_string();
    }

    header
        .into_iter()
        .chain(items.iter().map(ToString::to_string))
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_payload<T: Serialize>(body: &T) -> Result<serde_json::Value, ClockifyError> {
    serde_json::to_value(body).map_err(|e| {
        error!("Failed to encode request body: {}", e);
        ClockifyError::Payload(e)
    })
}

/// Walks the month up to `today`, posting one entry per working day.
///
/// Weekends are reported as skipped without touching the API. A non-2xx answer
/// becomes a failed outcome and the walk continues; transport errors abort it.
pub async fn run_bulk_creation<C, F>(
    today: NaiveDate,
    target: &EntryTarget,
    policy: &FixedOffsetPolicy,
    client: &C,
    delay: Duration,
    mut report: F,
) -> Result<Vec<SubmissionOutcome>, ClockifyError>
where
    C: RestClient + ?Sized,
    F: FnMut(&SubmissionOutcome),
{
    info!(
        "Creating time entries up to {} for project {} (offset {})",
        today,
        target.project_id,
        policy.offset()
    );
    let path = format!("workspaces/{}/time-entries", target.workspace_id);
    let mut outcomes = Vec::new();

    for day in generate_days(today) {
        if day.is_weekend() {
            debug!("Skipping weekend day {}", day);
            let outcome = SubmissionOutcome {
                day,
                status: OutcomeStatus::Skipped,
            };
            report(&outcome);
            outcomes.push(outcome);
            continue;
        }

        let entry = policy.build_entry(day, &target.project_id, &target.task_id);
        let payload = to_payload(&entry)?;
        let response = client.post(&path, &payload).await?;

        let status = if response.is_success() {
            info!("Created time entry for {}", day);
            OutcomeStatus::Success
        } else {
            error!("Failed to create time entry for {}: {}", day, response.status);
            OutcomeStatus::Failed {
                status_code: response.status,
                body: response.body,
            }
        };

        let outcome = SubmissionOutcome { day, status };
        report(&outcome);
        outcomes.push(outcome);

        tokio::time::sleep(delay).await;
    }

    info!("Finished walking {} days", outcomes.len());
    Ok(outcomes)
}
