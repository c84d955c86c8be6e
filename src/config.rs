/// Workspace, project and task the generated entries are booked on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTarget {
    pub workspace_id: String,
    pub project_id: String,
    pub task_id: String,
}

/// What a run does, decided once from the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    ListWorkspaces,
    ListProjects {
        workspace_id: String,
    },
    ListTasks {
        workspace_id: String,
        project_id: String,
    },
    CreateEntries(EntryTarget),
}

impl Mode {
    /// Picks the mode from the optional trailing ids. Later ids are only
    /// considered when the earlier ones are present.
    pub fn from_ids(
        workspace_id: Option<String>,
        project_id: Option<String>,
        task_id: Option<String>,
    ) -> Self {
        match (workspace_id, project_id, task_id) {
            (Some(workspace_id), Some(project_id), Some(task_id)) => {
                Self::CreateEntries(EntryTarget {
                    workspace_id,
                    project_id,
                    task_id,
                })
            }
            (Some(workspace_id), Some(project_id), None) => Self::ListTasks {
                workspace_id,
                project_id,
            },
            (Some(workspace_id), None, _) => Self::ListProjects { workspace_id },
            (None, _, _) => Self::ListWorkspaces,
        }
    }
}

/// Everything a run needs, built once at startup.
#[derive(Clone)]
pub struct RunConfig {
    pub api_key: String,
    pub base_url: String,
    pub mode: Mode,
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("mode", &self.mode)
            .finish()
    }
}
