use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// Response structs for the Clockify API

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: String,
    pub name: String,
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  Name: {} (ID: {})", self.name, self.id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client_id: Option<String>,
    pub client_name: Option<String>,
}

impl Project {
    /// Client label shown in listings. A project only has a client when
    /// `clientId` is set, whatever `clientName` says.
    pub fn client_label(&self) -> &str {
        match &self.client_id {
            Some(id) if !id.is_empty() => self.client_name.as_deref().unwrap_or(""),
            _ => "None",
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  Name: {} (ID: {}), Client: {}",
            self.name,
            self.id,
            self.client_label()
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub status: String,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  Name: {} (ID: {}), Status: {}",
            self.name, self.id, self.status
        )
    }
}

// Request body for POST workspaces/{id}/time-entries
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryRequest {
    pub billable: bool,
    pub project_id: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub start: DateTime<FixedOffset>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub end: DateTime<FixedOffset>,
    pub task_id: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    Regular,
}

/// Whole seconds with the offset spelled out, e.g. `2024-06-17T08:00:00+02:00`.
pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, false)
}

fn serialize_timestamp<S>(ts: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}
