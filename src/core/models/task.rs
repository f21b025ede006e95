use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type TaskId = u64;

/// Workflow status of a task.
///
/// The three known labels double as the board's column ids. Any other label
/// coming from the API is preserved in `Unrecognized` so the task still loads,
/// but it belongs to no column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    ToDo,
    Doing,
    Done,
    Unrecognized(String),
}

impl TaskStatus {
    /// Column key space of the board, in display order.
    pub const COLUMNS: [TaskStatus; 3] = [TaskStatus::ToDo, TaskStatus::Doing, TaskStatus::Done];

    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::ToDo => "A fazer",
            TaskStatus::Doing => "Fazendo",
            TaskStatus::Done => "Pronto",
            TaskStatus::Unrecognized(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "A fazer" => TaskStatus::ToDo,
            "Fazendo" => TaskStatus::Doing,
            "Pronto" => TaskStatus::Done,
            other => TaskStatus::Unrecognized(other.to_string()),
        }
    }

    /// Strict parse used by selectors: only column labels are accepted.
    pub fn parse_column(label: &str) -> Option<Self> {
        match Self::from_label(label) {
            TaskStatus::Unrecognized(_) => None,
            status => Some(status),
        }
    }

    pub fn is_column(&self) -> bool {
        !matches!(self, TaskStatus::Unrecognized(_))
    }
}

impl From<String> for TaskStatus {
    fn from(label: String) -> Self {
        TaskStatus::from_label(&label)
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Baixa,
    Media,
    Alta,
    Unrecognized(String),
}

impl Priority {
    /// Values accepted by the task form.
    pub const CHOICES: [&'static str; 3] = ["Baixa", "Media", "Alta"];

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Baixa => "Baixa",
            Priority::Media => "Media",
            Priority::Alta => "Alta",
            Priority::Unrecognized(label) => label,
        }
    }

    /// Label shown to the user (accented where the wire value is not).
    pub fn display_name(&self) -> &str {
        match self {
            Priority::Media => "Média",
            other => other.as_str(),
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Baixa" => Priority::Baixa,
            "Media" => Priority::Media,
            "Alta" => Priority::Alta,
            other => Priority::Unrecognized(other.to_string()),
        }
    }

    pub fn parse_choice(label: &str) -> Option<Self> {
        match Self::from_label(label) {
            Priority::Unrecognized(_) => None,
            priority => Some(priority),
        }
    }

    pub fn all() -> Vec<Priority> {
        vec![Priority::Baixa, Priority::Media, Priority::Alta]
    }
}

impl From<String> for Priority {
    fn from(label: String) -> Self {
        Priority::from_label(&label)
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub descricao: String,
    pub setor: String,
    pub prioridade: Priority,
    pub status: TaskStatus,
    /// Owner as the API reports it; numeric ids are kept as text.
    #[serde(
        default,
        deserialize_with = "lenient_owner",
        skip_serializing_if = "Option::is_none"
    )]
    pub usuario: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OwnerRef {
    Id(u64),
    Name(String),
}

fn lenient_owner<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<OwnerRef>::deserialize(deserializer)?.map(|owner| match owner {
        OwnerRef::Id(id) => id.to_string(),
        OwnerRef::Name(name) => name,
    }))
}

// The API may send either RFC 3339 or a naive UTC timestamp; anything else is dropped.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        DateTime::parse_from_rfc3339(&value)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S%.f")
                    .map(|naive| naive.and_utc())
                    .ok()
            })
    }))
}

impl Task {
    pub fn update_status(&mut self, new_status: TaskStatus) {
        self.status = new_status;
    }

    /// Apply the fields present in a patch.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(descricao) = &patch.descricao {
            self.descricao = descricao.clone();
        }
        if let Some(setor) = &patch.setor {
            self.setor = setor.clone();
        }
        if let Some(prioridade) = &patch.prioridade {
            self.prioridade = prioridade.clone();
        }
        if let Some(status) = &patch.status {
            self.status = status.clone();
        }
    }
}

/// Partial update sent with `PATCH /tarefa/{id}/`. Absent fields are omitted
/// from the JSON body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prioridade: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Payload of the task registration form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTask {
    pub descricao: String,
    pub setor: String,
    pub prioridade: Priority,
    pub usuario: String,
}
