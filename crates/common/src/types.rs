use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Review outcome codes reported by the homework API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Resolve a raw status code. Returns `None` for codes outside the verdict table.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(HomeworkStatus::Approved),
            "reviewing" => Some(HomeworkStatus::Reviewing),
            "rejected" => Some(HomeworkStatus::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict sent to the chat.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HomeworkStatus::Approved => write!(f, "approved"),
            HomeworkStatus::Reviewing => write!(f, "reviewing"),
            HomeworkStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// One homework entry as reported by the API.
///
/// Both fields stay optional here; their presence is checked when the
/// record is turned into a message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HomeworkRecord {
    pub homework_name: Option<String>,
    pub status: Option<String>,
}

impl HomeworkRecord {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: Some(name.into()),
            status: Some(status.into()),
        }
    }
}

/// A payload that passed shape validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// Server-side unix time of the response
    pub current_date: i64,

    /// Raw entries in the order the API returned them (oldest first).
    /// Only the entry that gets reported is parsed into a `HomeworkRecord`.
    pub homeworks: Vec<Value>,
}

/// Mutable state owned by the poll loop. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// Unix time passed as `from_date` on the next request
    pub next_timestamp: i64,

    /// Last message delivered to the chat, used to suppress repeats
    pub last_notified_message: Option<String>,
}

impl PollState {
    pub fn new(next_timestamp: i64) -> Self {
        Self {
            next_timestamp,
            last_notified_message: None,
        }
    }
}
