use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single security event record, serialized as one JSON object per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for this record (UUID v4 text).
    pub event_id: String,
    /// Event timestamp (RFC3339, UTC).
    pub timestamp: String,
    /// Subject identity, free text.
    pub user: String,
    /// Originating network address, free text.
    pub source_address: String,
    /// What happened.
    pub action: Action,
    /// Category the action applies to (`auth`, `filesystem`, ...).
    pub resource: String,
    /// Action-dependent auxiliary fields; may be empty.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// Recognized event actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    LoginSuccess,
    LoginFail,
    FileAccess,
    AdminAction,
    LogTampering,
}

impl Action {
    /// Returns the wire-format tag for this action.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::LoginSuccess => "LOGIN_SUCCESS",
            Action::LoginFail => "LOGIN_FAIL",
            Action::FileAccess => "FILE_ACCESS",
            Action::AdminAction => "ADMIN_ACTION",
            Action::LogTampering => "LOG_TAMPERING",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
