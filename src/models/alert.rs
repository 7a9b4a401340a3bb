use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Maintenance,
    Schedule,
    General,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Maintenance => "maintenance",
            AlertType::Schedule => "schedule",
            AlertType::General => "general",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "maintenance" => Some(AlertType::Maintenance),
            "schedule" => Some(AlertType::Schedule),
            "general" => Some(AlertType::General),
            _ => None,
        }
    }
}

/// A notification shown on the dashboard until resolved.
///
/// `date` and `resolved` are set by the store on creation; `resolved` only
/// ever moves from false to true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertType,
    pub message: String,
    pub date: DateTime<Utc>,
    pub resolved: bool,
}

impl Alert {
    pub fn new(id: String, kind: AlertType, message: String, date: DateTime<Utc>) -> Self {
        Self {
            id,
            kind,
            message,
            date,
            resolved: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.resolved
    }
}
