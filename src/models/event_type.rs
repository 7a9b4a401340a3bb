use serde::{Deserialize, Serialize};

/// Kind of scheduled event. Closed set; persisted lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Service,
    Soundcheck,
    Rehearsal,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Service => "service",
            EventType::Soundcheck => "soundcheck",
            EventType::Rehearsal => "rehearsal",
        }
    }

    /// Human label, as shown in the schedule.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Service => "Service",
            EventType::Soundcheck => "Sound Check",
            EventType::Rehearsal => "Rehearsal",
        }
    }

    /// Parse user input (case-insensitive, `sound-check` accepted).
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "service" => Some(EventType::Service),
            "soundcheck" | "sound-check" => Some(EventType::Soundcheck),
            "rehearsal" => Some(EventType::Rehearsal),
            _ => None,
        }
    }
}
