use super::event_type::EventType;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A scheduled service, soundcheck or rehearsal.
///
/// `date` is persisted as `YYYY-MM-DD`; `time` is free text (`"14:00"`).
/// `team_members` holds member identifiers in selection order and may refer
/// to members that no longer exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub time: String,
    pub team_members: Vec<String>,
    #[serde(rename = "type")]
    pub kind: EventType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub date: NaiveDate,
    pub time: String,
    pub title: String,
    pub kind: EventType,
    pub team_members: Vec<String>,
}

/// Partial update: `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub title: Option<String>,
    pub kind: Option<EventType>,
    pub team_members: Option<Vec<String>>,
}

impl Event {
    pub fn from_new(id: String, new: NewEvent) -> Self {
        Self {
            id,
            date: new.date,
            title: new.title,
            time: new.time,
            team_members: new.team_members,
            kind: new.kind,
        }
    }

    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(members) = patch.team_members {
            self.team_members = members;
        }
    }

    /// The instant used for time-window filtering: start of the event's day.
    /// The free-text `time` field is not used.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.time.is_none()
            && self.title.is_none()
            && self.kind.is_none()
            && self.team_members.is_none()
    }
}
