//! Colour choices for statuses and alert kinds.

use crate::models::{AlertType, EquipmentStatus, EventType};
use ansi_term::Colour;

pub fn status_colour(status: EquipmentStatus) -> Colour {
    match status {
        EquipmentStatus::Available => Colour::Green,
        EquipmentStatus::Maintenance => Colour::Red,
        EquipmentStatus::InUse => Colour::Yellow,
    }
}

pub fn alert_colour(kind: AlertType) -> Colour {
    match kind {
        AlertType::Maintenance => Colour::Red,
        AlertType::Schedule | AlertType::General => Colour::Yellow,
    }
}

pub fn event_colour(kind: EventType) -> Colour {
    match kind {
        EventType::Service => Colour::Purple,
        EventType::Soundcheck => Colour::Cyan,
        EventType::Rehearsal => Colour::Blue,
    }
}

pub fn paint_status(status: EquipmentStatus) -> String {
    status_colour(status).paint(status.label()).to_string()
}

pub fn paint_event_kind(kind: EventType) -> String {
    event_colour(kind).paint(kind.label()).to_string()
}

/// Dim grey, for empty-state and secondary text.
pub fn muted(s: &str) -> String {
    Colour::Fixed(244).paint(s).to_string()
}
