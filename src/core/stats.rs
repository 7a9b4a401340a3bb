//! Dashboard counters.

use crate::core::projections::upcoming_events;
use crate::models::{Equipment, Event, TeamMember};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub upcoming_events: usize,
    pub team_members: usize,
    /// Members with an empty availability list.
    pub unavailable_members: usize,
    pub equipment: usize,
    pub in_maintenance: usize,
}

impl DashboardStats {
    pub fn compute(
        members: &[TeamMember],
        events: &[Event],
        equipment: &[Equipment],
        now: NaiveDateTime,
        days: i64,
    ) -> Self {
        Self {
            upcoming_events: upcoming_events(events, now, days).len(),
            team_members: members.len(),
            unavailable_members: members.iter().filter(|m| m.is_unavailable()).count(),
            equipment: equipment.len(),
            in_maintenance: equipment.iter().filter(|e| e.in_maintenance()).count(),
        }
    }
}
