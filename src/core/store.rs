//! The store: single in-memory owner of the four collections.
//!
//! Every mutation runs to completion synchronously: the change is staged on
//! a copy of the collection, the copy is written back in full to the
//! key-value backend and swapped in, and then a [`Change`] is sent to every
//! subscriber. A failed write leaves memory untouched and notifies no one.
//! Lookups by identifier that find nothing are silent no-ops.

use crate::core::changes::{Change, ChangeKind, Collection, Subscribers};
use crate::core::clock::{Clock, SystemClock};
use crate::core::persist;
use crate::db::storage::KeyValueStorage;
use crate::errors::AppResult;
use crate::models::{
    Alert, AlertType, Equipment, EquipmentStatus, Event, EventPatch, NewEquipment, NewEvent,
    NewTeamMember, TeamMember, TeamMemberPatch,
};
use serde::Serialize;
use std::sync::mpsc::Receiver;
use uuid::Uuid;

/// Cloned copy of all collections, for projections that outlive a borrow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub team_members: Vec<TeamMember>,
    pub events: Vec<Event>,
    pub equipment: Vec<Equipment>,
    pub alerts: Vec<Alert>,
}

pub struct Store<S: KeyValueStorage, C: Clock = SystemClock> {
    storage: S,
    clock: C,
    team_members: Vec<TeamMember>,
    events: Vec<Event>,
    equipment: Vec<Equipment>,
    /// Newest first.
    alerts: Vec<Alert>,
    subscribers: Subscribers,
}

impl<S: KeyValueStorage> Store<S> {
    /// Rehydrate from `storage` using the system clock.
    pub fn open_default(storage: S) -> AppResult<Self> {
        Self::open(storage, SystemClock)
    }
}

impl<S: KeyValueStorage, C: Clock> Store<S, C> {
    /// Rehydrate all four collections once.
    ///
    /// Absent keys yield empty collections. A corrupt value aborts with
    /// `AppError::CorruptData`.
    pub fn open(storage: S, clock: C) -> AppResult<Self> {
        let team_members = persist::load(&storage, Collection::TeamMembers)?;
        let events = persist::load(&storage, Collection::Events)?;
        let equipment = persist::load(&storage, Collection::Equipment)?;
        let alerts = persist::load(&storage, Collection::Alerts)?;

        let store = Self {
            storage,
            clock,
            team_members,
            events,
            equipment,
            alerts,
            subscribers: Subscribers::default(),
        };

        log::info!(
            "store loaded: {} member(s), {} event(s), {} equipment item(s), {} alert(s)",
            store.team_members.len(),
            store.events.len(),
            store.equipment.len(),
            store.alerts.len()
        );

        Ok(store)
    }

    /// Give back the backend, e.g. to reopen it as if after a restart.
    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn subscribe(&mut self) -> Receiver<Change> {
        self.subscribers.subscribe()
    }

    // ---------------------------
    // Reads
    // ---------------------------

    pub fn team_members(&self) -> &[TeamMember] {
        &self.team_members
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn team_member(&self, id: &str) -> Option<&TeamMember> {
        self.team_members.iter().find(|m| m.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn equipment_item(&self, id: &str) -> Option<&Equipment> {
        self.equipment.iter().find(|e| e.id == id)
    }

    pub fn alert(&self, id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            team_members: self.team_members.clone(),
            events: self.events.clone(),
            equipment: self.equipment.clone(),
            alerts: self.alerts.clone(),
        }
    }

    // ---------------------------
    // Team members
    // ---------------------------

    pub fn add_team_member(&mut self, new: NewTeamMember) -> AppResult<TeamMember> {
        let id = self.fresh_id();
        let member = TeamMember::from_new(id, new);

        let mut next = self.team_members.clone();
        next.push(member.clone());
        install(&mut self.storage, Collection::TeamMembers, &mut self.team_members, next)?;

        self.notify(Collection::TeamMembers, ChangeKind::Added, &member.id);
        Ok(member)
    }

    pub fn update_team_member(&mut self, id: &str, patch: TeamMemberPatch) -> AppResult<()> {
        let mut next = self.team_members.clone();
        let Some(member) = next.iter_mut().find(|m| m.id == id) else {
            log::debug!("update_team_member: no member {}", id);
            return Ok(());
        };
        member.apply(patch);

        install(&mut self.storage, Collection::TeamMembers, &mut self.team_members, next)?;
        self.notify(Collection::TeamMembers, ChangeKind::Updated, id);
        Ok(())
    }

    /// Events that reference the member keep the now-dangling identifier.
    pub fn remove_team_member(&mut self, id: &str) -> AppResult<()> {
        if self.team_member(id).is_none() {
            log::debug!("remove_team_member: no member {}", id);
            return Ok(());
        }

        let next = self
            .team_members
            .iter()
            .filter(|m| m.id != id)
            .cloned()
            .collect();
        install(&mut self.storage, Collection::TeamMembers, &mut self.team_members, next)?;

        self.notify(Collection::TeamMembers, ChangeKind::Removed, id);
        Ok(())
    }

    // ---------------------------
    // Events
    // ---------------------------

    pub fn add_event(&mut self, new: NewEvent) -> AppResult<Event> {
        let id = self.fresh_id();
        let event = Event::from_new(id, new);

        let mut next = self.events.clone();
        next.push(event.clone());
        install(&mut self.storage, Collection::Events, &mut self.events, next)?;

        self.notify(Collection::Events, ChangeKind::Added, &event.id);
        Ok(event)
    }

    pub fn update_event(&mut self, id: &str, patch: EventPatch) -> AppResult<()> {
        let mut next = self.events.clone();
        let Some(event) = next.iter_mut().find(|e| e.id == id) else {
            log::debug!("update_event: no event {}", id);
            return Ok(());
        };
        event.apply(patch);

        install(&mut self.storage, Collection::Events, &mut self.events, next)?;
        self.notify(Collection::Events, ChangeKind::Updated, id);
        Ok(())
    }

    pub fn remove_event(&mut self, id: &str) -> AppResult<()> {
        if self.event(id).is_none() {
            log::debug!("remove_event: no event {}", id);
            return Ok(());
        }

        let next = self.events.iter().filter(|e| e.id != id).cloned().collect();
        install(&mut self.storage, Collection::Events, &mut self.events, next)?;

        self.notify(Collection::Events, ChangeKind::Removed, id);
        Ok(())
    }

    // ---------------------------
    // Equipment
    // ---------------------------

    pub fn add_equipment(&mut self, new: NewEquipment) -> AppResult<Equipment> {
        let id = self.fresh_id();
        let mut item = Equipment::from_new(id, new);
        if item.in_maintenance() {
            item.last_maintenance = Some(self.clock.now());
        }

        let mut next = self.equipment.clone();
        next.push(item.clone());
        install(&mut self.storage, Collection::Equipment, &mut self.equipment, next)?;

        self.notify(Collection::Equipment, ChangeKind::Added, &item.id);
        Ok(item)
    }

    /// Overwrite the status (any transition is allowed).
    ///
    /// Non-empty `notes` replace the current notes. Every call with
    /// `Maintenance` stamps `last_maintenance` with the current time, even
    /// when the item was already in maintenance.
    pub fn update_equipment_status(
        &mut self,
        id: &str,
        status: EquipmentStatus,
        notes: Option<&str>,
    ) -> AppResult<()> {
        let now = self.clock.now();
        let mut next = self.equipment.clone();
        let Some(item) = next.iter_mut().find(|e| e.id == id) else {
            log::debug!("update_equipment_status: no item {}", id);
            return Ok(());
        };

        item.status = status;
        if let Some(notes) = notes.filter(|n| !n.is_empty()) {
            item.notes = notes.to_string();
        }
        if status == EquipmentStatus::Maintenance {
            item.last_maintenance = Some(now);
        }

        install(&mut self.storage, Collection::Equipment, &mut self.equipment, next)?;
        self.notify(Collection::Equipment, ChangeKind::Updated, id);
        Ok(())
    }

    // ---------------------------
    // Alerts
    // ---------------------------

    /// New alerts go to the front, so stored order is newest first.
    pub fn add_alert(&mut self, kind: AlertType, message: &str) -> AppResult<Alert> {
        let id = self.fresh_id();
        let alert = Alert::new(id, kind, message.to_string(), self.clock.now());

        let mut next = Vec::with_capacity(self.alerts.len() + 1);
        next.push(alert.clone());
        next.extend(self.alerts.iter().cloned());
        install(&mut self.storage, Collection::Alerts, &mut self.alerts, next)?;

        self.notify(Collection::Alerts, ChangeKind::Added, &alert.id);
        Ok(alert)
    }

    /// Mark resolved. Unknown or already resolved ids are left alone.
    pub fn resolve_alert(&mut self, id: &str) -> AppResult<()> {
        let Some(alert) = self.alert(id) else {
            log::debug!("resolve_alert: no alert {}", id);
            return Ok(());
        };
        if alert.resolved {
            return Ok(());
        }

        let mut next = self.alerts.clone();
        for alert in next.iter_mut().filter(|a| a.id == id) {
            alert.resolved = true;
        }
        install(&mut self.storage, Collection::Alerts, &mut self.alerts, next)?;

        self.notify(Collection::Alerts, ChangeKind::Updated, id);
        Ok(())
    }

    // ---------------------------
    // Internals
    // ---------------------------

    /// UUID v4, re-rolled on the (theoretical) clash with any existing id.
    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.id_in_use(&id) {
                return id;
            }
        }
    }

    fn id_in_use(&self, id: &str) -> bool {
        self.team_members.iter().any(|m| m.id == id)
            || self.events.iter().any(|e| e.id == id)
            || self.equipment.iter().any(|e| e.id == id)
            || self.alerts.iter().any(|a| a.id == id)
    }

    fn notify(&mut self, collection: Collection, kind: ChangeKind, id: &str) {
        log::debug!("{:?} {} {}", kind, collection.key(), id);
        self.subscribers.notify(&Change {
            collection,
            kind,
            id: id.to_string(),
        });
    }
}

/// Persist `next` in full, then swap it in. A failed write leaves `current`
/// as it was.
fn install<T, S>(
    storage: &mut S,
    collection: Collection,
    current: &mut Vec<T>,
    next: Vec<T>,
) -> AppResult<()>
where
    T: Serialize,
    S: KeyValueStorage,
{
    persist::save(storage, collection, &next)?;
    *current = next;
    Ok(())
}
