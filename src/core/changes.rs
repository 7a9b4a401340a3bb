//! Change notifications from the store to whoever renders its collections.

use std::sync::mpsc::{self, Receiver, Sender};

/// The four persisted collections, with their fixed storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    TeamMembers,
    Events,
    Equipment,
    Alerts,
}

impl Collection {
    pub fn key(&self) -> &'static str {
        match self {
            Collection::TeamMembers => "teamMembers",
            Collection::Events => "events",
            Collection::Equipment => "equipment",
            Collection::Alerts => "alerts",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Updated,
    Removed,
}

/// Sent once per successful mutation, after the collection was persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub collection: Collection,
    pub kind: ChangeKind,
    pub id: String,
}

#[derive(Debug, Default)]
pub struct Subscribers {
    senders: Vec<Sender<Change>>,
}

impl Subscribers {
    pub fn subscribe(&mut self) -> Receiver<Change> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    /// Deliver to every live subscriber; dropped receivers are pruned.
    pub fn notify(&mut self, change: &Change) {
        let before = self.senders.len();
        self.senders.retain(|tx| tx.send(change.clone()).is_ok());

        let dropped = before - self.senders.len();
        if dropped > 0 {
            log::debug!("pruned {} disconnected subscriber(s)", dropped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropped_receivers_are_pruned() {
        let mut subs = Subscribers::default();
        let keep = subs.subscribe();
        drop(subs.subscribe());

        let change = Change {
            collection: Collection::Events,
            kind: ChangeKind::Added,
            id: "e-1".to_string(),
        };
        subs.notify(&change);

        assert_eq!(subs.senders.len(), 1);
        assert_eq!(keep.try_recv().unwrap(), change);
    }
}
