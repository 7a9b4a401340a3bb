//! Read-side projections over collection snapshots.
//!
//! Pure functions: nothing here is cached or stored.

use crate::models::{Alert, Equipment, Event, TeamMember};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::collections::BTreeMap;

/// Events strictly after `now` and no later than `now + days`, earliest first.
///
/// An event's instant is the start of its day (see [`Event::starts_at`]).
/// A window that reaches past the calendar's range has no upper bound.
pub fn upcoming_events(events: &[Event], now: NaiveDateTime, days: i64) -> Vec<&Event> {
    let limit = TimeDelta::try_days(days).and_then(|d| now.checked_add_signed(d));

    let mut out: Vec<&Event> = events
        .iter()
        .filter(|e| {
            let at = e.starts_at();
            at > now && limit.is_none_or(|limit| at <= limit)
        })
        .collect();

    out.sort_by_key(|e| e.date);
    out
}

/// Items grouped by category. Categories appear in first-seen order, items
/// keep collection order inside their group.
pub fn equipment_by_category(items: &[Equipment]) -> Vec<(&str, Vec<&Equipment>)> {
    let mut groups: Vec<(&str, Vec<&Equipment>)> = Vec::new();

    for item in items {
        match groups.iter().position(|(cat, _)| *cat == item.category) {
            Some(idx) => groups[idx].1.push(item),
            None => groups.push((item.category.as_str(), vec![item])),
        }
    }

    groups
}

/// Events grouped by calendar day, days ascending, collection order within a day.
pub fn events_by_date(events: &[Event]) -> Vec<(NaiveDate, Vec<&Event>)> {
    let mut groups: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for ev in events {
        groups.entry(ev.date).or_default().push(ev);
    }
    groups.into_iter().collect()
}

/// Unresolved alerts, most recent first.
pub fn active_alerts(alerts: &[Alert]) -> Vec<&Alert> {
    let mut out: Vec<&Alert> = alerts.iter().filter(|a| a.is_active()).collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// Names of the members an event references, in selection order.
/// Identifiers that no longer resolve are skipped.
pub fn member_names<'a>(event: &Event, members: &'a [TeamMember]) -> Vec<&'a str> {
    event
        .team_members
        .iter()
        .filter_map(|id| members.iter().find(|m| &m.id == id))
        .map(|m| m.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlertType, EquipmentStatus, EventType};
    use chrono::{Duration, NaiveTime, TimeZone, Utc};

    fn event(id: &str, date: NaiveDate) -> Event {
        Event {
            id: id.to_string(),
            date,
            title: format!("Event {id}"),
            time: "10:00".to_string(),
            team_members: Vec::new(),
            kind: EventType::Service,
        }
    }

    fn item(id: &str, category: &str) -> Equipment {
        Equipment {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: category.to_string(),
            status: EquipmentStatus::Available,
            notes: String::new(),
            last_maintenance: None,
        }
    }

    fn noon(date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
    }

    #[test]
    fn upcoming_keeps_only_the_next_week() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let events = vec![
            event("far", today + Duration::days(8)),
            event("past", today - Duration::days(1)),
            event("soon", today + Duration::days(1)),
        ];

        let ids: Vec<&str> = upcoming_events(&events, noon(today), 7)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["soon"]);
    }

    #[test]
    fn huge_windows_do_not_overflow() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let events = vec![
            event("past", today - Duration::days(1)),
            event("far", today + Duration::days(20_000)),
        ];

        for days in [100_000_000, 200_000_000_000_000, i64::MAX] {
            let ids: Vec<&str> = upcoming_events(&events, noon(today), days)
                .iter()
                .map(|e| e.id.as_str())
                .collect();
            assert_eq!(ids, vec!["far"]);
        }
    }

    #[test]
    fn upcoming_excludes_today_once_the_day_has_started() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let events = vec![event("today", today)];
        assert!(upcoming_events(&events, noon(today), 7).is_empty());
    }

    #[test]
    fn upcoming_is_sorted_ascending() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let events = vec![
            event("c", today + Duration::days(5)),
            event("a", today + Duration::days(1)),
            event("b", today + Duration::days(3)),
        ];

        let ids: Vec<&str> = upcoming_events(&events, noon(today), 7)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let items = vec![
            item("mic1", "Microphones"),
            item("desk", "Consoles"),
            item("mic2", "Microphones"),
            item("amp", "Amplifiers"),
            item("desk2", "Consoles"),
        ];

        let groups = equipment_by_category(&items);
        let cats: Vec<&str> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(cats, vec!["Microphones", "Consoles", "Amplifiers"]);

        let mics: Vec<&str> = groups[0].1.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(mics, vec!["mic1", "mic2"]);
        let consoles: Vec<&str> = groups[1].1.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(consoles, vec!["desk", "desk2"]);
    }

    #[test]
    fn events_grouped_by_day_ascending() {
        let d1 = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
        let events = vec![event("late", d2), event("early-a", d1), event("early-b", d1)];

        let groups = events_by_date(&events);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, d1);
        let first: Vec<&str> = groups[0].1.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(first, vec!["early-a", "early-b"]);
        assert_eq!(groups[1].0, d2);
    }

    #[test]
    fn active_alerts_newest_first_without_resolved() {
        let at = |h| Utc.with_ymd_and_hms(2025, 6, 1, h, 0, 0).unwrap();
        let mut resolved = Alert::new("r".into(), AlertType::General, "done".into(), at(12));
        resolved.resolved = true;

        let alerts = vec![
            Alert::new("t1".into(), AlertType::General, "one".into(), at(8)),
            resolved,
            Alert::new("t3".into(), AlertType::Schedule, "three".into(), at(10)),
            Alert::new("t2".into(), AlertType::Maintenance, "two".into(), at(9)),
        ];

        let ids: Vec<&str> = active_alerts(&alerts).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["t3", "t2", "t1"]);
    }

    #[test]
    fn member_names_skip_dangling_ids() {
        let members = vec![TeamMember {
            id: "m1".into(),
            name: "Alice".into(),
            role: "FOH".into(),
            phone: String::new(),
            email: String::new(),
            availability: Vec::new(),
            image: String::new(),
        }];
        let mut ev = event("e", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        ev.team_members = vec!["gone".into(), "m1".into()];

        assert_eq!(member_names(&ev, &members), vec!["Alice"]);
    }
}
