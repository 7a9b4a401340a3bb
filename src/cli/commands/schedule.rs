use crate::cli::commands::{DeskStore, open_store, resolve_id};
use crate::cli::parser::{Commands, ScheduleAction};
use crate::config::Config;
use crate::core::projections::{events_by_date, member_names};
use crate::errors::{AppError, AppResult};
use crate::models::{EventPatch, EventType, NewEvent};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{muted, paint_event_kind};
use crate::utils::date::{format_day, parse_date};
use crate::utils::formatting::{join_or_dash, short_id, trimmed};
use crate::utils::time::{normalize_optional_time, normalize_time};
use chrono::NaiveDate;

fn parse_day(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

fn parse_kind(s: &str) -> AppResult<EventType> {
    EventType::from_code(s).ok_or_else(|| AppError::InvalidEventType(s.to_string()))
}

/// Each input is a member id or a unique id prefix.
fn resolve_members(store: &DeskStore, inputs: &[String]) -> AppResult<Vec<String>> {
    inputs
        .iter()
        .map(|input| {
            resolve_id(
                "team member",
                input,
                store.team_members().iter().map(|m| m.id.as_str()),
            )
        })
        .collect()
}

fn event_id(store: &DeskStore, input: &str) -> AppResult<String> {
    resolve_id("event", input, store.events().iter().map(|e| e.id.as_str()))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule { action } = cmd {
        let mut store = open_store(cfg)?;

        match action {
            ScheduleAction::List => list(&store, cfg),

            ScheduleAction::Add {
                date,
                time,
                title,
                kind,
                members,
            } => {
                let new = NewEvent {
                    date: parse_day(date)?,
                    time: normalize_time(time)?,
                    title: title.trim().to_string(),
                    kind: parse_kind(kind)?,
                    team_members: resolve_members(&store, members)?,
                };

                let event = store.add_event(new)?;
                success(format!(
                    "Added {} '{}' on {} (id: {})",
                    event.kind.as_str(),
                    event.title,
                    event.date_str(),
                    event.id
                ));
            }

            ScheduleAction::Update {
                id,
                date,
                time,
                title,
                kind,
                members,
                clear_members,
            } => {
                let team_members = if *clear_members {
                    Some(Vec::new())
                } else if members.is_empty() {
                    None
                } else {
                    Some(resolve_members(&store, members)?)
                };

                let patch = EventPatch {
                    date: date.as_deref().map(parse_day).transpose()?,
                    time: normalize_optional_time(time.as_ref())?,
                    title: trimmed(title),
                    kind: kind.as_deref().map(parse_kind).transpose()?,
                    team_members,
                };

                if patch.is_empty() {
                    warning("Nothing to update");
                    return Ok(());
                }

                let id = event_id(&store, id)?;
                store.update_event(&id, patch)?;
                success(format!("Updated event {}", id));
            }

            ScheduleAction::Remove { id } => {
                let id = event_id(&store, id)?;
                store.remove_event(&id)?;
                success(format!("Removed event {}", id));
            }
        }
    }

    Ok(())
}

fn list(store: &DeskStore, cfg: &Config) {
    let groups = events_by_date(store.events());
    if groups.is_empty() {
        info("No events scheduled.");
        return;
    }

    for (day, events) in groups {
        header(format!("{} ({})", format_day(day, &cfg.date_format), day));
        for ev in events {
            let names = member_names(ev, store.team_members());
            println!(
                "  {}  {}  [{}]  {}  {}",
                ev.time,
                ev.title,
                paint_event_kind(ev.kind),
                join_or_dash(&names),
                muted(short_id(&ev.id)),
            );
        }
    }
}
