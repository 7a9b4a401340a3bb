use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::DashboardStats;
use crate::core::projections::{active_alerts, member_names, upcoming_events};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{alert_colour, muted, paint_event_kind};
use crate::utils::date::{format_day, format_timestamp, now_local};
use crate::utils::formatting::{initials, join_or_dash};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { days } = cmd {
        // clap and Config::load both bound the window.
        let days = days.unwrap_or(cfg.upcoming_days);

        let store = open_store(cfg)?;
        let now = now_local();

        let stats = DashboardStats::compute(
            store.team_members(),
            store.events(),
            store.equipment(),
            now,
            days,
        );

        header("Dashboard");
        println!(
            "📅 Upcoming services : {} (next {} days)",
            stats.upcoming_events, days
        );
        println!(
            "👥 Team members      : {} ({} unavailable)",
            stats.team_members, stats.unavailable_members
        );
        println!(
            "🎛️  Equipment items   : {} ({} in maintenance)",
            stats.equipment, stats.in_maintenance
        );

        header("Upcoming events");
        let upcoming = upcoming_events(store.events(), now, days);
        if upcoming.is_empty() {
            println!(
                "{}",
                muted(&format!("No upcoming events in the next {} days", days))
            );
        }
        for ev in upcoming {
            let names = member_names(ev, store.team_members());
            println!(
                "{} at {}  {}  [{}]  ({}) {}",
                format_day(ev.date, &cfg.date_format),
                ev.time,
                ev.title,
                paint_event_kind(ev.kind),
                initials(names.iter().copied()),
                join_or_dash(&names),
            );
        }

        header("Alerts & notifications");
        let alerts = active_alerts(store.alerts());
        if alerts.is_empty() {
            println!("{}", muted("No active alerts"));
        }
        for alert in alerts {
            println!(
                "{} {}  {}",
                alert_colour(alert.kind).paint("●"),
                alert.message,
                muted(&format_timestamp(alert.date)),
            );
        }
    }

    Ok(())
}
