use crate::cli::commands::{DeskStore, open_store, resolve_id};
use crate::cli::parser::{AlertAction, Commands};
use crate::config::Config;
use crate::core::projections::active_alerts;
use crate::errors::{AppError, AppResult};
use crate::models::{Alert, AlertType};
use crate::ui::messages::{info, success};
use crate::utils::colors::{alert_colour, muted};
use crate::utils::date::format_timestamp;
use crate::utils::formatting::short_id;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Alerts { action } = cmd {
        let mut store = open_store(cfg)?;

        match action {
            AlertAction::List { all } => list(&store, *all),

            AlertAction::Add { kind, message } => {
                let kind = AlertType::from_code(kind)
                    .ok_or_else(|| AppError::InvalidAlertType(kind.to_string()))?;
                let alert = store.add_alert(kind, message.trim())?;
                success(format!("Alert raised (id: {})", alert.id));
            }

            AlertAction::Resolve { id } => {
                let id = resolve_id("alert", id, store.alerts().iter().map(|a| a.id.as_str()))?;

                if store.alert(&id).is_some_and(|a| a.resolved) {
                    info(format!("Alert {} was already resolved", id));
                    return Ok(());
                }

                store.resolve_alert(&id)?;
                success(format!("Resolved alert {}", id));
            }
        }
    }

    Ok(())
}

fn list(store: &DeskStore, all: bool) {
    // Stored order is already newest first.
    let alerts: Vec<&Alert> = if all {
        store.alerts().iter().collect()
    } else {
        active_alerts(store.alerts())
    };

    if alerts.is_empty() {
        info("No active alerts");
        return;
    }

    let mut table = Table::new(["ID", "Type", "Message", "Raised", "State"]);
    for alert in alerts {
        let state = if alert.resolved {
            muted("resolved")
        } else {
            "active".to_string()
        };

        table.add_row(vec![
            short_id(&alert.id).to_string(),
            alert_colour(alert.kind).paint(alert.kind.as_str()).to_string(),
            alert.message.clone(),
            format_timestamp(alert.date),
            state,
        ]);
    }
    print!("{}", table.render());
}
