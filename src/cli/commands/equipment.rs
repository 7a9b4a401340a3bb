use crate::cli::commands::{DeskStore, open_store, resolve_id};
use crate::cli::parser::{Commands, EquipmentAction};
use crate::config::Config;
use crate::core::projections::equipment_by_category;
use crate::errors::{AppError, AppResult};
use crate::models::{AlertType, EquipmentStatus, NewEquipment};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{muted, paint_status};
use crate::utils::date::format_timestamp;
use crate::utils::formatting::short_id;
use crate::utils::table::Table;

fn parse_status(s: &str) -> AppResult<EquipmentStatus> {
    EquipmentStatus::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Equipment { action } = cmd {
        let mut store = open_store(cfg)?;

        match action {
            EquipmentAction::List => list(&store),

            EquipmentAction::Add {
                name,
                category,
                status,
                notes,
            } => {
                let new = NewEquipment {
                    name: name.trim().to_string(),
                    category: category.trim().to_string(),
                    status: parse_status(status)?,
                    notes: notes.clone(),
                };

                let item = store.add_equipment(new)?;
                success(format!(
                    "Added {} to {} (id: {})",
                    item.name, item.category, item.id
                ));
            }

            EquipmentAction::Status { id, status, notes } => {
                let status = parse_status(status)?;
                let id = resolve_id(
                    "equipment item",
                    id,
                    store.equipment().iter().map(|e| e.id.as_str()),
                )?;

                store.update_equipment_status(&id, status, notes.as_deref())?;

                let name = store
                    .equipment_item(&id)
                    .map(|e| e.name.clone())
                    .unwrap_or_default();
                success(format!("{} is now {}", name, status.label()));

                if status == EquipmentStatus::Maintenance && cfg.maintenance_alerts {
                    let message = format!("{} marked for maintenance", name);
                    store.add_alert(AlertType::Maintenance, &message)?;
                    warning(format!("Alert raised: {}", message));
                }
            }
        }
    }

    Ok(())
}

fn list(store: &DeskStore) {
    let groups = equipment_by_category(store.equipment());
    if groups.is_empty() {
        info("No equipment registered.");
        return;
    }

    for (category, items) in groups {
        header(category);

        let mut table = Table::new(["ID", "Name", "Status", "Notes", "Last maintenance"]);
        for item in items {
            table.add_row(vec![
                short_id(&item.id).to_string(),
                item.name.clone(),
                paint_status(item.status),
                item.notes.clone(),
                item.last_maintenance
                    .map(format_timestamp)
                    .unwrap_or_else(|| muted("never")),
            ]);
        }
        print!("{}", table.render());
    }
}
