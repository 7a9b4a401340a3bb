use crate::cli::commands::{DeskStore, open_store, resolve_id};
use crate::cli::parser::{Commands, TeamAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{NewTeamMember, TeamMemberPatch};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::muted;
use crate::utils::formatting::{join_or_dash, short_id, split_labels, trimmed};
use crate::utils::table::Table;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

fn check_email(email: &str) -> AppResult<String> {
    let email = email.trim();
    if EMAIL.is_match(email) {
        Ok(email.to_string())
    } else {
        Err(AppError::InvalidEmail(email.to_string()))
    }
}

fn member_id(store: &DeskStore, input: &str) -> AppResult<String> {
    resolve_id(
        "team member",
        input,
        store.team_members().iter().map(|m| m.id.as_str()),
    )
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Team { action } = cmd {
        let mut store = open_store(cfg)?;

        match action {
            TeamAction::List => list(&store),

            TeamAction::Add {
                name,
                role,
                phone,
                email,
                availability,
                image,
            } => {
                let new = NewTeamMember {
                    name: name.trim().to_string(),
                    role: role.trim().to_string(),
                    phone: phone.trim().to_string(),
                    email: check_email(email)?,
                    availability: split_labels(availability),
                    image: image
                        .clone()
                        .unwrap_or_else(|| cfg.default_member_image.clone()),
                };

                let member = store.add_team_member(new)?;
                success(format!(
                    "Added team member {} (id: {})",
                    member.name, member.id
                ));
                if member.is_unavailable() {
                    warning(format!("{} has no availability set", member.name));
                }
            }

            TeamAction::Update {
                id,
                name,
                role,
                phone,
                email,
                availability,
                image,
            } => {
                let patch = TeamMemberPatch {
                    name: trimmed(name),
                    role: trimmed(role),
                    phone: trimmed(phone),
                    email: email.as_deref().map(check_email).transpose()?,
                    availability: availability.as_deref().map(split_labels),
                    image: image.clone(),
                };

                if patch.is_empty() {
                    warning("Nothing to update");
                    return Ok(());
                }

                let id = member_id(&store, id)?;
                store.update_team_member(&id, patch)?;
                success(format!("Updated team member {}", id));
            }

            TeamAction::Remove { id } => {
                let id = member_id(&store, id)?;
                let name = store
                    .team_member(&id)
                    .map(|m| m.name.clone())
                    .unwrap_or_default();

                store.remove_team_member(&id)?;
                success(format!("Removed team member {} ({})", name, id));

                let referencing = store
                    .events()
                    .iter()
                    .filter(|e| e.team_members.iter().any(|m| *m == id))
                    .count();
                if referencing > 0 {
                    info(format!(
                        "{} event(s) still reference this member",
                        referencing
                    ));
                }
            }
        }
    }

    Ok(())
}

fn list(store: &DeskStore) {
    if store.team_members().is_empty() {
        info("No team members yet.");
        return;
    }

    let mut table = Table::new(["ID", "Name", "Role", "Phone", "Email", "Availability"]);
    for m in store.team_members() {
        let availability = if m.is_unavailable() {
            muted("unavailable")
        } else {
            join_or_dash(&m.availability)
        };

        table.add_row(vec![
            short_id(&m.id).to_string(),
            m.name.clone(),
            m.role.clone(),
            m.phone.clone(),
            m.email.clone(),
            availability,
        ]);
    }
    print!("{}", table.render());
}
