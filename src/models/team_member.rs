use serde::{Deserialize, Serialize};

/// A member of the sound team.
///
/// `availability` holds free-form labels (usually day names). An empty list
/// means the member is currently unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub availability: Vec<String>,
    pub image: String,
}

/// Every field of a member except the generated identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTeamMember {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub availability: Vec<String>,
    pub image: String,
}

/// Partial update: `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub availability: Option<Vec<String>>,
    pub image: Option<String>,
}

impl TeamMember {
    pub fn from_new(id: String, new: NewTeamMember) -> Self {
        Self {
            id,
            name: new.name,
            role: new.role,
            phone: new.phone,
            email: new.email,
            availability: new.availability,
            image: new.image,
        }
    }

    pub fn apply(&mut self, patch: TeamMemberPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(availability) = patch.availability {
            self.availability = availability;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.availability.is_empty()
    }
}

impl TeamMemberPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.role.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.availability.is_none()
            && self.image.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> TeamMember {
        TeamMember::from_new(
            "m-1".to_string(),
            NewTeamMember {
                name: "Alice".to_string(),
                role: "FOH".to_string(),
                phone: "555-0100".to_string(),
                email: "alice@example.org".to_string(),
                availability: vec!["Sundays".to_string()],
                image: String::new(),
            },
        )
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut m = member();
        m.apply(TeamMemberPatch {
            role: Some("Monitors".to_string()),
            ..Default::default()
        });

        assert_eq!(m.role, "Monitors");
        assert_eq!(m.name, "Alice");
        assert_eq!(m.availability, vec!["Sundays".to_string()]);
    }

    #[test]
    fn empty_availability_means_unavailable() {
        let mut m = member();
        assert!(!m.is_unavailable());
        m.apply(TeamMemberPatch {
            availability: Some(Vec::new()),
            ..Default::default()
        });
        assert!(m.is_unavailable());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(member()).unwrap();
        assert_eq!(json["availability"][0], "Sundays");
        assert!(json.get("id").is_some());
    }
}
