use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Exactly one status at any time; transitions are unrestricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentStatus {
    Available,
    Maintenance,
    InUse,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "available",
            EquipmentStatus::Maintenance => "maintenance",
            EquipmentStatus::InUse => "in-use",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "Available",
            EquipmentStatus::Maintenance => "Maintenance",
            EquipmentStatus::InUse => "In Use",
        }
    }

    /// Parse user input; `in_use` and `inuse` are accepted for `in-use`.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "available" => Some(EquipmentStatus::Available),
            "maintenance" => Some(EquipmentStatus::Maintenance),
            "in-use" | "in_use" | "inuse" => Some(EquipmentStatus::InUse),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    /// Free text, only used for grouping.
    pub category: String,
    pub status: EquipmentStatus,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEquipment {
    pub name: String,
    pub category: String,
    pub status: EquipmentStatus,
    pub notes: String,
}

impl Equipment {
    pub fn from_new(id: String, new: NewEquipment) -> Self {
        Self {
            id,
            name: new.name,
            category: new.category,
            status: new.status,
            notes: new.notes,
            last_maintenance: None,
        }
    }

    pub fn in_maintenance(&self) -> bool {
        self.status == EquipmentStatus::Maintenance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_use_is_kebab_case_on_disk() {
        let json = serde_json::to_string(&EquipmentStatus::InUse).unwrap();
        assert_eq!(json, "\"in-use\"");
        assert_eq!(EquipmentStatus::from_code("In_Use"), Some(EquipmentStatus::InUse));
    }

    #[test]
    fn missing_last_maintenance_deserializes_as_none() {
        let raw = r#"{"id":"x","name":"Mixer","category":"Consoles","status":"available","notes":""}"#;
        let item: Equipment = serde_json::from_str(raw).unwrap();
        assert_eq!(item.last_maintenance, None);
        assert!(!item.in_maintenance());
    }
}
