pub mod alert;
pub mod equipment;
pub mod event;
pub mod event_type;
pub mod team_member;

pub use alert::{Alert, AlertType};
pub use equipment::{Equipment, EquipmentStatus, NewEquipment};
pub use event::{Event, EventPatch, NewEvent};
pub use event_type::EventType;
pub use team_member::{NewTeamMember, TeamMember, TeamMemberPatch};
