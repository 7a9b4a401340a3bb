pub mod changes;
pub mod clock;
pub mod persist;
pub mod projections;
pub mod stats;
pub mod store;

pub use changes::{Change, ChangeKind, Collection};
pub use clock::{Clock, ManualClock, SystemClock};
pub use stats::DashboardStats;
pub use store::{Snapshot, Store};
