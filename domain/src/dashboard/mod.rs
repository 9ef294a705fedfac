mod join;
mod snapshot;
mod stats;

pub use join::{join_attendance, JoinedAttendance, UNKNOWN_COURSE, UNKNOWN_STUDENT};
pub use snapshot::DashboardSnapshot;
pub use stats::DashboardStats;
