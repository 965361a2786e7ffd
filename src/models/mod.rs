pub mod attendance;
pub mod counts;
pub mod employee;
pub mod status;

pub use attendance::{AttendanceRecord, SummaryLine};
pub use counts::AttendanceCounts;
pub use employee::{Employee, EmployeeRef};
pub use status::AttendanceStatus;
