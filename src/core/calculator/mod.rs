pub mod counts;

pub use counts::{employee_counts, global_counts};
