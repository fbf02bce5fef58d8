// Data models shared by the analytic services

pub mod body_scan;
pub mod dashboard;
pub mod day_log;
pub mod exercise_session;
pub mod metric;
pub mod training_analysis;

pub use body_scan::*;
pub use dashboard::*;
pub use day_log::*;
pub use exercise_session::*;
pub use metric::*;
pub use training_analysis::*;
