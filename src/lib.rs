// Library exports for fitlog
// Pure analytics over day logs, body scans and training sessions

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AnalyticsConfig;
pub use error::{FitlogError, Result};
