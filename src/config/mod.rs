pub mod app;

pub use app::AnalyticsConfig;
