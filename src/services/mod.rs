// Analytic services over the parsed dashboard data

pub mod body_scan_service;
pub mod dashboard_service;
pub mod metric_comparator;
pub mod numeric;
pub mod progression_service;
pub mod target_parser;
pub mod training_text_analyzer;

pub use body_scan_service::BodyScanService;
pub use dashboard_service::DashboardService;
pub use metric_comparator::MetricComparator;
pub use progression_service::NoSuggestion;
pub use target_parser::parse_target;
pub use training_text_analyzer::TrainingTextAnalyzer;
