// Read-only access to the JSON exports of the dashboard API

use anyhow::{Context, Result};
use fitlog::models::{BodyScan, DashboardData, TrainingHistory};
use fitlog::services::progression_service::parse_training_history;
use std::fs;
use std::path::Path;

fn read(path: &Path, what: &str) -> Result<String> {
    tracing::debug!("Reading {} from {}", what, path.display());
    fs::read_to_string(path).with_context(|| format!("Failed to read {} file {}", what, path.display()))
}

/// Dashboard payload: baseline, targets, streak and daily logs
pub fn load_dashboard(path: &Path) -> Result<DashboardData> {
    let contents = read(path, "dashboard")?;
    DashboardData::from_json(&contents)
        .with_context(|| format!("Failed to parse dashboard file {}", path.display()))
}

/// Body scans, oldest first
pub fn load_scans(path: &Path) -> Result<Vec<BodyScan>> {
    let contents = read(path, "body scan")?;
    let mut scans: Vec<BodyScan> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse body scan file {}", path.display()))?;
    scans.sort_by_key(|scan| scan.date);
    Ok(scans)
}

/// Strength sessions keyed by exercise
pub fn load_training(path: &Path) -> Result<TrainingHistory> {
    let contents = read(path, "training")?;
    parse_training_history(&contents)
        .with_context(|| format!("Failed to parse training file {}", path.display()))
}
