use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ComparisonResult, DailyTotals, Supplement, TargetSpec, TrainingAnalysis};

/// The five daily habits; one point each
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyScore {
    pub protein_met: bool,
    pub seafood_met: bool,
    pub supplements_taken: bool,
    pub training_logged: bool,
    pub feeling_met: bool,
}

impl DailyScore {
    pub const MAX: u8 = 5;

    pub fn points(&self) -> u8 {
        [
            self.protein_met,
            self.seafood_met,
            self.supplements_taken,
            self.training_logged,
            self.feeling_met,
        ]
        .iter()
        .filter(|met| **met)
        .count() as u8
    }
}

/// Everything the day view shows for one log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: Option<NaiveDate>,
    pub day: Option<u32>,
    pub totals: DailyTotals,
    pub score: DailyScore,
    pub training: TrainingAnalysis,
    pub supplements: Vec<Supplement>,
}

/// One row of the baseline / current / target table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRow {
    pub label: String,
    pub baseline_text: String,
    pub current_text: String,
    pub target_text: String,
    pub target: Option<TargetSpec>,
    pub comparison: ComparisonResult,
}

impl ProgressRow {
    pub fn has_data(&self) -> bool {
        self.comparison.has_data()
    }
}

/// Headline numbers at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub streak_days: u32,
    pub streak_progress_percent: f64,
    pub latest_weight_kg: Option<f64>,
    pub weight_lost_kg: Option<f64>,
    pub weight_progress_percent: Option<f64>,
    pub total_seafood_kg: f64,
    pub seafood_progress_percent: f64,
    pub latest_score: Option<DailyScore>,
}
