use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Set identifier: a set number or a label such as "working" or "warmup"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SetLabel {
    Number(u32),
    Name(String),
}

impl std::fmt::Display for SetLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "Set {}", number),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    pub set: SetLabel,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(default)]
    pub weight_each_side_lbs: Option<f64>,
}

/// One logged session of a single exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSession {
    pub date: NaiveDate,
    #[serde(default)]
    pub day: Option<u32>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub weight_lbs: Option<f64>,
    #[serde(default)]
    pub weight_each_side_lbs: Option<f64>,
    #[serde(default)]
    pub sets_reps: Vec<SetRecord>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Last step was an increase; repeat it
    ContinueProgression,
    /// Weight held with good reps; add a small increment
    IncreaseAfterHold,
    /// Weight dropped; hold and rebuild
    Maintain,
    /// No clear pattern; smallest increment
    SmallIncrease,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSuggestion {
    pub exercise: String,
    pub kind: SuggestionKind,
    pub suggested_lbs: f64,
    pub previous_lbs: f64,
    pub latest_lbs: f64,
    pub average_reps: f64,
    /// e.g. "45 lbs each side (90 lbs total)"
    pub display_weight: String,
    pub message: String,
}

/// Sessions keyed by exercise name, as served by the training endpoint
pub type TrainingHistory = std::collections::BTreeMap<String, Vec<ExerciseSession>>;
