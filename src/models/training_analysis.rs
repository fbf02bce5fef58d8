use serde::{Deserialize, Serialize};

/// One strength exercise pulled out of a training-log segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSegment {
    /// Title-cased exercise name
    pub name: String,
    /// e.g. "80 KG", empty when no load was written
    pub weight_text: String,
    /// e.g. "4 × 10", empty when no sets/reps were written
    pub sets_reps_text: String,
    /// Inferred muscle groups, never empty
    pub body_parts: Vec<String>,
}

impl WorkoutSegment {
    pub fn has_weight(&self) -> bool {
        !self.weight_text.is_empty()
    }

    pub fn has_sets_reps(&self) -> bool {
        !self.sets_reps_text.is_empty()
    }
}

/// The surf session of a day, if one was logged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfSession {
    /// "1 hr surf", "45 min surf" or "Surf logged"
    pub duration_text: String,
    pub hours: Option<f64>,
    /// Raw text the session was parsed from
    pub description: String,
}

/// Structured view of a free-text training log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingAnalysis {
    pub surfing: Option<SurfSession>,
    pub workouts: Vec<WorkoutSegment>,
}

impl TrainingAnalysis {
    pub fn is_empty(&self) -> bool {
        self.surfing.is_none() && self.workouts.is_empty()
    }
}
