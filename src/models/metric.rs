use serde::{Deserialize, Serialize};

/// Which way a metric has to move to count as progress.
///
/// Always declared by the caller per metric, never inferred from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementDirection {
    /// Lower is better (weight, body fat, ALT)
    Decreasing,
    /// Higher is better (lean mass, BMR)
    Increasing,
}

impl std::fmt::Display for ImprovementDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decreasing => write!(f, "decreasing"),
            Self::Increasing => write!(f, "increasing"),
        }
    }
}

impl std::str::FromStr for ImprovementDirection {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "decreasing" | "down" | "lower" => Ok(Self::Decreasing),
            "increasing" | "up" | "higher" => Ok(Self::Increasing),
            other => Err(format!("Unknown improvement direction: {}", other)),
        }
    }
}

/// Outcome of a baseline/current comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementStatus {
    Improved,
    Worsened,
    #[default]
    Unchanged,
}

/// A target as written on the dashboard ("82-85 kg", "≤13%", "<80")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub lower: f64,
    pub upper: f64,
    pub text: String,
}

impl TargetSpec {
    pub fn is_range(&self) -> bool {
        self.lower != self.upper
    }

    /// Value the progress percentage is measured against: the upper bound
    pub fn progress_value(&self) -> f64 {
        self.upper
    }

    /// Value shown as "the" target on labels: the midpoint of a range
    pub fn display_value(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }
}

/// One metric observed at a baseline and at a later point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub label: String,
    pub baseline_value: Option<f64>,
    pub current_value: Option<f64>,
    pub target_value: Option<f64>,
    #[serde(default)]
    pub unit: String,
    pub improvement_direction: ImprovementDirection,
}

impl MetricSnapshot {
    pub fn new(label: impl Into<String>, direction: ImprovementDirection) -> Self {
        Self {
            label: label.into(),
            baseline_value: None,
            current_value: None,
            target_value: None,
            unit: String::new(),
            improvement_direction: direction,
        }
    }

    pub fn with_values(mut self, baseline: Option<f64>, current: Option<f64>) -> Self {
        self.baseline_value = baseline;
        self.current_value = current;
        self
    }

    pub fn with_target(mut self, target: Option<f64>) -> Self {
        self.target_value = target;
        self
    }

    /// Resolve the target from its dashboard text; ranges contribute their upper bound
    pub fn with_target_spec(mut self, target: Option<&TargetSpec>) -> Self {
        self.target_value = target.map(TargetSpec::progress_value);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}

/// Derived comparison of one MetricSnapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub label: String,
    pub unit: String,
    pub baseline_value: Option<f64>,
    pub current_value: Option<f64>,
    pub target_value: Option<f64>,
    pub delta: Option<f64>,
    pub delta_percent: Option<f64>,
    pub status: ImprovementStatus,
    pub weekly_rate: Option<f64>,
    pub monthly_rate: Option<f64>,
    pub progress_percent: Option<f64>,
}

impl ComparisonResult {
    pub fn is_improvement(&self) -> bool {
        self.status == ImprovementStatus::Improved
    }

    pub fn has_data(&self) -> bool {
        self.delta.is_some()
    }
}
