use chrono::NaiveDate;

use crate::models::{ComparisonResult, ImprovementDirection, ImprovementStatus, MetricSnapshot};
use crate::services::numeric::clamp_percent;

const DAYS_PER_WEEK: f64 = 7.0;
const DAYS_PER_MONTH: f64 = 30.0;

/// Compares a metric's baseline with its current value.
///
/// Stateless; missing values degrade to absent fields instead of errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricComparator;

impl MetricComparator {
    pub fn new() -> Self {
        Self
    }

    /// Delta, percentage change, linear rates and progress toward target
    pub fn compare(&self, snapshot: &MetricSnapshot, elapsed_days: i64) -> ComparisonResult {
        let mut result = ComparisonResult {
            label: snapshot.label.clone(),
            unit: snapshot.unit.clone(),
            baseline_value: snapshot.baseline_value,
            current_value: snapshot.current_value,
            target_value: snapshot.target_value,
            delta: None,
            delta_percent: None,
            status: ImprovementStatus::Unchanged,
            weekly_rate: None,
            monthly_rate: None,
            progress_percent: None,
        };

        let (baseline, current) = match (snapshot.baseline_value, snapshot.current_value) {
            (Some(baseline), Some(current)) => (baseline, current),
            _ => return result,
        };

        let delta = current - baseline;
        result.delta = Some(delta);
        result.delta_percent = Some(if baseline != 0.0 {
            delta / baseline * 100.0
        } else {
            0.0
        });
        result.status = Self::status(snapshot.improvement_direction, delta);

        if elapsed_days > 0 {
            let per_day = delta / elapsed_days as f64;
            result.weekly_rate = Some(per_day * DAYS_PER_WEEK);
            result.monthly_rate = Some(per_day * DAYS_PER_MONTH);
        }

        result.progress_percent = snapshot
            .target_value
            .map(|target| Self::progress_percent(snapshot.improvement_direction, baseline, current, target));

        result
    }

    /// Three-valued outcome; a zero delta is neither better nor worse
    pub fn status(direction: ImprovementDirection, delta: f64) -> ImprovementStatus {
        let improving = match direction {
            ImprovementDirection::Decreasing => delta < 0.0,
            ImprovementDirection::Increasing => delta > 0.0,
        };
        let worsening = match direction {
            ImprovementDirection::Decreasing => delta > 0.0,
            ImprovementDirection::Increasing => delta < 0.0,
        };

        if improving {
            ImprovementStatus::Improved
        } else if worsening {
            ImprovementStatus::Worsened
        } else {
            ImprovementStatus::Unchanged
        }
    }

    /// How far `current` has travelled from `baseline` toward `target`, in [0, 100]
    pub fn progress_percent(
        direction: ImprovementDirection,
        baseline: f64,
        current: f64,
        target: f64,
    ) -> f64 {
        let progress = match direction {
            ImprovementDirection::Decreasing => {
                if baseline <= target {
                    if current <= target {
                        100.0
                    } else {
                        0.0
                    }
                } else if current <= target {
                    100.0
                } else if current >= baseline {
                    0.0
                } else {
                    (baseline - current) / (baseline - target) * 100.0
                }
            }
            ImprovementDirection::Increasing => {
                if baseline >= target {
                    if current >= target {
                        100.0
                    } else {
                        0.0
                    }
                } else if current >= target {
                    100.0
                } else if current <= baseline {
                    0.0
                } else {
                    (current - baseline) / (target - baseline) * 100.0
                }
            }
        };

        clamp_percent(progress)
    }
}

/// Whole days from `from` to `to`; negative when `to` is earlier
pub fn elapsed_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
