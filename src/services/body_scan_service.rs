use tracing::debug;

use crate::models::{
    Achievement, BodyScan, ComparisonResult, ImprovementDirection, MetricSnapshot, ProgressRing,
};
use crate::services::metric_comparator::{elapsed_days, MetricComparator};
use crate::services::numeric::{format_fixed, format_trimmed};

type ScanField = fn(&BodyScan) -> Option<f64>;

/// Metrics compared between two scans, with the direction that counts as progress
const SCAN_METRICS: [(&str, &str, ImprovementDirection, ScanField); 11] = [
    ("Weight", "kg", ImprovementDirection::Decreasing, |s| s.weight_kg),
    ("Body Fat %", "%", ImprovementDirection::Decreasing, |s| s.body_fat_percent),
    ("Lean Mass", "kg", ImprovementDirection::Increasing, |s| s.lean_mass_kg),
    (
        "Skeletal Muscle Mass",
        "kg",
        ImprovementDirection::Increasing,
        |s| s.skeletal_muscle_mass_kg,
    ),
    ("Fat Mass", "kg", ImprovementDirection::Decreasing, |s| s.fat_mass_kg),
    ("Visceral Fat Level", "", ImprovementDirection::Decreasing, |s| s.visceral_fat_level),
    (
        "Visceral Fat Area",
        "cm²",
        ImprovementDirection::Decreasing,
        |s| s.visceral_fat_area_cm2,
    ),
    ("Android Fat", "kg", ImprovementDirection::Decreasing, |s| s.android_fat_kg),
    ("Gynoid Fat", "kg", ImprovementDirection::Decreasing, |s| s.gynoid_fat_kg),
    (
        "BMR",
        "kcal",
        ImprovementDirection::Increasing,
        |s| s.basal_metabolic_rate_kcal,
    ),
    ("BMI", "", ImprovementDirection::Decreasing, |s| s.bmi),
];

const BODY_FAT_TARGET_PERCENT: f64 = 13.0;
const LEAN_MASS_GAIN_TARGET_KG: f64 = 8.0;
const MUSCLE_GAIN_TARGET_KG: f64 = 5.0;
const VISCERAL_FAT_TARGET_LEVEL: f64 = 5.0;
const GOOD_RECOMPOSITION_RATIO: f64 = 0.5;

/// Compares body-composition scans
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScanService {
    comparator: MetricComparator,
}

impl BodyScanService {
    pub fn new() -> Self {
        Self {
            comparator: MetricComparator::new(),
        }
    }

    /// Earliest and latest scan by date; needs at least two scans
    pub fn baseline_and_latest(scans: &[BodyScan]) -> Option<(&BodyScan, &BodyScan)> {
        if scans.len() < 2 {
            return None;
        }
        let baseline = scans.iter().min_by_key(|scan| scan.date)?;
        let latest = scans.iter().max_by_key(|scan| scan.date)?;
        Some((baseline, latest))
    }

    /// All scan metrics, baseline vs latest
    pub fn compare_scans(&self, baseline: &BodyScan, latest: &BodyScan) -> Vec<ComparisonResult> {
        let days = elapsed_days(baseline.date, latest.date);
        debug!("Comparing scans {} and {} ({} days)", baseline.date, latest.date, days);

        SCAN_METRICS
            .iter()
            .map(|(label, unit, direction, field)| {
                let snapshot = MetricSnapshot::new(*label, *direction)
                    .with_values(field(baseline), field(latest))
                    .with_unit(*unit);
                self.comparator.compare(&snapshot, days)
            })
            .collect()
    }

    /// Rings for the four headline scan goals
    pub fn progress_rings(&self, baseline: &BodyScan, latest: &BodyScan) -> Vec<ProgressRing> {
        let rings = [
            (
                "Body Fat %",
                "%",
                ImprovementDirection::Decreasing,
                baseline.body_fat_percent,
                latest.body_fat_percent,
                Some(BODY_FAT_TARGET_PERCENT),
            ),
            (
                "Lean Mass",
                "kg",
                ImprovementDirection::Increasing,
                baseline.lean_mass_kg,
                latest.lean_mass_kg,
                baseline.lean_mass_kg.map(|kg| kg + LEAN_MASS_GAIN_TARGET_KG),
            ),
            (
                "Muscle Mass",
                "kg",
                ImprovementDirection::Increasing,
                baseline.skeletal_muscle_mass_kg,
                latest.skeletal_muscle_mass_kg,
                baseline
                    .skeletal_muscle_mass_kg
                    .map(|kg| kg + MUSCLE_GAIN_TARGET_KG),
            ),
            (
                "Visceral Fat",
                "",
                ImprovementDirection::Decreasing,
                baseline.visceral_fat_level,
                latest.visceral_fat_level,
                Some(VISCERAL_FAT_TARGET_LEVEL),
            ),
        ];

        rings
            .into_iter()
            .map(|(label, unit, direction, start, current, target)| {
                let snapshot = MetricSnapshot::new(label, direction)
                    .with_values(start, current)
                    .with_target(target)
                    .with_unit(unit);
                let comparison = self.comparator.compare(&snapshot, 0);

                ProgressRing {
                    label: label.to_string(),
                    unit: unit.to_string(),
                    current,
                    target,
                    progress_percent: comparison.progress_percent.unwrap_or(0.0),
                }
            })
            .collect()
    }

    /// Highlight cards; only changes in the good direction earn one
    pub fn achievements(&self, baseline: &BodyScan, latest: &BodyScan) -> Vec<Achievement> {
        let mut achievements = Vec::new();
        let days = elapsed_days(baseline.date, latest.date);

        let body_fat_drop = difference(baseline.body_fat_percent, latest.body_fat_percent);
        let muscle_gain = difference(latest.skeletal_muscle_mass_kg, baseline.skeletal_muscle_mass_kg);
        let fat_loss = difference(baseline.fat_mass_kg, latest.fat_mass_kg);
        let visceral_drop = difference(baseline.visceral_fat_level, latest.visceral_fat_level);

        if let (Some(drop), Some(from), Some(to)) =
            (body_fat_drop, baseline.body_fat_percent, latest.body_fat_percent)
        {
            if drop > 0.0 {
                achievements.push(Achievement {
                    title: "Body Fat Reduction".to_string(),
                    value: format!("{}%", format_fixed(drop, 1)),
                    label: format!(
                        "Dropped from {}% to {}%",
                        format_fixed(from, 1),
                        format_fixed(to, 1)
                    ),
                    positive: true,
                });
            }
        }

        if let Some(gain) = muscle_gain.filter(|gain| *gain > 0.0) {
            achievements.push(Achievement {
                title: "Muscle Gained".to_string(),
                value: format!("+{} kg", format_fixed(gain, 1)),
                label: format!("Gained {} kg of muscle mass", format_fixed(gain, 1)),
                positive: true,
            });
        }

        if let Some(loss) = fat_loss.filter(|loss| *loss > 0.0) {
            achievements.push(Achievement {
                title: "Fat Lost".to_string(),
                value: format!("-{} kg", format_fixed(loss, 1)),
                label: format!("Lost {} kg of fat", format_fixed(loss, 1)),
                positive: true,
            });
        }

        if let (Some(drop), Some(from), Some(to)) =
            (visceral_drop, baseline.visceral_fat_level, latest.visceral_fat_level)
        {
            if drop > 0.0 {
                achievements.push(Achievement {
                    title: "Visceral Fat Drop".to_string(),
                    value: format!("-{}", format_trimmed(drop)),
                    label: format!(
                        "Reduced visceral fat level from {} to {}",
                        format_trimmed(from),
                        format_trimmed(to)
                    ),
                    positive: true,
                });
            }
        }

        if let (Some(gain), Some(loss)) = (muscle_gain, fat_loss) {
            if gain > 0.0 && loss > 0.0 {
                let ratio = gain / loss;
                achievements.push(Achievement {
                    title: "Recomposition Ratio".to_string(),
                    value: format!("{}:1", format_fixed(ratio, 2)),
                    label: format!(
                        "{} kg muscle gained per {} kg fat lost",
                        format_fixed(gain, 1),
                        format_fixed(loss, 1)
                    ),
                    positive: ratio >= GOOD_RECOMPOSITION_RATIO,
                });
            }
        }

        if let Some(drop) = body_fat_drop {
            if days > 0 {
                let weekly = drop / days as f64 * 7.0;
                achievements.push(Achievement {
                    title: "Weekly Rate".to_string(),
                    value: format!("{}% BF/week", format_fixed(weekly, 2)),
                    label: format!("Body fat dropping {}% per week", format_fixed(weekly, 2)),
                    positive: weekly > 0.0,
                });
            }
        }

        achievements
    }
}

fn difference(minuend: Option<f64>, subtrahend: Option<f64>) -> Option<f64> {
    Some(minuend? - subtrahend?)
}
