use tracing::{debug, info};

use crate::config::AnalyticsConfig;
use crate::models::{
    DailyScore, DashboardData, DayLog, DaySummary, Headline, ImprovementDirection, MetricSnapshot,
    ProgressRow, TargetSpec,
};
use crate::services::metric_comparator::{elapsed_days, MetricComparator};
use crate::services::numeric::{clamp_percent, format_trimmed};
use crate::services::target_parser::parse_target;
use crate::services::training_text_analyzer::TrainingTextAnalyzer;

const DEFAULT_WEIGHT_TARGET: &str = "82-85 kg";
const DEFAULT_BODY_FAT_TARGET: &str = "≤13%";
const DEFAULT_ANDROID_FAT_TARGET: &str = "≤15%";
const DEFAULT_ALT_TARGET: &str = "<80";

/// Builds the day view, progress table and headline numbers from a dashboard payload
pub struct DashboardService {
    analyzer: TrainingTextAnalyzer,
    comparator: MetricComparator,
    config: AnalyticsConfig,
}

impl DashboardService {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            analyzer: TrainingTextAnalyzer::new(),
            comparator: MetricComparator::new(),
            config,
        }
    }

    /// One point per habit hit on the day
    pub fn daily_score(&self, log: &DayLog) -> DailyScore {
        DailyScore {
            protein_met: log.totals.protein >= self.config.protein_goal_g,
            seafood_met: log.totals.seafood_kg >= self.config.seafood_goal_kg,
            supplements_taken: log.all_supplements_taken(),
            training_logged: log.has_training(),
            feeling_met: log.feeling.unwrap_or(0.0) >= self.config.feeling_goal,
        }
    }

    pub fn summarize_day(&self, log: &DayLog) -> DaySummary {
        DaySummary {
            date: log.date,
            day: log.day,
            totals: log.totals,
            score: self.daily_score(log),
            training: self.analyzer.analyze(&log.training_text),
            supplements: log.supplements.clone(),
        }
    }

    /// Baseline vs latest for the tracked body and lab metrics
    pub fn progress_table(&self, data: &DashboardData) -> Vec<ProgressRow> {
        let latest = data.latest_log();
        let days = self.elapsed_days(data);
        let baseline = &data.baseline;

        let rows = vec![
            self.progress_row(
                "Weight",
                "kg",
                baseline
                    .weight_kg
                    .or(Some(self.config.default_baseline_weight_kg)),
                latest.and_then(|log| log.fasted_weight_kg),
                data.targets.weight.as_deref().unwrap_or(DEFAULT_WEIGHT_TARGET),
                days,
            ),
            self.progress_row(
                "Body Fat",
                "%",
                baseline.body_fat_percent,
                latest.and_then(|log| log.body_fat_percent),
                data.targets.body_fat.as_deref().unwrap_or(DEFAULT_BODY_FAT_TARGET),
                days,
            ),
            self.progress_row(
                "Android Fat",
                "%",
                baseline.android_fat_percent,
                latest.and_then(|log| log.android_fat_percent),
                data.targets
                    .android_fat
                    .as_deref()
                    .unwrap_or(DEFAULT_ANDROID_FAT_TARGET),
                days,
            ),
            self.progress_row(
                "ALT",
                "",
                baseline.alt,
                latest.and_then(|log| log.alt),
                data.targets.alt.as_deref().unwrap_or(DEFAULT_ALT_TARGET),
                days,
            ),
        ];

        debug!(
            "Progress table: {} of {} rows with data over {} days",
            rows.iter().filter(|row| row.has_data()).count(),
            rows.len(),
            days
        );
        rows
    }

    fn progress_row(
        &self,
        label: &str,
        unit: &str,
        baseline: Option<f64>,
        current: Option<f64>,
        target_text: &str,
        days: i64,
    ) -> ProgressRow {
        let target = parse_target(target_text);
        let snapshot = MetricSnapshot::new(label, ImprovementDirection::Decreasing)
            .with_values(baseline, current)
            .with_target_spec(target.as_ref())
            .with_unit(unit);

        ProgressRow {
            label: label.to_string(),
            baseline_text: value_text(baseline, unit),
            current_text: value_text(current, unit),
            target_text: target_text.to_string(),
            target,
            comparison: self.comparator.compare(&snapshot, days),
        }
    }

    /// Streak, weight and seafood headline
    pub fn headline(&self, data: &DashboardData) -> Headline {
        let latest = data.latest_log();
        let latest_weight = latest.and_then(|log| log.fasted_weight_kg);
        let baseline_weight = data
            .baseline
            .weight_kg
            .unwrap_or(self.config.default_baseline_weight_kg);

        let weight_target = data
            .targets
            .weight
            .as_deref()
            .and_then(parse_target)
            .or_else(|| parse_target(DEFAULT_WEIGHT_TARGET))
            .map(|target: TargetSpec| target.progress_value());

        let weight_progress = match (latest_weight, weight_target) {
            (Some(current), Some(target)) => Some(MetricComparator::progress_percent(
                ImprovementDirection::Decreasing,
                baseline_weight,
                current,
                target,
            )),
            _ => None,
        };

        let total_seafood: f64 = data.daily_logs.iter().map(|log| log.totals.seafood_kg).sum();

        let headline = Headline {
            streak_days: data.streak,
            streak_progress_percent: ratio_percent(
                f64::from(data.streak),
                f64::from(self.config.streak_goal_days),
            ),
            latest_weight_kg: latest_weight,
            weight_lost_kg: latest_weight.map(|current| baseline_weight - current),
            weight_progress_percent: weight_progress,
            total_seafood_kg: total_seafood,
            seafood_progress_percent: ratio_percent(total_seafood, self.config.seafood_total_goal_kg),
            latest_score: latest.map(|log| self.daily_score(log)),
        };

        info!(
            "Dashboard headline: streak {} days, {} logs",
            headline.streak_days,
            data.daily_logs.len()
        );
        headline
    }

    fn elapsed_days(&self, data: &DashboardData) -> i64 {
        match (data.start_date(), data.latest_log().and_then(|log| log.date)) {
            (Some(start), Some(end)) => elapsed_days(start, end),
            _ => 0,
        }
    }
}

fn value_text(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) if unit.is_empty() => format_trimmed(value),
        Some(value) => format!("{} {}", format_trimmed(value), unit),
        None => "--".to_string(),
    }
}

fn ratio_percent(value: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    clamp_percent(value / goal * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyTotals, ImprovementStatus, Supplement};

    fn day(protein: f64, seafood: f64, training: &str, feeling: Option<f64>) -> DayLog {
        DayLog {
            date: None,
            day: None,
            training_text: training.to_string(),
            fasted_weight_kg: None,
            body_fat_percent: None,
            android_fat_percent: None,
            alt: None,
            totals: DailyTotals {
                protein,
                seafood_kg: seafood,
                ..DailyTotals::default()
            },
            supplements: vec![Supplement {
                key: "omega3".to_string(),
                label: "Omega-3".to_string(),
                taken: true,
                dose: None,
            }],
            feeling,
        }
    }

    #[test]
    fn test_perfect_day_scores_five() {
        let service = DashboardService::new(AnalyticsConfig::default());
        let score = service.daily_score(&day(360.0, 1.0, "Surf 1hr", Some(9.0)));

        assert_eq!(score.points(), DailyScore::MAX);
    }

    #[test]
    fn test_partial_day() {
        let service = DashboardService::new(AnalyticsConfig::default());
        let score = service.daily_score(&day(200.0, 1.5, "  ", None));

        assert!(!score.protein_met);
        assert!(score.seafood_met);
        assert!(score.supplements_taken);
        assert!(!score.training_logged);
        assert!(!score.feeling_met);
        assert_eq!(score.points(), 2);
    }

    #[test]
    fn test_summarize_day_runs_analyzer() {
        let service = DashboardService::new(AnalyticsConfig::default());
        let summary = service.summarize_day(&day(0.0, 0.0, "Surf 45min + Squats 100kg 3x8", None));

        assert_eq!(summary.training.surfing.unwrap().duration_text, "45 min surf");
        assert_eq!(summary.training.workouts[0].name, "Squats");
    }

    #[test]
    fn test_progress_table_uses_defaults() {
        let service = DashboardService::new(AnalyticsConfig::default());
        let data = DashboardData::from_json(
            r#"{"daily_logs": [
                {"date": "2025-11-21", "fastedWeight": 90.0},
                {"date": "2025-12-05", "fastedWeight": 87.5}
            ]}"#,
        )
        .unwrap();

        let rows = service.progress_table(&data);
        assert_eq!(rows.len(), 4);

        let weight = &rows[0];
        assert_eq!(weight.label, "Weight");
        assert_eq!(weight.baseline_text, "90 kg");
        assert_eq!(weight.current_text, "87.5 kg");
        assert_eq!(weight.target_text, "82-85 kg");
        assert_eq!(weight.comparison.target_value, Some(85.0));
        assert_eq!(weight.comparison.progress_percent, Some(50.0));
        assert_eq!(weight.comparison.status, ImprovementStatus::Improved);
        assert!((weight.comparison.weekly_rate.unwrap() - -1.25).abs() < 1e-9);

        let alt = &rows[3];
        assert_eq!(alt.baseline_text, "--");
        assert!(!alt.has_data());
        assert_eq!(alt.target.as_ref().unwrap().progress_value(), 80.0);
    }

    #[test]
    fn test_headline() {
        let service = DashboardService::new(AnalyticsConfig::default());
        let data = DashboardData::from_json(
            r#"{
                "baseline": {"weight": 90},
                "streak": 15,
                "daily_logs": [
                    {"seafood_kg": 1.5},
                    {"fastedWeight": 88, "total": {"seafoodKg": 1.0}}
                ]
            }"#,
        )
        .unwrap();

        let headline = service.headline(&data);
        assert_eq!(headline.streak_days, 15);
        assert_eq!(headline.streak_progress_percent, 50.0);
        assert_eq!(headline.latest_weight_kg, Some(88.0));
        assert_eq!(headline.weight_lost_kg, Some(2.0));
        assert_eq!(headline.total_seafood_kg, 2.5);
        assert_eq!(headline.seafood_progress_percent, 25.0);
        assert!(headline.weight_progress_percent.unwrap() > 0.0);
        assert!(headline.latest_score.is_some());
    }

    #[test]
    fn test_headline_without_logs() {
        let service = DashboardService::new(AnalyticsConfig::default());
        let headline = service.headline(&DashboardData::default());

        assert_eq!(headline.latest_weight_kg, None);
        assert_eq!(headline.weight_progress_percent, None);
        assert_eq!(headline.latest_score, None);
        assert_eq!(headline.streak_progress_percent, 0.0);
    }
}
