use colored::{ColoredString, Colorize};
use fitlog::models::{
    Achievement, ComparisonResult, DaySummary, Headline, ImprovementStatus, ProgressRing,
    ProgressRow, TrainingAnalysis, WeightSuggestion,
};
use fitlog::services::numeric::format_fixed;
use std::fmt::Write;

const RULE: &str = "────────────────────────────────";

fn heading(title: &str) -> String {
    format!("{}\n{}\n", title.bold(), RULE)
}

fn signed(value: f64, decimals: usize) -> String {
    let text = format_fixed(value, decimals);
    if value > 0.0 && !text.starts_with('+') {
        format!("+{}", text)
    } else {
        text
    }
}

fn optional(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|value| format_fixed(value, decimals))
        .unwrap_or_else(|| "--".to_string())
}

fn status_text(status: ImprovementStatus, text: String) -> ColoredString {
    match status {
        ImprovementStatus::Improved => text.green(),
        ImprovementStatus::Worsened => text.red(),
        ImprovementStatus::Unchanged => text.yellow(),
    }
}

fn check(met: bool) -> ColoredString {
    if met {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Ten-cell bar for a 0-100 percentage
fn bar(percent: f64) -> String {
    let filled = (percent.clamp(0.0, 100.0) / 10.0).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

pub fn render_analysis(analysis: &TrainingAnalysis) -> String {
    let mut out = heading("Training");

    if analysis.is_empty() {
        let _ = writeln!(out, "{}", "No training logged".dimmed());
        return out;
    }

    if let Some(surf) = &analysis.surfing {
        let _ = writeln!(out, "🏄 {}", surf.duration_text.cyan().bold());
    }

    for workout in &analysis.workouts {
        let mut details = Vec::new();
        if workout.has_weight() {
            details.push(workout.weight_text.clone());
        }
        if workout.has_sets_reps() {
            details.push(workout.sets_reps_text.clone());
        }

        let _ = writeln!(
            out,
            "🏋 {}  {}  [{}]",
            workout.name.bold(),
            details.join(" · "),
            workout.body_parts.join(", ").dimmed()
        );
    }

    out
}

pub fn render_comparison(result: &ComparisonResult, decimals: usize) -> String {
    let mut out = heading(&result.label);
    let unit = if result.unit.is_empty() {
        String::new()
    } else {
        format!(" {}", result.unit)
    };

    let _ = writeln!(out, "Baseline:  {}{}", optional(result.baseline_value, decimals), unit);
    let _ = writeln!(out, "Current:   {}{}", optional(result.current_value, decimals), unit);

    let (delta, delta_percent) = match (result.delta, result.delta_percent) {
        (Some(delta), Some(percent)) => (delta, percent),
        _ => {
            let _ = writeln!(out, "{}", "Not enough data to compare".dimmed());
            return out;
        }
    };

    let _ = writeln!(
        out,
        "Change:    {}",
        status_text(
            result.status,
            format!("{}{} ({}%)", signed(delta, decimals), unit, signed(delta_percent, 1))
        )
    );

    if let (Some(weekly), Some(monthly)) = (result.weekly_rate, result.monthly_rate) {
        let _ = writeln!(
            out,
            "Rate:      {}{}/week, {}{}/month",
            signed(weekly, 2),
            unit,
            signed(monthly, 2),
            unit
        );
    }

    if let (Some(target), Some(progress)) = (result.target_value, result.progress_percent) {
        let _ = writeln!(
            out,
            "Target:    {}{}  {} {}%",
            format_fixed(target, decimals),
            unit,
            bar(progress),
            format_fixed(progress, 0)
        );
    }

    out
}

pub fn render_day(summary: &DaySummary, decimals: usize) -> String {
    let title = match (summary.date, summary.day) {
        (Some(date), Some(day)) => format!("Day {} ({})", day, date),
        (Some(date), None) => date.to_string(),
        (None, Some(day)) => format!("Day {}", day),
        (None, None) => "Latest day".to_string(),
    };
    let mut out = heading(&title);

    let totals = &summary.totals;
    let _ = writeln!(
        out,
        "Protein {} g · Carbs {} g · Fat {} g · {} kcal · Seafood {} kg",
        format_fixed(totals.protein, 0),
        format_fixed(totals.carbs, 0),
        format_fixed(totals.fat, 0),
        format_fixed(totals.kcal, 0),
        format_fixed(totals.seafood_kg, decimals)
    );

    let score = &summary.score;
    let _ = writeln!(
        out,
        "Score {}/{}  {} protein  {} seafood  {} supplements  {} training  {} feeling",
        score.points(),
        fitlog::models::DailyScore::MAX,
        check(score.protein_met),
        check(score.seafood_met),
        check(score.supplements_taken),
        check(score.training_logged),
        check(score.feeling_met)
    );

    if !summary.supplements.is_empty() {
        let supplements: Vec<String> = summary
            .supplements
            .iter()
            .map(|supplement| match &supplement.dose {
                Some(dose) => format!("{} {} ({})", check(supplement.taken), supplement.label, dose),
                None => format!("{} {}", check(supplement.taken), supplement.label),
            })
            .collect();
        let _ = writeln!(out, "{}", supplements.join("  "));
    }

    out.push('\n');
    out.push_str(&render_analysis(&summary.training));
    out
}

pub fn render_progress(headline: &Headline, rows: &[ProgressRow], decimals: usize) -> String {
    let mut out = heading("Progress");

    let _ = writeln!(
        out,
        "Streak   {} days  {} {}%",
        headline.streak_days.to_string().bold(),
        bar(headline.streak_progress_percent),
        format_fixed(headline.streak_progress_percent, 0)
    );
    if let Some(weight) = headline.latest_weight_kg {
        let _ = writeln!(
            out,
            "Weight   {} kg ({} kg)  {} {}%",
            format_fixed(weight, decimals).bold(),
            signed(-headline.weight_lost_kg.unwrap_or(0.0), decimals),
            bar(headline.weight_progress_percent.unwrap_or(0.0)),
            format_fixed(headline.weight_progress_percent.unwrap_or(0.0), 0)
        );
    }
    let _ = writeln!(
        out,
        "Seafood  {} kg  {} {}%",
        format_fixed(headline.total_seafood_kg, decimals).bold(),
        bar(headline.seafood_progress_percent),
        format_fixed(headline.seafood_progress_percent, 0)
    );
    out.push('\n');

    let _ = writeln!(
        out,
        "{:<12} {:>10} {:>10} {:>10} {:>10}",
        "Metric", "Baseline", "Current", "Target", "Progress"
    );
    for row in rows {
        let progress = row
            .comparison
            .progress_percent
            .map(|percent| format!("{}%", format_fixed(percent, 0)))
            .unwrap_or_else(|| "--".to_string());

        let _ = writeln!(
            out,
            "{:<12} {:>10} {:>10} {:>10} {}",
            row.label,
            row.baseline_text,
            row.current_text,
            row.target_text,
            status_text(row.comparison.status, format!("{:>10}", progress))
        );
    }

    out
}

pub fn render_scans(
    comparisons: &[ComparisonResult],
    rings: &[ProgressRing],
    achievements: &[Achievement],
    decimals: usize,
) -> String {
    let mut out = heading("Body Scans");

    for result in comparisons.iter().filter(|result| result.has_data()) {
        let delta = result.delta.unwrap_or(0.0);
        let _ = writeln!(
            out,
            "{:<22} {:>8} → {:>8}  {}",
            result.label,
            optional(result.baseline_value, decimals),
            optional(result.current_value, decimals),
            status_text(result.status, format!("{} {}", signed(delta, decimals), result.unit))
        );
    }

    if !rings.is_empty() {
        out.push('\n');
        for ring in rings {
            let _ = writeln!(
                out,
                "{:<14} {} {}%  (target {})",
                ring.label,
                bar(ring.progress_percent),
                format_fixed(ring.progress_percent, 0),
                optional(ring.target, decimals)
            );
        }
    }

    if !achievements.is_empty() {
        out.push('\n');
        for achievement in achievements {
            let value = if achievement.positive {
                achievement.value.green().bold()
            } else {
                achievement.value.yellow()
            };
            let _ = writeln!(out, "★ {}: {}  {}", achievement.title, value, achievement.label.dimmed());
        }
    }

    out
}

pub fn render_suggestion(suggestion: &WeightSuggestion) -> String {
    let mut out = heading(&suggestion.exercise);
    let _ = writeln!(out, "💡 Next: {}", suggestion.display_weight.cyan().bold());
    let _ = writeln!(out, "{}", suggestion.message);
    out
}
