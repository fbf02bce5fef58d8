use regex::{Match, Regex};
use tracing::debug;

use crate::models::{SurfSession, TrainingAnalysis, WorkoutSegment};
use crate::services::numeric::{format_fixed, format_trimmed};

const SEGMENT_DELIMITERS: [char; 3] = ['+', '|', '/'];
const SURF_KEYWORD: &str = "surf";
const SURF_FALLBACK_TEXT: &str = "Surf logged";
const DEFAULT_BODY_PART: &str = "Full body";

/// Keyword groups and the muscle groups they imply, checked in this order
const BODY_PART_RULES: &[(&[&str], &[&str])] = &[
    (&["chest press", "bench"], &["Chest", "Triceps"]),
    (
        &["leg press", "smith squat", "squat", "deadlift", "lunges"],
        &["Quads", "Glutes"],
    ),
    (&["shoulder", "overhead", "military"], &["Shoulders", "Traps"]),
    (&["row", "pull", "lat"], &["Back", "Biceps"]),
    (&["curl"], &["Biceps"]),
    (&["tricep", "dip"], &["Triceps"]),
    (&["core", "abs", "plank"], &["Core"]),
    (&["cardio", "treadmill"], &["Cardio Engine"]),
];

/// Parses free-form training logs such as
/// `"Surf 1.5hr + Chest Press 80kg 4x10 + Squats 100kg 3x8"`.
///
/// Holds only compiled patterns, so one instance can be shared across threads
/// and every call is independent.
pub struct TrainingTextAnalyzer {
    duration_pattern: Regex,
    weight_pattern: Regex,
    sets_reps_pattern: Regex,
    letter_pattern: Regex,
    title_word_pattern: Regex,
    leading_count_pattern: Regex,
}

impl Default for TrainingTextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingTextAnalyzer {
    pub fn new() -> Self {
        // Number followed by an hour or minute unit
        let duration_pattern =
            Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(hr|hrs|hour|hours|h|min|mins|minutes)")
                .expect("duration pattern is valid");

        // Load, longest unit spelling first so "lbs" is kept whole
        let weight_pattern =
            Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(kilograms|kgs|kg|pounds|lbs|lb)")
                .expect("weight pattern is valid");

        // 4x10, 4 × 10
        let sets_reps_pattern =
            Regex::new(r"(?i)(\d+)\s*[x×]\s*(\d+)").expect("sets/reps pattern is valid");

        let letter_pattern = Regex::new(r"(?i)[a-z]").expect("letter pattern is valid");

        // ASCII word character followed by the rest of the non-space run
        let title_word_pattern = Regex::new(r"(?-u:\w)\S*").expect("title word pattern is valid");

        let leading_count_pattern = Regex::new(r"^\d+\s*").expect("leading count pattern is valid");

        Self {
            duration_pattern,
            weight_pattern,
            sets_reps_pattern,
            letter_pattern,
            title_word_pattern,
            leading_count_pattern,
        }
    }

    /// Split a day's training text into at most one surf session and the
    /// strength work around it. Never fails; unusable text yields an empty analysis.
    pub fn analyze(&self, training_text: &str) -> TrainingAnalysis {
        let mut analysis = TrainingAnalysis::default();

        if training_text.trim().is_empty() {
            return analysis;
        }

        let segments = training_text
            .split(&SEGMENT_DELIMITERS[..])
            .map(str::trim)
            .filter(|segment| !segment.is_empty());

        for segment in segments {
            if segment.to_lowercase().contains(SURF_KEYWORD) {
                if analysis.surfing.is_none() {
                    analysis.surfing = Some(self.parse_surf_session(segment));
                } else {
                    debug!("Skipping additional surf segment {:?}", segment);
                }
                continue;
            }

            match self.parse_workout_segment(segment) {
                Some(workout) => analysis.workouts.push(workout),
                None => debug!("Segment {:?} is not a workout", segment),
            }
        }

        if analysis.surfing.is_none() && training_text.to_lowercase().contains(SURF_KEYWORD) {
            analysis.surfing = Some(self.parse_surf_session(training_text));
        }

        analysis
    }

    /// Surf session from a segment; falls back to "Surf logged" without a duration
    pub fn parse_surf_session(&self, segment: &str) -> SurfSession {
        let (duration_text, hours) = match self.extract_duration(segment) {
            Some((text, hours)) => (text, Some(hours)),
            None => (SURF_FALLBACK_TEXT.to_string(), None),
        };

        SurfSession {
            duration_text,
            hours,
            description: segment.to_string(),
        }
    }

    fn extract_duration(&self, text: &str) -> Option<(String, f64)> {
        let captures = self.duration_pattern.captures(text)?;
        let value: f64 = captures.get(1)?.as_str().parse().ok()?;
        let unit = captures.get(2)?.as_str().to_lowercase();

        if unit.starts_with('h') {
            Some((format!("{} hr surf", format_trimmed(value)), value))
        } else {
            Some((format!("{} min surf", format_fixed(value, 0)), value / 60.0))
        }
    }

    /// Parse one non-surf segment; `None` when it carries no usable exercise name
    pub fn parse_workout_segment(&self, segment: &str) -> Option<WorkoutSegment> {
        if !self.letter_pattern.is_match(segment) {
            return None;
        }

        let weight = self.weight_pattern.captures(segment);
        let sets_reps = self.sets_reps_pattern.captures(segment);

        let cut = weight
            .as_ref()
            .and_then(|c| c.get(0))
            .or_else(|| sets_reps.as_ref().and_then(|c| c.get(0)))
            .map(|m: Match<'_>| m.start());

        let mut name = match cut {
            Some(index) => segment[..index].trim(),
            None => segment,
        };
        if let Some(at) = name.find('@') {
            name = &name[..at];
        }
        let mut name = name.trim();
        if name.is_empty() {
            name = segment.trim();
        }
        let name = self.leading_count_pattern.replace(name, "");
        let name = self.title_case(name.trim_end());

        if name.is_empty() {
            return None;
        }

        let weight_text = weight
            .map(|c| format!("{} {}", &c[1], c[2].to_uppercase()))
            .unwrap_or_default();
        let sets_reps_text = sets_reps
            .map(|c| format!("{} × {}", &c[1], &c[2]))
            .unwrap_or_default();

        Some(WorkoutSegment {
            name,
            weight_text,
            sets_reps_text,
            body_parts: body_parts_for(&segment.to_lowercase()),
        })
    }

    fn title_case(&self, text: &str) -> String {
        self.title_word_pattern
            .replace_all(text, |captures: &regex::Captures<'_>| {
                let word = &captures[0];
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        format!("{}{}", first.to_ascii_uppercase(), chars.as_str().to_lowercase())
                    }
                    None => String::new(),
                }
            })
            .into_owned()
    }
}

/// Muscle groups implied by an exercise description (already lower-cased)
pub fn body_parts_for(lower_text: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();

    for (keywords, tags) in BODY_PART_RULES {
        if keywords.iter().any(|keyword| lower_text.contains(keyword)) {
            for tag in *tags {
                if !parts.iter().any(|part| part == tag) {
                    parts.push((*tag).to_string());
                }
            }
        }
    }

    if parts.is_empty() {
        parts.push(DEFAULT_BODY_PART.to_string());
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_empty_and_blank() {
        let analyzer = TrainingTextAnalyzer::new();
        assert!(analyzer.analyze("").is_empty());
        assert!(analyzer.analyze("   \t ").is_empty());
        assert!(analyzer.analyze(" + | / ").is_empty());
    }

    #[test]
    fn test_surf_hours() {
        let analyzer = TrainingTextAnalyzer::new();
        let surf = analyzer.analyze("Surf 1hr").surfing.unwrap();

        assert_eq!(surf.duration_text, "1 hr surf");
        assert_eq!(surf.hours, Some(1.0));
        assert_eq!(surf.description, "Surf 1hr");
    }

    #[test]
    fn test_surf_fractional_hours() {
        let analyzer = TrainingTextAnalyzer::new();
        let surf = analyzer.analyze("Morning surf 1.5 hours").surfing.unwrap();

        assert_eq!(surf.duration_text, "1.5 hr surf");
        assert_eq!(surf.hours, Some(1.5));
    }

    #[test]
    fn test_surf_minutes_convert_to_hours() {
        let analyzer = TrainingTextAnalyzer::new();
        let surf = analyzer.analyze("Surf 45min").surfing.unwrap();

        assert_eq!(surf.duration_text, "45 min surf");
        assert!((surf.hours.unwrap() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_surf_without_duration() {
        let analyzer = TrainingTextAnalyzer::new();
        let surf = analyzer.analyze("Surfing at the point").surfing.unwrap();

        assert_eq!(surf.duration_text, "Surf logged");
        assert_eq!(surf.hours, None);
    }

    #[test]
    fn test_first_surf_segment_wins() {
        let analyzer = TrainingTextAnalyzer::new();
        let analysis = analyzer.analyze("Surf 1hr + Surf 30min");

        assert_eq!(analysis.surfing.unwrap().duration_text, "1 hr surf");
        assert!(analysis.workouts.is_empty());
    }

    #[test]
    fn test_workout_with_weight_and_sets() {
        let analyzer = TrainingTextAnalyzer::new();
        let workout = analyzer.parse_workout_segment("Chest Press 80kg 4x10").unwrap();

        assert_eq!(workout.name, "Chest Press");
        assert_eq!(workout.weight_text, "80 KG");
        assert_eq!(workout.sets_reps_text, "4 × 10");
        assert_eq!(workout.body_parts, vec!["Chest", "Triceps"]);
    }

    #[test]
    fn test_workout_sets_only_cuts_name_there() {
        let analyzer = TrainingTextAnalyzer::new();
        let workout = analyzer.parse_workout_segment("plank 3 × 60").unwrap();

        assert_eq!(workout.name, "Plank");
        assert!(!workout.has_weight());
        assert_eq!(workout.sets_reps_text, "3 × 60");
        assert_eq!(workout.body_parts, vec!["Core"]);
    }

    #[test]
    fn test_workout_pounds_keep_full_unit() {
        let analyzer = TrainingTextAnalyzer::new();
        let workout = analyzer.parse_workout_segment("Deadlift 175lbs 5x5").unwrap();

        assert_eq!(workout.weight_text, "175 LBS");
        assert_eq!(workout.name, "Deadlift");
    }

    #[test]
    fn test_workout_strips_rpe_note_and_leading_count() {
        let analyzer = TrainingTextAnalyzer::new();

        let bench = analyzer.parse_workout_segment("bench @ RPE8").unwrap();
        assert_eq!(bench.name, "Bench");

        let press = analyzer.parse_workout_segment("1 chest press 70 kg").unwrap();
        assert_eq!(press.name, "Chest Press");
        assert_eq!(press.weight_text, "70 KG");
    }

    #[test]
    fn test_workout_name_falls_back_to_segment() {
        let analyzer = TrainingTextAnalyzer::new();
        let workout = analyzer.parse_workout_segment("100kg").unwrap();

        // Nothing precedes the load, so the whole segment minus its leading digits is used
        assert_eq!(workout.name, "Kg");
        assert_eq!(workout.weight_text, "100 KG");
    }

    #[test]
    fn test_segment_without_letters_is_rejected() {
        let analyzer = TrainingTextAnalyzer::new();
        assert!(analyzer.parse_workout_segment("3 × 8").is_none());
        assert!(analyzer.parse_workout_segment("4 10").is_none());
        assert!(analyzer.parse_workout_segment("80 / 90").is_none());
    }

    #[test]
    fn test_bare_sets_reps_keeps_the_x() {
        let analyzer = TrainingTextAnalyzer::new();
        let workout = analyzer.parse_workout_segment("4x10").unwrap();

        // The "x" is the only letter, so the segment survives as its own name
        assert_eq!(workout.name, "X10");
        assert_eq!(workout.sets_reps_text, "4 × 10");
        assert_eq!(workout.body_parts, vec!["Full body"]);
    }

    #[test]
    fn test_segment_reduced_to_nothing_is_rejected() {
        let analyzer = TrainingTextAnalyzer::new();
        assert!(analyzer.parse_workout_segment("1 @ a").is_none());
    }

    #[test]
    fn test_body_parts_accumulate_without_duplicates() {
        assert_eq!(
            body_parts_for("bench then tricep dips"),
            vec!["Chest", "Triceps"]
        );
        assert_eq!(
            body_parts_for("lat pulldown + bicep curl"),
            vec!["Back", "Biceps"]
        );
        assert_eq!(body_parts_for("sprints"), vec!["Full body"]);
    }

    #[test]
    fn test_title_case_lowercases_the_rest() {
        let analyzer = TrainingTextAnalyzer::new();
        assert_eq!(analyzer.title_case("SMITH squat"), "Smith Squat");
        assert_eq!(analyzer.title_case("(incline) bench"), "(Incline) Bench");
    }
}
