use thiserror::Error;
use tracing::debug;

use crate::error::Result;
use crate::models::{
    ExerciseSession, SetLabel, SuggestionKind, TrainingHistory, WeightSuggestion,
};
use crate::services::numeric::format_compact;

pub const KG_TO_LBS: f64 = 2.20462;

const HOLD_INCREMENT_LBS: f64 = 5.0;
const SMALL_INCREMENT_LBS: f64 = 2.5;
const GOOD_REPS: f64 = 8.0;

/// Why no suggestion could be made for an exercise
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSuggestion {
    #[error("Need at least 2 sessions to suggest progression")]
    TooFewSessions,
    #[error("Need weight data to suggest progression")]
    MissingWeights,
}

/// Whole pounds, as stored in the training logs
pub fn kg_to_lbs(kg: f64) -> f64 {
    (kg * KG_TO_LBS).round()
}

/// Total weight moved in a session, in pounds.
///
/// Explicit `weight_lbs` wins, then the working set's per-side load doubled,
/// then a converted `weight_kg`.
pub fn session_weight_lbs(session: &ExerciseSession) -> Option<f64> {
    if let Some(lbs) = session.weight_lbs.filter(|lbs| *lbs > 0.0) {
        return Some(lbs);
    }

    let set_count = session.sets_reps.len() as u32;
    let working_set = session.sets_reps.iter().find(|record| match &record.set {
        SetLabel::Name(name) => name == "working",
        SetLabel::Number(number) => *number == set_count,
    });
    if let Some(each_side) = working_set
        .and_then(|record| record.weight_each_side_lbs)
        .filter(|lbs| *lbs > 0.0)
    {
        return Some(each_side * 2.0);
    }

    session
        .weight_kg
        .filter(|kg| *kg > 0.0)
        .map(kg_to_lbs)
}

/// Mean of the non-zero rep counts; zero when nothing was counted
pub fn average_reps(session: &ExerciseSession) -> f64 {
    let reps: Vec<u32> = session
        .sets_reps
        .iter()
        .filter_map(|record| record.reps)
        .filter(|reps| *reps > 0)
        .collect();

    if reps.is_empty() {
        return 0.0;
    }
    f64::from(reps.iter().sum::<u32>()) / reps.len() as f64
}

/// Next-session load from the last two weighted sessions.
///
/// Sessions must be in chronological order.
pub fn suggest_next_weight(
    exercise: &str,
    sessions: &[ExerciseSession],
) -> std::result::Result<WeightSuggestion, NoSuggestion> {
    if sessions.len() < 2 {
        return Err(NoSuggestion::TooFewSessions);
    }

    let weights: Vec<f64> = sessions.iter().filter_map(session_weight_lbs).collect();
    let (previous, latest) = match weights.as_slice() {
        [.., previous, latest] => (*previous, *latest),
        _ => return Err(NoSuggestion::MissingWeights),
    };

    let latest_session = &sessions[sessions.len() - 1];
    let avg_reps = average_reps(latest_session);
    let diff = latest - previous;

    let (kind, suggested, message) = if diff > 0.0 {
        let suggested = latest + diff;
        (
            SuggestionKind::ContinueProgression,
            suggested,
            format!(
                "Based on your progression (+{} lbs), try {} lbs next session.",
                format_compact(diff),
                format_compact(suggested)
            ),
        )
    } else if diff == 0.0 && avg_reps >= GOOD_REPS {
        let suggested = latest + HOLD_INCREMENT_LBS;
        (
            SuggestionKind::IncreaseAfterHold,
            suggested,
            format!(
                "You've been hitting {} reps consistently. Try {} lbs for progressive overload.",
                avg_reps.round(),
                format_compact(suggested)
            ),
        )
    } else if diff < 0.0 {
        (
            SuggestionKind::Maintain,
            latest,
            format!(
                "Weight decreased last session. Maintain {} lbs and focus on form/volume.",
                format_compact(latest)
            ),
        )
    } else {
        let suggested = latest + SMALL_INCREMENT_LBS;
        (
            SuggestionKind::SmallIncrease,
            suggested,
            format!(
                "Try a small increase to {} lbs if you're hitting 8+ reps consistently.",
                format_compact(suggested)
            ),
        )
    };

    let display_weight = if latest_session.weight_each_side_lbs.is_some() {
        format!(
            "{} lbs each side ({} lbs total)",
            format_compact(suggested / 2.0),
            format_compact(suggested)
        )
    } else {
        format!("{} lbs", format_compact(suggested))
    };

    debug!("{}: {:?} from {} to {} lbs", exercise, kind, latest, suggested);

    Ok(WeightSuggestion {
        exercise: exercise.to_string(),
        kind,
        suggested_lbs: suggested,
        previous_lbs: previous,
        latest_lbs: latest,
        average_reps: avg_reps,
        display_weight,
        message,
    })
}

/// Decode a training history and put every exercise in date order
pub fn parse_training_history(json: &str) -> Result<TrainingHistory> {
    let mut history: TrainingHistory = serde_json::from_str(json)?;
    for sessions in history.values_mut() {
        sessions.sort_by_key(|session| session.date);
    }
    Ok(history)
}

/// Suggestions for every exercise that has enough data
pub fn suggest_all(history: &TrainingHistory) -> Vec<WeightSuggestion> {
    history
        .iter()
        .filter_map(|(exercise, sessions)| match suggest_next_weight(exercise, sessions) {
            Ok(suggestion) => Some(suggestion),
            Err(reason) => {
                debug!("Skipping {}: {}", exercise, reason);
                None
            }
        })
        .collect()
}
