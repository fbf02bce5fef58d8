use anyhow::{Context as _, Result};
use clap::Args;
use fitlog::services::progression_service::{suggest_all, suggest_next_weight};
use std::path::PathBuf;

use super::Context;
use crate::{storage, ui};

#[derive(Args)]
pub struct SuggestCommand {
    /// Training history JSON file (defaults to [data].training_file)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Only this exercise
    #[arg(short, long)]
    exercise: Option<String>,
}

impl SuggestCommand {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let path = self.file.unwrap_or_else(|| ctx.config.data.training_file.clone());
        let history = storage::load_training(&path)?;

        let suggestions = match self.exercise {
            Some(exercise) => {
                let sessions = history
                    .get(&exercise)
                    .with_context(|| format!("No sessions for {:?} in {}", exercise, path.display()))?;
                vec![suggest_next_weight(&exercise, sessions)
                    .with_context(|| format!("No suggestion for {}", exercise))?]
            }
            None => suggest_all(&history),
        };

        ctx.emit(&suggestions, || {
            if suggestions.is_empty() {
                return "No exercise has enough weighted sessions yet\n".to_string();
            }
            suggestions
                .iter()
                .map(ui::render_suggestion)
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}
