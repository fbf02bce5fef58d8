use anyhow::Result;
use clap::Args;
use fitlog::services::TrainingTextAnalyzer;

use super::Context;
use crate::ui;

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Training log text (e.g., "Surf 1.5hr + Chest Press 80kg 4x10")
    text: String,
}

impl AnalyzeCommand {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let analysis = TrainingTextAnalyzer::new().analyze(&self.text);
        tracing::debug!(
            "Parsed {} workouts, surf: {}",
            analysis.workouts.len(),
            analysis.surfing.is_some()
        );

        ctx.emit(&analysis, || ui::render_analysis(&analysis))
    }
}
