use anyhow::Result;
use clap::Args;
use fitlog::models::{Headline, ProgressRow};
use fitlog::services::DashboardService;
use serde::Serialize;
use std::path::PathBuf;

use super::Context;
use crate::{storage, ui};

#[derive(Args)]
pub struct ProgressCommand {
    /// Dashboard JSON file (defaults to [data].dashboard_file)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Serialize)]
struct ProgressView {
    headline: Headline,
    rows: Vec<ProgressRow>,
}

impl ProgressCommand {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let path = self.file.unwrap_or_else(|| ctx.config.data.dashboard_file.clone());
        let data = storage::load_dashboard(&path)?;

        let service = DashboardService::new(ctx.config.goals.clone());
        let view = ProgressView {
            headline: service.headline(&data),
            rows: service.progress_table(&data),
        };

        ctx.emit(&view, || {
            ui::render_progress(&view.headline, &view.rows, ctx.decimals())
        })
    }
}
