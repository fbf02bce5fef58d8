use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::Args;
use fitlog::services::DashboardService;
use std::path::PathBuf;

use super::Context;
use crate::{storage, ui};

#[derive(Args)]
pub struct DayCommand {
    /// Dashboard JSON file (defaults to [data].dashboard_file)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Day to show (YYYY-MM-DD); the latest log when omitted
    #[arg(short, long)]
    date: Option<NaiveDate>,
}

impl DayCommand {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let path = self.file.unwrap_or_else(|| ctx.config.data.dashboard_file.clone());
        let data = storage::load_dashboard(&path)?;

        let log = match self.date {
            Some(date) => data
                .log_for_date(date)
                .with_context(|| format!("No log for {} in {}", date, path.display()))?,
            None => data
                .latest_log()
                .with_context(|| format!("No daily logs in {}", path.display()))?,
        };

        let service = DashboardService::new(ctx.config.goals.clone());
        let summary = service.summarize_day(log);

        ctx.emit(&summary, || ui::render_day(&summary, ctx.decimals()))
    }
}
