use anyhow::{Context as _, Result};
use clap::Args;
use fitlog::models::{Achievement, ComparisonResult, ProgressRing};
use fitlog::services::BodyScanService;
use serde::Serialize;
use std::path::PathBuf;

use super::Context;
use crate::{storage, ui};

#[derive(Args)]
pub struct ScansCommand {
    /// Body scan JSON file (defaults to [data].scans_file)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Serialize)]
struct ScansView {
    comparisons: Vec<ComparisonResult>,
    rings: Vec<ProgressRing>,
    achievements: Vec<Achievement>,
}

impl ScansCommand {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let path = self.file.unwrap_or_else(|| ctx.config.data.scans_file.clone());
        let scans = storage::load_scans(&path)?;

        let (baseline, latest) = BodyScanService::baseline_and_latest(&scans)
            .with_context(|| format!("Need at least 2 scans in {}", path.display()))?;

        let service = BodyScanService::new();
        let view = ScansView {
            comparisons: service.compare_scans(baseline, latest),
            rings: service.progress_rings(baseline, latest),
            achievements: service.achievements(baseline, latest),
        };

        ctx.emit(&view, || {
            ui::render_scans(&view.comparisons, &view.rings, &view.achievements, ctx.decimals())
        })
    }
}
