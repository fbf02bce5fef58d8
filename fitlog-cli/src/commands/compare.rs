use anyhow::{bail, Result};
use clap::Args;
use fitlog::models::{ImprovementDirection, MetricSnapshot};
use fitlog::services::{parse_target, MetricComparator};

use super::Context;
use crate::ui;

#[derive(Args)]
pub struct CompareCommand {
    /// Starting value
    #[arg(long, allow_negative_numbers = true)]
    baseline: f64,

    /// Latest value
    #[arg(long, allow_negative_numbers = true)]
    current: f64,

    /// Target, a number or a range such as "82-85"
    #[arg(long)]
    target: Option<String>,

    /// Which way counts as progress (up or down)
    #[arg(long, default_value = "down")]
    direction: ImprovementDirection,

    /// Days between the two measurements
    #[arg(long, default_value = "0")]
    days: i64,

    /// Metric name
    #[arg(long, default_value = "Metric")]
    label: String,

    /// Unit shown next to values
    #[arg(long, default_value = "")]
    unit: String,
}

impl CompareCommand {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let target = match self.target.as_deref() {
            Some(text) => match parse_target(text) {
                Some(target) => Some(target),
                None => bail!("Could not read a target from {:?}", text),
            },
            None => None,
        };

        let snapshot = MetricSnapshot::new(self.label, self.direction)
            .with_values(Some(self.baseline), Some(self.current))
            .with_target_spec(target.as_ref())
            .with_unit(self.unit);
        let result = MetricComparator::new().compare(&snapshot, self.days);

        ctx.emit(&result, || ui::render_comparison(&result, ctx.decimals()))
    }
}
