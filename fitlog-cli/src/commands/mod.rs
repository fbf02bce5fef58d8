mod analyze;
mod compare;
mod config_cmd;
mod day;
mod progress;
mod scans;
mod suggest;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;

pub use analyze::AnalyzeCommand;
pub use compare::CompareCommand;
pub use day::DayCommand;
pub use progress::ProgressCommand;
pub use scans::ScansCommand;
pub use suggest::SuggestCommand;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(about = "Training-log and body-metric analytics", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "FITLOG_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Break a free-text training log into surf and strength work
    Analyze(AnalyzeCommand),

    /// Compare a baseline and current value of one metric
    Compare(CompareCommand),

    /// Show one day of the dashboard with its score
    Day(DayCommand),

    /// Show headline numbers and the baseline/current/target table
    Progress(ProgressCommand),

    /// Compare the first and latest body scans
    Scans(ScansCommand),

    /// Suggest next-session weights from the training history
    Suggest(SuggestCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Settings shared by every command
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
    pub json: bool,
}

impl Context {
    /// Print a view model as pretty JSON, or the rendered text
    pub fn emit<T: Serialize>(&self, value: &T, render: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            print!("{}", render());
        }
        Ok(())
    }

    pub fn decimals(&self) -> usize {
        self.config.display.decimals
    }
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        let config_path = Config::resolve_path(self.config.as_deref())?;
        let config = Config::load_from(&config_path)?;
        if !config.display.color {
            colored::control::set_override(false);
        }

        let ctx = Context {
            config,
            config_path,
            json: self.json,
        };

        match self.command {
            Commands::Analyze(cmd) => cmd.execute(&ctx),
            Commands::Compare(cmd) => cmd.execute(&ctx),
            Commands::Day(cmd) => cmd.execute(&ctx),
            Commands::Progress(cmd) => cmd.execute(&ctx),
            Commands::Scans(cmd) => cmd.execute(&ctx),
            Commands::Suggest(cmd) => cmd.execute(&ctx),
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(&ctx),
                ConfigSubcommands::Init { force } => config_cmd::init_config(&ctx, force),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
