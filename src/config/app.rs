use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::error::{FitlogError, Result};

/// Daily goals and fallbacks used by the dashboard services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default = "default_protein_goal")]
    pub protein_goal_g: f64,

    #[serde(default = "default_seafood_goal")]
    pub seafood_goal_kg: f64,

    #[serde(default = "default_feeling_goal")]
    pub feeling_goal: f64,

    #[serde(default = "default_streak_goal")]
    pub streak_goal_days: u32,

    #[serde(default = "default_baseline_weight")]
    pub default_baseline_weight_kg: f64,

    #[serde(default = "default_seafood_total_goal")]
    pub seafood_total_goal_kg: f64,
}

fn default_protein_goal() -> f64 {
    350.0
}

fn default_seafood_goal() -> f64 {
    1.0
}

fn default_feeling_goal() -> f64 {
    8.0
}

fn default_streak_goal() -> u32 {
    30
}

fn default_baseline_weight() -> f64 {
    90.0
}

fn default_seafood_total_goal() -> f64 {
    10.0
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            protein_goal_g: default_protein_goal(),
            seafood_goal_kg: default_seafood_goal(),
            feeling_goal: default_feeling_goal(),
            streak_goal_days: default_streak_goal(),
            default_baseline_weight_kg: default_baseline_weight(),
            seafood_total_goal_kg: default_seafood_total_goal(),
        }
    }
}

impl AnalyticsConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().overlay(lookup)
    }

    /// Environment variables take precedence over the values already set
    pub fn with_env_overrides(self) -> Result<Self> {
        self.overlay(|key| env::var(key).ok())
    }

    fn overlay<F>(self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            protein_goal_g: read(&lookup, "FITLOG_PROTEIN_GOAL_G", self.protein_goal_g)?,
            seafood_goal_kg: read(&lookup, "FITLOG_SEAFOOD_GOAL_KG", self.seafood_goal_kg)?,
            feeling_goal: read(&lookup, "FITLOG_FEELING_GOAL", self.feeling_goal)?,
            streak_goal_days: read(&lookup, "FITLOG_STREAK_GOAL_DAYS", self.streak_goal_days)?,
            default_baseline_weight_kg: read(
                &lookup,
                "FITLOG_BASELINE_WEIGHT_KG",
                self.default_baseline_weight_kg,
            )?,
            seafood_total_goal_kg: read(
                &lookup,
                "FITLOG_SEAFOOD_TOTAL_GOAL_KG",
                self.seafood_total_goal_kg,
            )?,
        })
    }
}

fn read<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| FitlogError::InvalidConfig(format!("{}={:?} is not a valid number", key, raw))),
        _ => Ok(default),
    }
}
