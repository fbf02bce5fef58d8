//! Day-log records as served by the dashboard API, and their normalised form.
//!
//! Two generations of the log format are in circulation. Old days store
//! supplements as bare booleans and training as a single string; newer days
//! store `{taken, dose}` objects and a structured `{summary, workout}` block.
//! Both are decoded here, once, into [`DayLog`], so nothing downstream has to
//! branch on shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{FitlogError, Result};
use crate::services::numeric::{first_present, parse_optional, parse_or_zero};

// ---------------------------------------------------------------------------
// Raw records
// ---------------------------------------------------------------------------

/// Supplement entry in either format generation
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SupplementRecord {
    /// `"omega3": true`
    Flag(bool),
    /// `"omega3": {"taken": true, "dose": "2 g"}`
    Detailed {
        #[serde(default)]
        taken: Value,
        #[serde(default)]
        dose: Option<Value>,
    },
    Other(Value),
}

/// Training field in either format generation
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TrainingRecord {
    Text(String),
    Structured {
        #[serde(default)]
        summary: Option<String>,
        #[serde(default)]
        workout: Vec<Value>,
    },
    Other(Value),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NutritionRecord {
    pub protein: Option<Value>,
    pub carbs: Option<Value>,
    pub fat: Option<Value>,
    pub kcal: Option<Value>,
    #[serde(rename = "seafoodKg")]
    pub seafood_kg_camel: Option<Value>,
    pub seafood_kg: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabsRecord {
    pub alt: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayLogRecord {
    pub date: Option<Value>,
    pub day: Option<Value>,
    pub training: Option<TrainingRecord>,
    #[serde(rename = "fastedWeight")]
    pub fasted_weight_camel: Option<Value>,
    pub fasted_weight: Option<Value>,
    #[serde(rename = "bodyFat")]
    pub body_fat_camel: Option<Value>,
    pub body_fat: Option<Value>,
    #[serde(rename = "androidFat")]
    pub android_fat_camel: Option<Value>,
    pub android_fat: Option<Value>,
    pub alt: Option<Value>,
    pub labs: Option<LabsRecord>,
    pub total: Option<NutritionRecord>,
    #[serde(flatten)]
    pub nutrition: NutritionRecord,
    pub supplements: Option<BTreeMap<String, SupplementRecord>>,
    pub feeling: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BaselineRecord {
    pub date: Option<Value>,
    pub weight: Option<Value>,
    #[serde(rename = "weightKg")]
    pub weight_kg_camel: Option<Value>,
    #[serde(rename = "bodyFat")]
    pub body_fat: Option<Value>,
    #[serde(rename = "androidFat")]
    pub android_fat: Option<Value>,
    #[serde(rename = "leanMass")]
    pub lean_mass: Option<Value>,
    pub alt: Option<Value>,
    pub bloods: Option<LabsRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetsRecord {
    pub weight: Option<Value>,
    #[serde(rename = "bodyFat")]
    pub body_fat: Option<Value>,
    #[serde(rename = "androidFat")]
    pub android_fat: Option<Value>,
    pub alt: Option<Value>,
}

/// Payload of the dashboard data endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardRecord {
    pub baseline: Option<BaselineRecord>,
    pub targets: Option<TargetsRecord>,
    #[serde(default, alias = "dailyLogs")]
    pub daily_logs: Vec<DayLogRecord>,
    pub streak: Option<Value>,
}

// ---------------------------------------------------------------------------
// Normalised model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub kcal: f64,
    pub seafood_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplement {
    pub key: String,
    pub label: String,
    pub taken: bool,
    pub dose: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLog {
    pub date: Option<NaiveDate>,
    pub day: Option<u32>,
    pub training_text: String,
    pub fasted_weight_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub android_fat_percent: Option<f64>,
    pub alt: Option<f64>,
    pub totals: DailyTotals,
    pub supplements: Vec<Supplement>,
    pub feeling: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub date: Option<NaiveDate>,
    pub weight_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub android_fat_percent: Option<f64>,
    pub lean_mass_kg: Option<f64>,
    pub alt: Option<f64>,
}

/// Target texts as written on the dashboard ("82-85 kg")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Targets {
    pub weight: Option<String>,
    pub body_fat: Option<String>,
    pub android_fat: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub baseline: Baseline,
    pub targets: Targets,
    pub daily_logs: Vec<DayLog>,
    pub streak: u32,
}

impl DashboardData {
    /// Decode and normalise a dashboard payload
    pub fn from_json(json: &str) -> Result<Self> {
        let record: DashboardRecord = serde_json::from_str(json)?;
        Self::try_from(record)
    }

    /// Most recent day, i.e. the last one in log order
    pub fn latest_log(&self) -> Option<&DayLog> {
        self.daily_logs.last()
    }

    pub fn log_for_date(&self, date: NaiveDate) -> Option<&DayLog> {
        self.daily_logs.iter().find(|log| log.date == Some(date))
    }

    /// Date progress is measured from: the baseline's own date, else the first log
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.baseline
            .date
            .or_else(|| self.daily_logs.iter().find_map(|log| log.date))
    }
}

impl TryFrom<DashboardRecord> for DashboardData {
    type Error = FitlogError;

    fn try_from(record: DashboardRecord) -> Result<Self> {
        let baseline = match record.baseline {
            Some(baseline) => Baseline::try_from(baseline)?,
            None => Baseline::default(),
        };
        let targets = record.targets.map(Targets::from).unwrap_or_default();
        let daily_logs = record
            .daily_logs
            .into_iter()
            .map(DayLog::try_from)
            .collect::<Result<Vec<_>>>()?;
        let streak = record
            .streak
            .as_ref()
            .and_then(parse_optional)
            .filter(|streak| *streak > 0.0)
            .map(|streak| streak as u32)
            .unwrap_or(0);

        Ok(Self {
            baseline,
            targets,
            daily_logs,
            streak,
        })
    }
}

impl DayLog {
    pub fn from_json(json: &str) -> Result<Self> {
        let record: DayLogRecord = serde_json::from_str(json)?;
        Self::try_from(record)
    }

    pub fn has_training(&self) -> bool {
        !self.training_text.trim().is_empty()
    }

    /// Every supplement taken; vacuously true when none are tracked
    pub fn all_supplements_taken(&self) -> bool {
        self.supplements.iter().all(|supplement| supplement.taken)
    }
}

impl TryFrom<DayLogRecord> for DayLog {
    type Error = FitlogError;

    fn try_from(record: DayLogRecord) -> Result<Self> {
        let total = record.total.unwrap_or_default();
        let flat = &record.nutrition;

        let totals = DailyTotals {
            protein: number_or_zero(&[total.protein.as_ref(), flat.protein.as_ref()]),
            carbs: number_or_zero(&[total.carbs.as_ref(), flat.carbs.as_ref()]),
            fat: number_or_zero(&[total.fat.as_ref(), flat.fat.as_ref()]),
            kcal: number_or_zero(&[total.kcal.as_ref(), flat.kcal.as_ref()]),
            seafood_kg: number_or_zero(&[
                total.seafood_kg_camel.as_ref(),
                total.seafood_kg.as_ref(),
                flat.seafood_kg_camel.as_ref(),
                flat.seafood_kg.as_ref(),
            ]),
        };

        let supplements = record
            .supplements
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| Supplement::from_record(key, value))
            .collect();

        Ok(Self {
            date: parse_date(record.date.as_ref())?,
            day: record
                .day
                .as_ref()
                .and_then(parse_optional)
                .filter(|day| *day >= 0.0)
                .map(|day| day as u32),
            training_text: record
                .training
                .map(|training| training.into_text())
                .unwrap_or_default(),
            fasted_weight_kg: number(&[
                record.fasted_weight_camel.as_ref(),
                record.fasted_weight.as_ref(),
            ]),
            body_fat_percent: number(&[record.body_fat_camel.as_ref(), record.body_fat.as_ref()]),
            android_fat_percent: number(&[
                record.android_fat_camel.as_ref(),
                record.android_fat.as_ref(),
            ]),
            alt: number(&[
                record.alt.as_ref(),
                record.labs.as_ref().and_then(|labs| labs.alt.as_ref()),
            ]),
            totals,
            supplements,
            feeling: record.feeling.as_ref().and_then(parse_optional),
        })
    }
}

impl TryFrom<BaselineRecord> for Baseline {
    type Error = FitlogError;

    fn try_from(record: BaselineRecord) -> Result<Self> {
        Ok(Self {
            date: parse_date(record.date.as_ref())?,
            weight_kg: number(&[record.weight.as_ref(), record.weight_kg_camel.as_ref()]),
            body_fat_percent: number(&[record.body_fat.as_ref()]),
            android_fat_percent: number(&[record.android_fat.as_ref()]),
            lean_mass_kg: number(&[record.lean_mass.as_ref()]),
            alt: number(&[
                record.bloods.as_ref().and_then(|bloods| bloods.alt.as_ref()),
                record.alt.as_ref(),
            ]),
        })
    }
}

impl From<TargetsRecord> for Targets {
    fn from(record: TargetsRecord) -> Self {
        Self {
            weight: record.weight.as_ref().and_then(value_text),
            body_fat: record.body_fat.as_ref().and_then(value_text),
            android_fat: record.android_fat.as_ref().and_then(value_text),
            alt: record.alt.as_ref().and_then(value_text),
        }
    }
}

impl TrainingRecord {
    /// Free text fed to the training analyzer
    pub fn into_text(self) -> String {
        match self {
            TrainingRecord::Text(text) => text,
            TrainingRecord::Structured { summary, workout } => match summary {
                Some(summary) if !summary.trim().is_empty() => summary,
                _ => workout
                    .iter()
                    .filter_map(|exercise| {
                        exercise
                            .get("name")
                            .or_else(|| exercise.get("exercise"))
                            .and_then(Value::as_str)
                    })
                    .collect::<Vec<_>>()
                    .join(" + "),
            },
            TrainingRecord::Other(_) => String::new(),
        }
    }
}

impl Supplement {
    fn from_record(key: String, record: SupplementRecord) -> Self {
        let (taken, dose) = match record {
            SupplementRecord::Flag(taken) => (taken, None),
            SupplementRecord::Detailed { taken, dose } => {
                (is_truthy(&taken), dose.as_ref().and_then(value_text))
            }
            SupplementRecord::Other(value) => (is_truthy(&value), None),
        };

        Self {
            label: supplement_label(&key),
            key,
            taken,
            dose,
        }
    }
}

/// Display name of a known supplement key, the key itself otherwise
pub fn supplement_label(key: &str) -> String {
    match key {
        "omega3" => "Omega-3",
        "nac" => "NAC",
        "d3k2" => "D3 + K2",
        "zmb" => "ZMB Pro",
        "whey" => "Whey",
        "creatine" => "Creatine",
        other => other,
    }
    .to_string()
}

fn number(candidates: &[Option<&Value>]) -> Option<f64> {
    first_present(candidates).and_then(parse_optional)
}

fn number_or_zero(candidates: &[Option<&Value>]) -> f64 {
    first_present(candidates).map(parse_or_zero).unwrap_or(0.0)
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(false),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Accepts "2025-11-21" and timestamps starting with a date
pub fn parse_date(value: Option<&Value>) -> Result<Option<NaiveDate>> {
    let text = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(text)) if text.trim().is_empty() => return Ok(None),
        Some(Value::String(text)) => text.trim(),
        Some(other) => return Err(FitlogError::InvalidDate(other.to_string())),
    };

    let date_part = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FitlogError::InvalidDate(text.to_string()))
}
