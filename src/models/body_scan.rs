use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One body-composition scan (DEXA / bio-impedance)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyScan {
    pub date: NaiveDate,
    pub weight_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub lean_mass_kg: Option<f64>,
    pub skeletal_muscle_mass_kg: Option<f64>,
    pub fat_mass_kg: Option<f64>,
    pub visceral_fat_level: Option<f64>,
    pub visceral_fat_area_cm2: Option<f64>,
    pub android_fat_kg: Option<f64>,
    pub gynoid_fat_kg: Option<f64>,
    pub basal_metabolic_rate_kcal: Option<f64>,
    pub bmi: Option<f64>,
}

/// Progress ring toward a scan target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRing {
    pub label: String,
    pub unit: String,
    pub current: Option<f64>,
    pub target: Option<f64>,
    pub progress_percent: f64,
}

/// Highlight card derived from two scans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub value: String,
    pub label: String,
    pub positive: bool,
}
