use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::sex::Sex;
use super::site::{Breadth, Girth, Length, SkinfoldSite};

/// Canonical patient-measurement snapshot.
///
/// Every number is already in engine units (skinfolds mm, lengths cm,
/// mass kg, age years). An absent key or `None` means "not measured"; zero
/// is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnthropometricRecord {
    pub sex: Sex,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<f64>,
    #[serde(default)]
    pub skinfolds: BTreeMap<SkinfoldSite, f64>,
    #[serde(default)]
    pub girths: BTreeMap<Girth, f64>,
    #[serde(default)]
    pub breadths: BTreeMap<Breadth, f64>,
    #[serde(default)]
    pub lengths: BTreeMap<Length, f64>,
    pub head_circumference_cm: Option<f64>,
}

impl AnthropometricRecord {
    pub fn new(sex: Sex) -> Self {
        Self {
            sex,
            weight_kg: None,
            height_cm: None,
            age_years: None,
            skinfolds: BTreeMap::new(),
            girths: BTreeMap::new(),
            breadths: BTreeMap::new(),
            lengths: BTreeMap::new(),
            head_circumference_cm: None,
        }
    }

    pub fn with_weight(mut self, kg: f64) -> Self {
        self.weight_kg = Some(kg);
        self
    }

    pub fn with_height(mut self, cm: f64) -> Self {
        self.height_cm = Some(cm);
        self
    }

    pub fn with_age(mut self, years: f64) -> Self {
        self.age_years = Some(years);
        self
    }

    pub fn with_skinfold(mut self, site: SkinfoldSite, mm: f64) -> Self {
        self.skinfolds.insert(site, mm);
        self
    }

    pub fn with_girth(mut self, girth: Girth, cm: f64) -> Self {
        self.girths.insert(girth, cm);
        self
    }

    pub fn with_breadth(mut self, breadth: Breadth, cm: f64) -> Self {
        self.breadths.insert(breadth, cm);
        self
    }

    pub fn with_length(mut self, length: Length, cm: f64) -> Self {
        self.lengths.insert(length, cm);
        self
    }

    pub fn with_head_circumference(mut self, cm: f64) -> Self {
        self.head_circumference_cm = Some(cm);
        self
    }

    pub fn skinfold(&self, site: SkinfoldSite) -> Option<f64> {
        self.skinfolds.get(&site).copied()
    }

    pub fn girth(&self, girth: Girth) -> Option<f64> {
        self.girths.get(&girth).copied()
    }

    pub fn breadth(&self, breadth: Breadth) -> Option<f64> {
        self.breadths.get(&breadth).copied()
    }

    pub fn length(&self, length: Length) -> Option<f64> {
        self.lengths.get(&length).copied()
    }

    /// Skinfold sites from `sites` that have no value, in the given order.
    pub fn missing_skinfolds(&self, sites: &[SkinfoldSite]) -> Vec<SkinfoldSite> {
        sites
            .iter()
            .copied()
            .filter(|site| !self.skinfolds.contains_key(site))
            .collect()
    }

    /// Body mass index (kg/m²), when both weight and height are present.
    pub fn bmi(&self) -> Option<f64> {
        let weight = self.weight_kg?;
        let height_m = self.height_cm? / 100.0;
        Some(weight / (height_m * height_m))
    }
}
