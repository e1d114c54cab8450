//! kinanthro-growth
//!
//! Pediatric growth z-scores against the WHO Child Growth Standards (2006)
//! with the LMS method, severity banding, and chronological or
//! prematurity-corrected age from calendar dates.

pub mod age;
pub mod child;
pub mod error;
pub mod indicator;
pub mod tables;
pub mod zscore;

pub use child::{assess_child, Child, ChildMeasurements, GrowthReport};
pub use indicator::{Indicator, Posture};
pub use zscore::{calculate_z_score, calculate_z_score_with_posture, GrowthAssessment, Severity};
