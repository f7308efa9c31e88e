//! # storyline-extraction
//!
//! First stages of the narrative pipeline: adapt upstream records into
//! `Insight`s, pick the dominant thesis frame, and mine ranked KPIs from
//! insight text.

pub mod adapter;
pub mod kpi;
pub mod numbers;
pub mod thesis;

pub use adapter::{adapt_insights, AdaptedInsights};
pub use kpi::{extract_kpis, extract_kpis_with_report};
pub use thesis::{extract_thesis, KeywordParadoxDetector};
