//! # storyline-charts
//!
//! Chart type selection for insights. Pure and side-effect free: the
//! selector returns a kind tag plus a parameter record, never a rendering.

pub mod params;
pub mod selector;
pub mod signals;

pub use selector::{select_chart, select_for_insight, ChartInput};
