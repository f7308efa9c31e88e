// Single source of truth for all default values.

// --- Adapter ---
pub const DEFAULT_CONFIDENCE: f64 = 0.7;

// --- Thesis ---
pub const DEFAULT_PARADOX_MIN_VALUE: f64 = 30.0;
pub const DEFAULT_THEME_DOMINANCE: f64 = 0.40;
pub const DEFAULT_SURPRISE_CONFIDENCE: f64 = 0.85;
pub const DEFAULT_MIN_FRAME_CORPUS: usize = 2;
pub const DEFAULT_THESIS_CONFIDENCE_CAP: f64 = 0.95;
pub const DEFAULT_FALLBACK_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_MAX_SUPPORTING_INSIGHTS: usize = 3;

// --- KPI ---
pub const DEFAULT_GLOBAL_KPI_LIMIT: usize = 5;
pub const DEFAULT_SECTION_KPI_LIMIT: usize = 3;
pub const DEFAULT_MAGNITUDE_MIN_DIGITS: usize = 4;

// --- Grouping ---
pub const DEFAULT_SMALL_CORPUS_SIZE: usize = 5;
pub const DEFAULT_SMALL_CORPUS_MIN_OCCURRENCES: usize = 1;
pub const DEFAULT_MIN_OCCURRENCES: usize = 2;
pub const DEFAULT_MIN_CONCEPT_LEN: usize = 4;
pub const DEFAULT_MAX_SECTIONS: usize = 5;
pub const DEFAULT_MAX_TITLE_WORDS: usize = 3;

// --- Charts ---
pub const DEFAULT_PIE_MIN_CATEGORIES: usize = 2;
pub const DEFAULT_PIE_MAX_CATEGORIES: usize = 4;
pub const DEFAULT_HORIZONTAL_CATEGORY_LIMIT: usize = 8;
pub const DEFAULT_HORIZONTAL_LABEL_LEN: usize = 15;

// --- Narrative ---
pub const DEFAULT_MAX_KEY_FINDINGS: usize = 5;
pub const DEFAULT_QUOTED_KPIS: usize = 2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
