use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Audience framing of the prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeMode {
    #[default]
    Executive,
    Analyst,
    Technical,
}

impl NarrativeMode {
    pub const ALL: [NarrativeMode; 3] = [Self::Executive, Self::Analyst, Self::Technical];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Executive => "executive",
            Self::Analyst => "analyst",
            Self::Technical => "technical",
        }
    }
}

impl fmt::Display for NarrativeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NarrativeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "executive" | "exec" => Ok(Self::Executive),
            "analyst" => Ok(Self::Analyst),
            "technical" | "tech" => Ok(Self::Technical),
            other => Err(ConfigError::InvalidValue {
                field: "narrative_mode".to_string(),
                message: format!("unknown narrative mode '{other}'"),
            }),
        }
    }
}
