use std::fmt;

use bedside_core::models::risk::RiskLevel;
use serde::{Deserialize, Serialize};

/// What a single scale reports for one observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Assessment {
    /// A score with no risk band attached (AVPU).
    Informational { score: f64 },
    /// A score and its risk band.
    Scored { score: f64, risk: RiskLevel },
    /// A positive/negative screen (CAM-ICU).
    Screen { positive: bool },
}

impl Assessment {
    pub fn risk(&self) -> Option<RiskLevel> {
        match self {
            Assessment::Scored { risk, .. } => Some(*risk),
            _ => None,
        }
    }

    /// True when this result alone calls for immediate review.
    pub fn is_alarming(&self) -> bool {
        match self {
            Assessment::Informational { .. } => false,
            Assessment::Scored { risk, .. } => risk.is_high(),
            Assessment::Screen { positive } => *positive,
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assessment::Informational { score } => write!(f, "{score}"),
            Assessment::Scored { score, risk } => write!(f, "{score} ({risk})"),
            Assessment::Screen { positive: true } => f.write_str("positive"),
            Assessment::Screen { positive: false } => f.write_str("negative"),
        }
    }
}
