use bedside_core::models::observation::{Observation, RassLevel};
use bedside_core::models::risk::RiskLevel;

use crate::{Assessment, Scale};

/// Richmond Agitation-Sedation Scale. Both deep sedation and agitation are high risk.
pub struct Rass;

pub fn rass_risk(level: RassLevel) -> RiskLevel {
    match level.value() {
        ..=-3 => RiskLevel::High,
        -2..=-1 => RiskLevel::Medium,
        0 => RiskLevel::Low,
        _ => RiskLevel::High,
    }
}

impl Scale for Rass {
    fn id(&self) -> &str {
        "rass"
    }

    fn name(&self) -> &str {
        "RASS"
    }

    fn thresholds(&self) -> &str {
        "<=-3 high, -2..-1 medium, 0 low, >=+1 high"
    }

    fn assess(&self, observation: &Observation) -> Assessment {
        Assessment::Scored {
            score: observation.rass.value().into(),
            risk: rass_risk(observation.rass),
        }
    }
}
