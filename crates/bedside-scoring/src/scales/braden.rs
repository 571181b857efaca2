use bedside_core::models::observation::{BradenFactors, Observation};
use bedside_core::models::risk::RiskLevel;

use crate::{Assessment, Scale};

/// Braden pressure-injury risk. Six sub-factors, total 6–23; lower is worse.
pub struct Braden;

pub fn braden_total(b: BradenFactors) -> u8 {
    [
        b.sensory_perception,
        b.moisture,
        b.activity,
        b.mobility,
        b.nutrition,
        b.friction_shear,
    ]
    .into_iter()
    .fold(0u8, u8::saturating_add)
}

pub fn braden_risk(total: u8) -> RiskLevel {
    match total {
        0..=9 => RiskLevel::High,
        10..=14 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

impl Scale for Braden {
    fn id(&self) -> &str {
        "braden"
    }

    fn name(&self) -> &str {
        "Braden"
    }

    fn thresholds(&self) -> &str {
        "<=9 high, 10-14 medium, >=15 low"
    }

    fn assess(&self, observation: &Observation) -> Assessment {
        let total = braden_total(observation.braden);
        Assessment::Scored {
            score: total.into(),
            risk: braden_risk(total),
        }
    }
}
