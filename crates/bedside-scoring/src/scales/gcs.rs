use bedside_core::models::observation::{GcsComponents, Observation};
use bedside_core::models::risk::RiskLevel;

use crate::{Assessment, Scale};

/// Glasgow Coma Scale: eye (1–4) + verbal (1–5) + motor (1–6), total 3–15.
pub struct Gcs;

pub fn gcs_total(gcs: GcsComponents) -> u8 {
    gcs.eye.saturating_add(gcs.verbal).saturating_add(gcs.motor)
}

pub fn gcs_risk(total: u8) -> RiskLevel {
    match total {
        0..=8 => RiskLevel::High,
        9..=12 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

impl Scale for Gcs {
    fn id(&self) -> &str {
        "gcs"
    }

    fn name(&self) -> &str {
        "GCS"
    }

    fn thresholds(&self) -> &str {
        "<=8 high, 9-12 medium, >=13 low"
    }

    fn assess(&self, observation: &Observation) -> Assessment {
        let total = gcs_total(observation.consciousness.gcs);
        Assessment::Scored {
            score: total.into(),
            risk: gcs_risk(total),
        }
    }
}
