use bedside_core::models::observation::{Observation, VipGrade};
use bedside_core::models::risk::RiskLevel;

use crate::{Assessment, Scale};

/// Visual Infusion Phlebitis score.
pub struct Vip;

pub fn vip_risk(grade: VipGrade) -> RiskLevel {
    match grade.value() {
        0..=1 => RiskLevel::Low,
        2..=3 => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}

impl Scale for Vip {
    fn id(&self) -> &str {
        "vip"
    }

    fn name(&self) -> &str {
        "VIP"
    }

    fn thresholds(&self) -> &str {
        "0-1 low, 2-3 medium, 4-5 high"
    }

    fn assess(&self, observation: &Observation) -> Assessment {
        Assessment::Scored {
            score: observation.vip.value().into(),
            risk: vip_risk(observation.vip),
        }
    }
}
