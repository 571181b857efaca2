use bedside_core::models::observation::{MorseFactors, Observation};
use bedside_core::models::risk::RiskLevel;

use crate::{Assessment, Scale};

/// Morse Fall Scale, 0–125.
pub struct Morse;

pub fn morse_total(m: MorseFactors) -> u8 {
    let flag = |set: bool, points: u8| if set { points } else { 0 };
    flag(m.history_of_falling, 25)
        + flag(m.secondary_diagnosis, 15)
        + m.ambulatory_aid.points()
        + flag(m.iv_access, 20)
        + m.gait.points()
        + m.mental_status.points()
}

pub fn morse_risk(total: u8) -> RiskLevel {
    match total {
        45.. => RiskLevel::High,
        25..=44 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

impl Scale for Morse {
    fn id(&self) -> &str {
        "morse"
    }

    fn name(&self) -> &str {
        "Morse Fall Scale"
    }

    fn thresholds(&self) -> &str {
        ">=45 high, 25-44 medium, <25 low"
    }

    fn assess(&self, observation: &Observation) -> Assessment {
        let total = morse_total(observation.fall_risk);
        Assessment::Scored {
            score: total.into(),
            risk: morse_risk(total),
        }
    }
}
