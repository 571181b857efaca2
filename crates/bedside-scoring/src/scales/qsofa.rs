use bedside_core::models::observation::{Avpu, Observation};
use bedside_core::models::risk::RiskLevel;

use crate::bands::{Band, BandTable, band};
use crate::{Assessment, Scale};

/// quick SOFA: RR >= 22, SBP <= 100 and altered mentation, one point each.
pub struct Qsofa;

const RESPIRATORY_RATE_BANDS: [Band; 1] = [band(21.0, 0)];
const SYSTOLIC_BP_BANDS: [Band; 1] = [band(100.0, 1)];

/// One point at 22 breaths/min or more.
pub const RESPIRATORY_RATE: BandTable = BandTable::new(&RESPIRATORY_RATE_BANDS, 1);
/// One point at 100 mmHg or less.
pub const SYSTOLIC_BP: BandTable = BandTable::new(&SYSTOLIC_BP_BANDS, 0);

/// Altered mentation is read from AVPU alone, never from GCS or RASS.
pub fn qsofa_total(respiratory_rate: u16, systolic_bp: u16, avpu: Avpu) -> u8 {
    RESPIRATORY_RATE.points(respiratory_rate.into())
        + SYSTOLIC_BP.points(systolic_bp.into())
        + u8::from(!avpu.is_alert())
}

pub fn qsofa_risk(total: u8) -> RiskLevel {
    if total >= 2 {
        RiskLevel::High
    } else {
        RiskLevel::Low
    }
}

impl Scale for Qsofa {
    fn id(&self) -> &str {
        "qsofa"
    }

    fn name(&self) -> &str {
        "qSOFA"
    }

    fn thresholds(&self) -> &str {
        ">=2 high, otherwise low"
    }

    fn assess(&self, observation: &Observation) -> Assessment {
        let total = qsofa_total(
            observation.vitals.respiratory_rate,
            observation.vitals.systolic_bp,
            observation.consciousness.avpu,
        );
        Assessment::Scored {
            score: total.into(),
            risk: qsofa_risk(total),
        }
    }
}
