//! National Early Warning Score.
//!
//! Each parameter is scored independently through its own band table and the
//! points are summed. Consciousness counts 3 when AVPU is anything but Alert;
//! supplemental oxygen counts 2. Maximum 20.

use bedside_core::models::observation::{Avpu, Observation, VitalSigns};
use bedside_core::models::risk::RiskLevel;
use serde::{Deserialize, Serialize};

use crate::bands::{Band, BandTable, band};
use crate::{Assessment, Scale};

pub struct News;

const RESPIRATORY_RATE_BANDS: [Band; 4] = [band(8.0, 3), band(11.0, 1), band(20.0, 0), band(24.0, 2)];
const SPO2_BANDS: [Band; 3] = [band(91.0, 3), band(93.0, 2), band(95.0, 1)];
const TEMPERATURE_BANDS: [Band; 4] = [band(35.0, 3), band(36.0, 1), band(38.0, 0), band(39.0, 1)];
const SYSTOLIC_BP_BANDS: [Band; 4] = [band(90.0, 3), band(100.0, 2), band(110.0, 1), band(219.0, 0)];
const HEART_RATE_BANDS: [Band; 5] = [
    band(40.0, 3),
    band(50.0, 1),
    band(90.0, 0),
    band(110.0, 1),
    band(130.0, 2),
];

pub const RESPIRATORY_RATE: BandTable = BandTable::new(&RESPIRATORY_RATE_BANDS, 3);
pub const SPO2: BandTable = BandTable::new(&SPO2_BANDS, 0);
pub const TEMPERATURE: BandTable = BandTable::new(&TEMPERATURE_BANDS, 2);
/// 220 mmHg and above scores 3 again.
pub const SYSTOLIC_BP: BandTable = BandTable::new(&SYSTOLIC_BP_BANDS, 3);
pub const HEART_RATE: BandTable = BandTable::new(&HEART_RATE_BANDS, 3);

pub const ALTERED_CONSCIOUSNESS_POINTS: u8 = 3;
pub const SUPPLEMENTAL_OXYGEN_POINTS: u8 = 2;

/// Points contributed by each NEWS parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewsBreakdown {
    pub respiratory_rate: u8,
    pub spo2: u8,
    pub temperature: u8,
    pub systolic_bp: u8,
    pub heart_rate: u8,
    pub consciousness: u8,
    pub supplemental_oxygen: u8,
}

impl NewsBreakdown {
    pub fn total(&self) -> u8 {
        self.respiratory_rate
            + self.spo2
            + self.temperature
            + self.systolic_bp
            + self.heart_rate
            + self.consciousness
            + self.supplemental_oxygen
    }
}

pub fn news_breakdown(vitals: &VitalSigns, avpu: Avpu) -> NewsBreakdown {
    NewsBreakdown {
        respiratory_rate: RESPIRATORY_RATE.points(vitals.respiratory_rate.into()),
        spo2: SPO2.points(vitals.spo2.into()),
        temperature: TEMPERATURE.points(vitals.temperature_c),
        systolic_bp: SYSTOLIC_BP.points(vitals.systolic_bp.into()),
        heart_rate: HEART_RATE.points(vitals.heart_rate.into()),
        consciousness: if avpu.is_alert() {
            0
        } else {
            ALTERED_CONSCIOUSNESS_POINTS
        },
        supplemental_oxygen: if vitals.supplemental_oxygen {
            SUPPLEMENTAL_OXYGEN_POINTS
        } else {
            0
        },
    }
}

pub fn news_total(vitals: &VitalSigns, avpu: Avpu) -> u8 {
    news_breakdown(vitals, avpu).total()
}

pub fn news_risk(total: u8) -> RiskLevel {
    match total {
        7.. => RiskLevel::High,
        5..=6 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

impl Scale for News {
    fn id(&self) -> &str {
        "news"
    }

    fn name(&self) -> &str {
        "NEWS"
    }

    fn thresholds(&self) -> &str {
        ">=7 high, 5-6 medium, <5 low"
    }

    fn assess(&self, observation: &Observation) -> Assessment {
        let total = news_total(&observation.vitals, observation.consciousness.avpu);
        Assessment::Scored {
            score: total.into(),
            risk: news_risk(total),
        }
    }
}
