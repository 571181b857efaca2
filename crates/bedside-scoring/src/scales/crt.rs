use bedside_core::models::observation::Observation;
use bedside_core::models::risk::RiskLevel;

use crate::{Assessment, Scale};

/// Capillary refill time in seconds.
pub struct Crt;

/// Refill slower than this many seconds is high risk.
pub const CRT_LIMIT_SECS: f64 = 3.0;

pub fn crt_risk(seconds: f64) -> RiskLevel {
    if seconds > CRT_LIMIT_SECS {
        RiskLevel::High
    } else {
        RiskLevel::Low
    }
}

impl Scale for Crt {
    fn id(&self) -> &str {
        "crt"
    }

    fn name(&self) -> &str {
        "CRT"
    }

    fn thresholds(&self) -> &str {
        ">3.0 s high, otherwise low"
    }

    fn assess(&self, observation: &Observation) -> Assessment {
        let seconds = observation.capillary_refill_secs;
        Assessment::Scored {
            score: seconds,
            risk: crt_risk(seconds),
        }
    }
}
