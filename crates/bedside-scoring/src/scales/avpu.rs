use bedside_core::models::observation::Observation;

use crate::{Assessment, Scale};

/// AVPU: Alert, Voice, Pain, Unresponsive. Coded 0–3, no risk band.
pub struct Avpu;

impl Scale for Avpu {
    fn id(&self) -> &str {
        "avpu"
    }

    fn name(&self) -> &str {
        "AVPU"
    }

    fn thresholds(&self) -> &str {
        "informational: A=0, V=1, P=2, U=3"
    }

    fn assess(&self, observation: &Observation) -> Assessment {
        Assessment::Informational {
            score: observation.consciousness.avpu.code().into(),
        }
    }
}
