use bedside_core::models::observation::{CamIcuFeatures, Observation};

use crate::{Assessment, Scale};

/// CAM-ICU delirium screen.
pub struct CamIcu;

/// Positive iff A and B, plus either C or D.
pub fn cam_icu_positive(f: CamIcuFeatures) -> bool {
    f.acute_onset && f.inattention && (f.altered_consciousness || f.disorganized_thinking)
}

impl Scale for CamIcu {
    fn id(&self) -> &str {
        "cam_icu"
    }

    fn name(&self) -> &str {
        "CAM-ICU"
    }

    fn thresholds(&self) -> &str {
        "positive iff A and B and (C or D)"
    }

    fn assess(&self, observation: &Observation) -> Assessment {
        Assessment::Screen {
            positive: cam_icu_positive(observation.delirium),
        }
    }
}
