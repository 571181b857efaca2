//! bedside-scoring
//!
//! The scoring engine. Every scale is a pure, total function of its own
//! slice of an [`Observation`]; nothing here performs I/O or keeps state
//! between calls, so evaluations may run concurrently without coordination.

pub mod assessment;
pub mod bands;
pub mod engine;
pub mod error;
pub mod scales;

use bedside_core::models::observation::Observation;

pub use assessment::Assessment;
pub use engine::{evaluate, evaluate_at, requires_review};
use error::ScoringError;

/// Trait implemented by each bedside scale.
pub trait Scale: Send + Sync {
    /// Unique identifier for this scale (e.g., "gcs", "news").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "GCS", "NEWS").
    fn name(&self) -> &str;

    /// One-line summary of how the score maps to risk.
    fn thresholds(&self) -> &str;

    /// Score the observation on this scale.
    fn assess(&self, observation: &Observation) -> Assessment;
}

/// Return all registered scales, in display order.
pub fn all_scales() -> Vec<Box<dyn Scale>> {
    vec![
        Box::new(scales::avpu::Avpu),
        Box::new(scales::gcs::Gcs),
        Box::new(scales::braden::Braden),
        Box::new(scales::crt::Crt),
        Box::new(scales::morse::Morse),
        Box::new(scales::qsofa::Qsofa),
        Box::new(scales::vip::Vip),
        Box::new(scales::news::News),
        Box::new(scales::rass::Rass),
        Box::new(scales::cam_icu::CamIcu),
    ]
}

/// Look up a scale by ID.
pub fn get_scale(id: &str) -> Option<Box<dyn Scale>> {
    all_scales().into_iter().find(|s| s.id() == id)
}

/// Like [`get_scale`], but an unknown ID is an error.
pub fn require_scale(id: &str) -> Result<Box<dyn Scale>, ScoringError> {
    get_scale(id).ok_or_else(|| ScoringError::UnknownScale(id.to_string()))
}
