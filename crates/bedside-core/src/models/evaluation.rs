use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::observation::Avpu;
use super::risk::RiskLevel;

/// A scale's numeric result together with its risk band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleScore<T> {
    pub score: T,
    pub risk: RiskLevel,
}

impl<T> ScaleScore<T> {
    pub fn new(score: T, risk: RiskLevel) -> Self {
        Self { score, risk }
    }
}

/// Everything derived from one observation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationResult {
    pub id: Uuid,
    pub timestamp: jiff::Timestamp,
    pub avpu: Avpu,
    pub avpu_score: u8,
    pub gcs: ScaleScore<u8>,
    pub braden: ScaleScore<u8>,
    /// Capillary refill time in seconds.
    pub crt: ScaleScore<f64>,
    pub morse: ScaleScore<u8>,
    pub qsofa: ScaleScore<u8>,
    pub vip: ScaleScore<u8>,
    pub vip_desc: String,
    pub news: ScaleScore<u8>,
    pub rass: ScaleScore<i8>,
    pub cam_icu_positive: bool,
    /// Set when any scale is high risk or the delirium screen is positive.
    pub requires_review: bool,
}

impl EvaluationResult {
    /// Risk band of every scored scale, in display order.
    pub fn risk_levels(&self) -> [(&'static str, RiskLevel); 8] {
        [
            ("GCS", self.gcs.risk),
            ("Braden", self.braden.risk),
            ("CRT", self.crt.risk),
            ("Morse", self.morse.risk),
            ("qSOFA", self.qsofa.risk),
            ("VIP", self.vip.risk),
            ("NEWS", self.news.risk),
            ("RASS", self.rass.risk),
        ]
    }

    /// Names of the scales flagged for immediate review.
    pub fn flagged_scales(&self) -> Vec<&'static str> {
        let mut flagged: Vec<&'static str> = self
            .risk_levels()
            .into_iter()
            .filter(|(_, risk)| risk.is_high())
            .map(|(name, _)| name)
            .collect();
        if self.cam_icu_positive {
            flagged.push("CAM-ICU");
        }
        flagged
    }

    /// Compare scores and risk bands, ignoring the generated id and timestamp.
    pub fn same_scores(&self, other: &EvaluationResult) -> bool {
        let strip = |r: &EvaluationResult| EvaluationResult {
            id: Uuid::nil(),
            timestamp: jiff::Timestamp::UNIX_EPOCH,
            ..r.clone()
        };
        strip(self) == strip(other)
    }
}
