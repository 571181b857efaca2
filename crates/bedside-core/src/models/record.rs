use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::evaluation::EvaluationResult;
use super::observation::Avpu;
use super::risk::RiskLevel;

/// One row of the persisted evaluation table.
///
/// Field order is the column order of the exported CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationRecord {
    pub id: Uuid,
    pub timestamp: jiff::Timestamp,
    pub avpu: Avpu,
    pub avpu_score: u8,
    pub gcs: u8,
    pub gcs_level: RiskLevel,
    pub braden: u8,
    pub braden_level: RiskLevel,
    pub crt: f64,
    pub crt_level: RiskLevel,
    pub morse: u8,
    pub morse_level: RiskLevel,
    pub qsofa: u8,
    pub qsofa_level: RiskLevel,
    pub vip: u8,
    pub vip_desc: String,
    pub vip_level: RiskLevel,
    pub news: u8,
    pub news_level: RiskLevel,
    pub rass: i8,
    pub rass_level: RiskLevel,
    pub cam_pos: bool,
    pub requires_review: bool,
}

impl EvaluationRecord {
    pub const COLUMNS: [&'static str; 23] = [
        "id",
        "timestamp",
        "avpu",
        "avpu_score",
        "gcs",
        "gcs_level",
        "braden",
        "braden_level",
        "crt",
        "crt_level",
        "morse",
        "morse_level",
        "qsofa",
        "qsofa_level",
        "vip",
        "vip_desc",
        "vip_level",
        "news",
        "news_level",
        "rass",
        "rass_level",
        "cam_pos",
        "requires_review",
    ];
}

impl From<&EvaluationResult> for EvaluationRecord {
    fn from(r: &EvaluationResult) -> Self {
        Self {
            id: r.id,
            timestamp: r.timestamp,
            avpu: r.avpu,
            avpu_score: r.avpu_score,
            gcs: r.gcs.score,
            gcs_level: r.gcs.risk,
            braden: r.braden.score,
            braden_level: r.braden.risk,
            crt: r.crt.score,
            crt_level: r.crt.risk,
            morse: r.morse.score,
            morse_level: r.morse.risk,
            qsofa: r.qsofa.score,
            qsofa_level: r.qsofa.risk,
            vip: r.vip.score,
            vip_desc: r.vip_desc.clone(),
            vip_level: r.vip.risk,
            news: r.news.score,
            news_level: r.news.risk,
            rass: r.rass.score,
            rass_level: r.rass.risk,
            cam_pos: r.cam_icu_positive,
            requires_review: r.requires_review,
        }
    }
}
