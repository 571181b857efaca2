use bedside_core::models::evaluation::{EvaluationResult, ScaleScore};
use bedside_core::models::observation::Observation;
use uuid::Uuid;

use crate::scales::braden::{braden_risk, braden_total};
use crate::scales::cam_icu::cam_icu_positive;
use crate::scales::crt::crt_risk;
use crate::scales::gcs::{gcs_risk, gcs_total};
use crate::scales::morse::{morse_risk, morse_total};
use crate::scales::news::{news_risk, news_total};
use crate::scales::qsofa::{qsofa_risk, qsofa_total};
use crate::scales::rass::rass_risk;
use crate::scales::vip::vip_risk;

/// Score every scale for one observation, stamping a fresh ID and the
/// current time.
pub fn evaluate(observation: &Observation) -> EvaluationResult {
    evaluate_at(observation, Uuid::new_v4(), jiff::Timestamp::now())
}

/// Deterministic core of [`evaluate`]: the caller supplies identity and time.
pub fn evaluate_at(
    observation: &Observation,
    id: Uuid,
    timestamp: jiff::Timestamp,
) -> EvaluationResult {
    let consciousness = observation.consciousness;
    let vitals = &observation.vitals;

    let gcs = gcs_total(consciousness.gcs);
    let braden = braden_total(observation.braden);
    let crt = observation.capillary_refill_secs;
    let morse = morse_total(observation.fall_risk);
    let qsofa = qsofa_total(
        vitals.respiratory_rate,
        vitals.systolic_bp,
        consciousness.avpu,
    );
    let news = news_total(vitals, consciousness.avpu);

    let mut result = EvaluationResult {
        id,
        timestamp,
        avpu: consciousness.avpu,
        avpu_score: consciousness.avpu.code(),
        gcs: ScaleScore::new(gcs, gcs_risk(gcs)),
        braden: ScaleScore::new(braden, braden_risk(braden)),
        crt: ScaleScore::new(crt, crt_risk(crt)),
        morse: ScaleScore::new(morse, morse_risk(morse)),
        qsofa: ScaleScore::new(qsofa, qsofa_risk(qsofa)),
        vip: ScaleScore::new(observation.vip.value(), vip_risk(observation.vip)),
        vip_desc: observation.vip.label().to_string(),
        news: ScaleScore::new(news, news_risk(news)),
        rass: ScaleScore::new(observation.rass.value(), rass_risk(observation.rass)),
        cam_icu_positive: cam_icu_positive(observation.delirium),
        requires_review: false,
    };
    result.requires_review = requires_review(&result);

    tracing::debug!(
        evaluation.id = %result.id,
        gcs,
        braden,
        morse,
        qsofa,
        news,
        rass = result.rass.score,
        cam_icu = result.cam_icu_positive,
        requires_review = result.requires_review,
        "observation scored"
    );

    result
}

/// Aggregate alert: any scale at high risk, or a positive delirium screen.
pub fn requires_review(result: &EvaluationResult) -> bool {
    result
        .risk_levels()
        .iter()
        .any(|(_, risk)| risk.is_high())
        || result.cam_icu_positive
}
