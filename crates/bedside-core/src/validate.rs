//! Boundary validation: turn a loosely typed input form into an
//! [`Observation`], or report every field that is missing, out of range or
//! unrecognized.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::observation::{
    AmbulatoryAid, Avpu, BradenFactors, CamIcuFeatures, Choice, Consciousness, Gait,
    GcsComponents, MentalStatus, MorseFactors, Observation, RassLevel, VipGrade, VitalSigns,
};
use crate::ranges::{self, FieldRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldErrorKind {
    Missing,
    OutOfRange,
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

/// Every problem found in one form, in field order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// RASS may be entered as its signed value or by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RassEntry {
    Value(i64),
    Name(String),
}

/// Raw bedside input as entered on the form.
///
/// Numeric and categorical fields are required. Checkbox fields default to
/// unchecked, except `cam_altered_consciousness`, which is derived from
/// AVPU and RASS when left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ObservationForm {
    pub avpu: Option<String>,
    pub gcs_eye: Option<i64>,
    pub gcs_verbal: Option<i64>,
    pub gcs_motor: Option<i64>,

    pub braden_sensory: Option<i64>,
    pub braden_moisture: Option<i64>,
    pub braden_activity: Option<i64>,
    pub braden_mobility: Option<i64>,
    pub braden_nutrition: Option<i64>,
    pub braden_friction_shear: Option<i64>,

    pub crt_seconds: Option<f64>,

    pub morse_history_of_falling: bool,
    pub morse_secondary_diagnosis: bool,
    pub morse_ambulatory_aid: Option<String>,
    pub morse_iv_access: bool,
    pub morse_gait: Option<String>,
    pub morse_mental_status: Option<String>,

    pub respiratory_rate: Option<i64>,
    pub systolic_bp: Option<i64>,
    pub temperature_c: Option<f64>,
    pub heart_rate: Option<i64>,
    pub spo2: Option<i64>,
    pub supplemental_oxygen: bool,

    pub vip: Option<i64>,
    pub rass: Option<RassEntry>,

    pub cam_acute_onset: bool,
    pub cam_inattention: bool,
    pub cam_altered_consciousness: Option<bool>,
    pub cam_disorganized_thinking: bool,
}

impl ObservationForm {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every field, collecting all errors before giving up.
    pub fn validate(&self) -> Result<Observation, ValidationErrors> {
        let mut v = Validator::default();

        let avpu = v.choice::<Avpu>("avpu", self.avpu.as_deref());
        let eye = v.whole("gcs_eye", self.gcs_eye, ranges::GCS_EYE);
        let verbal = v.whole("gcs_verbal", self.gcs_verbal, ranges::GCS_VERBAL);
        let motor = v.whole("gcs_motor", self.gcs_motor, ranges::GCS_MOTOR);

        let sensory = v.whole("braden_sensory", self.braden_sensory, ranges::BRADEN_FACTOR);
        let moisture = v.whole("braden_moisture", self.braden_moisture, ranges::BRADEN_FACTOR);
        let activity = v.whole("braden_activity", self.braden_activity, ranges::BRADEN_FACTOR);
        let mobility = v.whole("braden_mobility", self.braden_mobility, ranges::BRADEN_FACTOR);
        let nutrition = v.whole("braden_nutrition", self.braden_nutrition, ranges::BRADEN_FACTOR);
        let friction = v.whole(
            "braden_friction_shear",
            self.braden_friction_shear,
            ranges::BRADEN_FRICTION_SHEAR,
        );

        let crt = v.real("crt_seconds", self.crt_seconds, ranges::CAPILLARY_REFILL);

        let aid = v.choice::<AmbulatoryAid>(
            "morse_ambulatory_aid",
            self.morse_ambulatory_aid.as_deref(),
        );
        let gait = v.choice::<Gait>("morse_gait", self.morse_gait.as_deref());
        let mental = v.choice::<MentalStatus>(
            "morse_mental_status",
            self.morse_mental_status.as_deref(),
        );

        let rr = v.whole("respiratory_rate", self.respiratory_rate, ranges::RESPIRATORY_RATE);
        let sbp = v.whole("systolic_bp", self.systolic_bp, ranges::SYSTOLIC_BP);
        let temp = v.real("temperature_c", self.temperature_c, ranges::TEMPERATURE);
        let hr = v.whole("heart_rate", self.heart_rate, ranges::HEART_RATE);
        let spo2 = v.whole("spo2", self.spo2, ranges::SPO2);

        let vip = v.whole("vip", self.vip, ranges::VIP);
        let rass = v.rass(self.rass.as_ref());

        if !v.errors.is_empty() {
            return Err(ValidationErrors(v.errors));
        }

        // Every value below was range-checked above; the conversions cannot fail
        // unless a range constant is wider than its target type.
        let narrow = |value: Option<i64>| value.and_then(|x| u8::try_from(x).ok());
        let narrow16 = |value: Option<i64>| value.and_then(|x| u16::try_from(x).ok());

        let built = (|| {
            let avpu = avpu?;
            let rass = rass?;
            Some(Observation {
                consciousness: Consciousness {
                    avpu,
                    gcs: GcsComponents {
                        eye: narrow(eye)?,
                        verbal: narrow(verbal)?,
                        motor: narrow(motor)?,
                    },
                },
                braden: BradenFactors {
                    sensory_perception: narrow(sensory)?,
                    moisture: narrow(moisture)?,
                    activity: narrow(activity)?,
                    mobility: narrow(mobility)?,
                    nutrition: narrow(nutrition)?,
                    friction_shear: narrow(friction)?,
                },
                capillary_refill_secs: crt?,
                fall_risk: MorseFactors {
                    history_of_falling: self.morse_history_of_falling,
                    secondary_diagnosis: self.morse_secondary_diagnosis,
                    ambulatory_aid: aid?,
                    iv_access: self.morse_iv_access,
                    gait: gait?,
                    mental_status: mental?,
                },
                vitals: VitalSigns {
                    respiratory_rate: narrow16(rr)?,
                    systolic_bp: narrow16(sbp)?,
                    temperature_c: temp?,
                    heart_rate: narrow16(hr)?,
                    spo2: narrow(spo2)?,
                    supplemental_oxygen: self.supplemental_oxygen,
                },
                vip: VipGrade::new(narrow(vip)?)?,
                rass,
                delirium: CamIcuFeatures {
                    acute_onset: self.cam_acute_onset,
                    inattention: self.cam_inattention,
                    altered_consciousness: self.cam_altered_consciousness.unwrap_or_else(|| {
                        CamIcuFeatures::suggested_altered_consciousness(avpu, rass)
                    }),
                    disorganized_thinking: self.cam_disorganized_thinking,
                },
            })
        })();

        built.ok_or_else(|| {
            ValidationErrors(vec![FieldError {
                field: "observation".to_string(),
                kind: FieldErrorKind::OutOfRange,
                message: "observation could not be assembled from validated fields".to_string(),
            }])
        })
    }
}

impl From<&Observation> for ObservationForm {
    fn from(o: &Observation) -> Self {
        let gcs = o.consciousness.gcs;
        let b = o.braden;
        let m = o.fall_risk;
        let vs = o.vitals;
        Self {
            avpu: Some(o.consciousness.avpu.as_str().to_string()),
            gcs_eye: Some(gcs.eye.into()),
            gcs_verbal: Some(gcs.verbal.into()),
            gcs_motor: Some(gcs.motor.into()),
            braden_sensory: Some(b.sensory_perception.into()),
            braden_moisture: Some(b.moisture.into()),
            braden_activity: Some(b.activity.into()),
            braden_mobility: Some(b.mobility.into()),
            braden_nutrition: Some(b.nutrition.into()),
            braden_friction_shear: Some(b.friction_shear.into()),
            crt_seconds: Some(o.capillary_refill_secs),
            morse_history_of_falling: m.history_of_falling,
            morse_secondary_diagnosis: m.secondary_diagnosis,
            morse_ambulatory_aid: Some(m.ambulatory_aid.as_str().to_string()),
            morse_iv_access: m.iv_access,
            morse_gait: Some(m.gait.as_str().to_string()),
            morse_mental_status: Some(m.mental_status.as_str().to_string()),
            respiratory_rate: Some(vs.respiratory_rate.into()),
            systolic_bp: Some(vs.systolic_bp.into()),
            temperature_c: Some(vs.temperature_c),
            heart_rate: Some(vs.heart_rate.into()),
            spo2: Some(vs.spo2.into()),
            supplemental_oxygen: vs.supplemental_oxygen,
            vip: Some(o.vip.value().into()),
            rass: Some(RassEntry::Value(o.rass.value().into())),
            cam_acute_onset: o.delirium.acute_onset,
            cam_inattention: o.delirium.inattention,
            cam_altered_consciousness: Some(o.delirium.altered_consciousness),
            cam_disorganized_thinking: o.delirium.disorganized_thinking,
        }
    }
}

#[derive(Default)]
struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    fn push(&mut self, field: &str, kind: FieldErrorKind, message: String) {
        self.errors.push(FieldError {
            field: field.to_string(),
            kind,
            message,
        });
    }

    fn missing(&mut self, field: &str) {
        self.push(field, FieldErrorKind::Missing, format!("{field} is required"));
    }

    fn out_of_range(&mut self, field: &str, value: f64, range: FieldRange) {
        self.push(
            field,
            FieldErrorKind::OutOfRange,
            format!(
                "{field} value {value} is outside range [{}, {}]",
                range.min, range.max
            ),
        );
    }

    fn whole(&mut self, field: &str, value: Option<i64>, range: FieldRange) -> Option<i64> {
        let Some(value) = value else {
            self.missing(field);
            return None;
        };
        if !range.contains(value as f64) {
            self.out_of_range(field, value as f64, range);
            return None;
        }
        Some(value)
    }

    fn real(&mut self, field: &str, value: Option<f64>, range: FieldRange) -> Option<f64> {
        let Some(value) = value else {
            self.missing(field);
            return None;
        };
        if !range.contains(value) {
            self.out_of_range(field, value, range);
            return None;
        }
        Some(value)
    }

    fn choice<C: Choice>(&mut self, field: &str, value: Option<&str>) -> Option<C> {
        let Some(value) = value else {
            self.missing(field);
            return None;
        };
        let parsed = C::parse(value);
        if parsed.is_none() {
            let options: Vec<&str> = C::ALL.iter().map(|c| c.as_str()).collect();
            self.push(
                field,
                FieldErrorKind::Unrecognized,
                format!(
                    "{field} value '{value}' is not one of: {}",
                    options.join(", ")
                ),
            );
        }
        parsed
    }

    fn rass(&mut self, value: Option<&RassEntry>) -> Option<RassLevel> {
        match value {
            None => {
                self.missing("rass");
                None
            }
            Some(RassEntry::Value(n)) => self
                .whole("rass", Some(*n), ranges::RASS)
                .and_then(|n| i8::try_from(n).ok())
                .and_then(RassLevel::from_value),
            Some(RassEntry::Name(name)) => match name.trim().parse::<i64>() {
                Ok(n) => self.rass(Some(&RassEntry::Value(n))),
                Err(_) => self.choice::<RassLevel>("rass", Some(name.as_str())),
            },
        }
    }
}
