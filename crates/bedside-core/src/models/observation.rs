use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A categorical form field with a closed set of options.
///
/// Each option has a stable snake_case name used by the input form, the CSV
/// record and the CLI. Anything outside `ALL` is rejected at the boundary.
pub trait Choice: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(input))
    }
}

/// AVPU consciousness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Avpu {
    Alert,
    Voice,
    Pain,
    Unresponsive,
}

impl Avpu {
    /// Ordinal code, 0 for Alert through 3 for Unresponsive.
    pub fn code(self) -> u8 {
        match self {
            Avpu::Alert => 0,
            Avpu::Voice => 1,
            Avpu::Pain => 2,
            Avpu::Unresponsive => 3,
        }
    }

    pub fn is_alert(self) -> bool {
        self == Avpu::Alert
    }

    pub fn label(self) -> &'static str {
        match self {
            Avpu::Alert => "A - Alert",
            Avpu::Voice => "V - Voice",
            Avpu::Pain => "P - Pain",
            Avpu::Unresponsive => "U - Unresponsive",
        }
    }
}

impl Choice for Avpu {
    const ALL: &'static [Self] = &[Avpu::Alert, Avpu::Voice, Avpu::Pain, Avpu::Unresponsive];

    fn as_str(self) -> &'static str {
        match self {
            Avpu::Alert => "alert",
            Avpu::Voice => "voice",
            Avpu::Pain => "pain",
            Avpu::Unresponsive => "unresponsive",
        }
    }

    /// Accepts the full name or the single-letter code (`A`, `V`, `P`, `U`).
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.iter().copied().find(|c| {
            c.as_str().eq_ignore_ascii_case(input)
                || c.label()[..1].eq_ignore_ascii_case(input)
        })
    }
}

/// Morse: walking aid in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AmbulatoryAid {
    /// None, bed rest, or nurse assist.
    None,
    /// Holds on to furniture.
    Furniture,
    CrutchesCaneWalker,
}

impl AmbulatoryAid {
    pub fn points(self) -> u8 {
        match self {
            AmbulatoryAid::None => 0,
            AmbulatoryAid::Furniture => 15,
            AmbulatoryAid::CrutchesCaneWalker => 30,
        }
    }
}

impl Choice for AmbulatoryAid {
    const ALL: &'static [Self] = &[
        AmbulatoryAid::None,
        AmbulatoryAid::Furniture,
        AmbulatoryAid::CrutchesCaneWalker,
    ];

    fn as_str(self) -> &'static str {
        match self {
            AmbulatoryAid::None => "none",
            AmbulatoryAid::Furniture => "furniture",
            AmbulatoryAid::CrutchesCaneWalker => "crutches_cane_walker",
        }
    }
}

/// Morse: gait and transferring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gait {
    /// Normal, bed rest, or immobile.
    Normal,
    Weak,
    Impaired,
}

impl Gait {
    pub fn points(self) -> u8 {
        match self {
            Gait::Normal => 0,
            Gait::Weak => 10,
            Gait::Impaired => 20,
        }
    }
}

impl Choice for Gait {
    const ALL: &'static [Self] = &[Gait::Normal, Gait::Weak, Gait::Impaired];

    fn as_str(self) -> &'static str {
        match self {
            Gait::Normal => "normal",
            Gait::Weak => "weak",
            Gait::Impaired => "impaired",
        }
    }
}

/// Morse: mental status relative to own ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MentalStatus {
    Oriented,
    ForgetsLimitations,
}

impl MentalStatus {
    pub fn points(self) -> u8 {
        match self {
            MentalStatus::Oriented => 0,
            MentalStatus::ForgetsLimitations => 15,
        }
    }
}

impl Choice for MentalStatus {
    const ALL: &'static [Self] = &[MentalStatus::Oriented, MentalStatus::ForgetsLimitations];

    fn as_str(self) -> &'static str {
        match self {
            MentalStatus::Oriented => "oriented",
            MentalStatus::ForgetsLimitations => "forgets_limitations",
        }
    }
}

/// Richmond Agitation-Sedation Scale, -5 (unarousable) to +4 (combative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RassLevel {
    Unarousable,
    DeepSedation,
    ModerateSedation,
    LightSedation,
    Drowsy,
    AlertAndCalm,
    Restless,
    Agitated,
    VeryAgitated,
    Combative,
}

impl RassLevel {
    pub fn value(self) -> i8 {
        match self {
            RassLevel::Unarousable => -5,
            RassLevel::DeepSedation => -4,
            RassLevel::ModerateSedation => -3,
            RassLevel::LightSedation => -2,
            RassLevel::Drowsy => -1,
            RassLevel::AlertAndCalm => 0,
            RassLevel::Restless => 1,
            RassLevel::Agitated => 2,
            RassLevel::VeryAgitated => 3,
            RassLevel::Combative => 4,
        }
    }

    pub fn from_value(value: i8) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.value() == value)
    }
}

impl Choice for RassLevel {
    const ALL: &'static [Self] = &[
        RassLevel::Unarousable,
        RassLevel::DeepSedation,
        RassLevel::ModerateSedation,
        RassLevel::LightSedation,
        RassLevel::Drowsy,
        RassLevel::AlertAndCalm,
        RassLevel::Restless,
        RassLevel::Agitated,
        RassLevel::VeryAgitated,
        RassLevel::Combative,
    ];

    fn as_str(self) -> &'static str {
        match self {
            RassLevel::Unarousable => "unarousable",
            RassLevel::DeepSedation => "deep_sedation",
            RassLevel::ModerateSedation => "moderate_sedation",
            RassLevel::LightSedation => "light_sedation",
            RassLevel::Drowsy => "drowsy",
            RassLevel::AlertAndCalm => "alert_and_calm",
            RassLevel::Restless => "restless",
            RassLevel::Agitated => "agitated",
            RassLevel::VeryAgitated => "very_agitated",
            RassLevel::Combative => "combative",
        }
    }
}

/// Visual Infusion Phlebitis grade, 0 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct VipGrade(u8);

const VIP_LABELS: [&str; 6] = [
    "No signs",
    "Slight redness",
    "Redness and pain",
    "Moderate phlebitis",
    "Advanced phlebitis",
    "Abscess",
];

impl VipGrade {
    pub const MAX: u8 = 5;

    pub fn new(grade: u8) -> Option<Self> {
        (grade <= Self::MAX).then_some(Self(grade))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        VIP_LABELS[usize::from(self.0)]
    }
}

impl TryFrom<u8> for VipGrade {
    type Error = String;

    fn try_from(grade: u8) -> Result<Self, Self::Error> {
        Self::new(grade).ok_or_else(|| format!("VIP grade {grade} is outside 0..=5"))
    }
}

impl From<VipGrade> for u8 {
    fn from(grade: VipGrade) -> Self {
        grade.0
    }
}

/// Glasgow Coma Scale components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GcsComponents {
    /// Eye opening, 1–4.
    pub eye: u8,
    /// Verbal response, 1–5.
    pub verbal: u8,
    /// Motor response, 1–6.
    pub motor: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Consciousness {
    pub avpu: Avpu,
    pub gcs: GcsComponents,
}

/// Braden sub-factors. Each is 1–4 except friction/shear, which is 1–3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BradenFactors {
    pub sensory_perception: u8,
    pub moisture: u8,
    pub activity: u8,
    pub mobility: u8,
    pub nutrition: u8,
    pub friction_shear: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MorseFactors {
    /// Fall within the last three months.
    pub history_of_falling: bool,
    /// Two or more medical diagnoses.
    pub secondary_diagnosis: bool,
    pub ambulatory_aid: AmbulatoryAid,
    /// IV line or heparin lock in place.
    pub iv_access: bool,
    pub gait: Gait,
    pub mental_status: MentalStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalSigns {
    pub respiratory_rate: u16,
    pub systolic_bp: u16,
    pub temperature_c: f64,
    pub heart_rate: u16,
    pub spo2: u8,
    pub supplemental_oxygen: bool,
}

/// CAM-ICU features A–D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CamIcuFeatures {
    /// A: acute change or fluctuating course of mental status.
    pub acute_onset: bool,
    /// B: inattention.
    pub inattention: bool,
    /// C: altered level of consciousness.
    pub altered_consciousness: bool,
    /// D: disorganized thinking.
    pub disorganized_thinking: bool,
}

impl CamIcuFeatures {
    /// Suggested value for feature C when the assessor leaves it blank:
    /// anything other than an alert AVPU or a RASS of zero.
    pub fn suggested_altered_consciousness(avpu: Avpu, rass: RassLevel) -> bool {
        !avpu.is_alert() || rass != RassLevel::AlertAndCalm
    }
}

/// One bedside assessment, validated and ready to score.
///
/// Built once per evaluation (usually through
/// [`ObservationForm::validate`](crate::validate::ObservationForm::validate))
/// and passed by reference into the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Observation {
    pub consciousness: Consciousness,
    pub braden: BradenFactors,
    pub capillary_refill_secs: f64,
    pub fall_risk: MorseFactors,
    pub vitals: VitalSigns,
    pub vip: VipGrade,
    pub rass: RassLevel,
    pub delirium: CamIcuFeatures,
}

impl Observation {
    /// The form's starting values: an alert adult with normal vital signs.
    pub fn baseline() -> Self {
        Self {
            consciousness: Consciousness {
                avpu: Avpu::Alert,
                gcs: GcsComponents {
                    eye: 4,
                    verbal: 5,
                    motor: 6,
                },
            },
            braden: BradenFactors {
                sensory_perception: 4,
                moisture: 4,
                activity: 3,
                mobility: 3,
                nutrition: 4,
                friction_shear: 1,
            },
            capillary_refill_secs: 2.0,
            fall_risk: MorseFactors {
                history_of_falling: false,
                secondary_diagnosis: false,
                ambulatory_aid: AmbulatoryAid::None,
                iv_access: false,
                gait: Gait::Normal,
                mental_status: MentalStatus::Oriented,
            },
            vitals: VitalSigns {
                respiratory_rate: 18,
                systolic_bp: 120,
                temperature_c: 37.0,
                heart_rate: 80,
                spo2: 97,
                supplemental_oxygen: false,
            },
            vip: VipGrade(0),
            rass: RassLevel::AlertAndCalm,
            delirium: CamIcuFeatures::default(),
        }
    }
}
