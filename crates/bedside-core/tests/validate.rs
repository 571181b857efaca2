use bedside_core::models::observation::{Avpu, Gait, Observation, RassLevel};
use bedside_core::validate::{FieldErrorKind, ObservationForm, RassEntry};

fn baseline_form() -> ObservationForm {
    ObservationForm::from(&Observation::baseline())
}

#[test]
fn baseline_form_validates_back_to_baseline() {
    let obs = baseline_form().validate().unwrap();
    assert_eq!(obs, Observation::baseline());
}

#[test]
fn empty_form_reports_every_required_field() {
    let errors = ObservationForm::default().validate().unwrap_err();
    let fields: Vec<&str> = errors.fields().collect();
    assert_eq!(fields.len(), 21);
    assert!(fields.contains(&"avpu"));
    assert!(fields.contains(&"crt_seconds"));
    assert!(fields.contains(&"rass"));
    assert!(errors.0.iter().all(|e| e.kind == FieldErrorKind::Missing));
}

#[test]
fn out_of_range_values_are_rejected() {
    let form = ObservationForm {
        gcs_eye: Some(5),
        braden_friction_shear: Some(4),
        spo2: Some(101),
        temperature_c: Some(43.5),
        ..baseline_form()
    };
    let errors = form.validate().unwrap_err();
    let fields: Vec<&str> = errors.fields().collect();
    assert_eq!(fields, vec!["gcs_eye", "braden_friction_shear", "temperature_c", "spo2"]);
    assert!(errors.0.iter().all(|e| e.kind == FieldErrorKind::OutOfRange));
    assert!(errors.to_string().contains("gcs_eye value 5 is outside range [1, 4]"));
}

#[test]
fn non_finite_crt_is_rejected() {
    let form = ObservationForm {
        crt_seconds: Some(f64::NAN),
        ..baseline_form()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["crt_seconds"]);
}

#[test]
fn unrecognized_choice_lists_the_options() {
    let form = ObservationForm {
        morse_gait: Some("shuffling".to_string()),
        ..baseline_form()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.0[0].kind, FieldErrorKind::Unrecognized);
    assert!(errors.0[0].message.contains("normal, weak, impaired"));
}

#[test]
fn choices_parse_case_insensitively() {
    let form = ObservationForm {
        avpu: Some("P".to_string()),
        morse_gait: Some("Weak".to_string()),
        ..baseline_form()
    };
    let obs = form.validate().unwrap();
    assert_eq!(obs.consciousness.avpu, Avpu::Pain);
    assert_eq!(obs.fall_risk.gait, Gait::Weak);
}

#[test]
fn rass_accepts_value_name_or_signed_text() {
    let with = |entry: RassEntry| {
        ObservationForm {
            rass: Some(entry),
            cam_altered_consciousness: None,
            ..baseline_form()
        }
        .validate()
    };

    assert_eq!(with(RassEntry::Value(-3)).unwrap().rass, RassLevel::ModerateSedation);
    assert_eq!(
        with(RassEntry::Name("very_agitated".to_string())).unwrap().rass,
        RassLevel::VeryAgitated
    );
    assert_eq!(with(RassEntry::Name("+1".to_string())).unwrap().rass, RassLevel::Restless);
    assert!(with(RassEntry::Value(5)).is_err());
}

#[test]
fn rass_numeric_text_is_range_checked() {
    for text in ["9", "300", "-6"] {
        let form = ObservationForm {
            rass: Some(RassEntry::Name(text.to_string())),
            ..baseline_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["rass"], "rass {text}");
        assert_eq!(errors.0[0].kind, FieldErrorKind::OutOfRange, "rass {text}");
        assert!(errors.0[0].message.contains("outside range [-5, 4]"));
    }
}

#[test]
fn cam_feature_c_defaults_from_avpu_and_rass() {
    let derived = |avpu: &str, rass: i64| {
        ObservationForm {
            avpu: Some(avpu.to_string()),
            rass: Some(RassEntry::Value(rass)),
            cam_altered_consciousness: None,
            ..baseline_form()
        }
        .validate()
        .unwrap()
        .delirium
        .altered_consciousness
    };

    assert!(!derived("alert", 0));
    assert!(derived("voice", 0));
    assert!(derived("alert", -1));
}

#[test]
fn explicit_cam_feature_c_wins() {
    let form = ObservationForm {
        avpu: Some("unresponsive".to_string()),
        cam_altered_consciousness: Some(false),
        ..baseline_form()
    };
    assert!(!form.validate().unwrap().delirium.altered_consciousness);
}

#[test]
fn json_form_with_missing_checkboxes_parses() {
    let json = r#"{
        "avpu": "alert",
        "gcs_eye": 4, "gcs_verbal": 5, "gcs_motor": 6,
        "braden_sensory": 4, "braden_moisture": 4, "braden_activity": 3,
        "braden_mobility": 3, "braden_nutrition": 4, "braden_friction_shear": 1,
        "crt_seconds": 2.0,
        "morse_ambulatory_aid": "none", "morse_gait": "normal", "morse_mental_status": "oriented",
        "respiratory_rate": 18, "systolic_bp": 120, "temperature_c": 37.0,
        "heart_rate": 80, "spo2": 97,
        "vip": 0, "rass": 0
    }"#;
    let obs = ObservationForm::from_json(json).unwrap().validate().unwrap();
    assert_eq!(obs, Observation::baseline());
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = ObservationForm::from_json("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("serialization error"));
}
