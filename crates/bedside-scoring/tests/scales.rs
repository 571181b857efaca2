use bedside_core::models::observation::{
    AmbulatoryAid, Avpu, BradenFactors, CamIcuFeatures, Gait, GcsComponents, MentalStatus,
    MorseFactors, Observation, RassLevel, VipGrade,
};
use bedside_core::models::risk::RiskLevel;
use bedside_scoring::scales::braden::{braden_risk, braden_total};
use bedside_scoring::scales::cam_icu::cam_icu_positive;
use bedside_scoring::scales::crt::crt_risk;
use bedside_scoring::scales::gcs::{gcs_risk, gcs_total};
use bedside_scoring::scales::morse::{morse_risk, morse_total};
use bedside_scoring::scales::news::{news_breakdown, news_risk, news_total};
use bedside_scoring::scales::qsofa::{qsofa_risk, qsofa_total};
use bedside_scoring::scales::rass::rass_risk;
use bedside_scoring::scales::vip::vip_risk;

#[test]
fn gcs_total_and_risk_cover_every_combination() {
    for eye in 1..=4 {
        for verbal in 1..=5 {
            for motor in 1..=6 {
                let total = gcs_total(GcsComponents { eye, verbal, motor });
                assert_eq!(total, eye + verbal + motor);
                assert!((3..=15).contains(&total));

                let expected = if total <= 8 {
                    RiskLevel::High
                } else if total <= 12 {
                    RiskLevel::Medium
                } else {
                    RiskLevel::Low
                };
                assert_eq!(gcs_risk(total), expected, "GCS {total}");
            }
        }
    }
}

#[test]
fn braden_total_stays_within_6_to_23() {
    let lowest = BradenFactors {
        sensory_perception: 1,
        moisture: 1,
        activity: 1,
        mobility: 1,
        nutrition: 1,
        friction_shear: 1,
    };
    let highest = BradenFactors {
        sensory_perception: 4,
        moisture: 4,
        activity: 4,
        mobility: 4,
        nutrition: 4,
        friction_shear: 3,
    };
    assert_eq!(braden_total(lowest), 6);
    assert_eq!(braden_total(highest), 23);
}

#[test]
fn every_braden_combination_sums_within_range() {
    for sensory_perception in 1..=4 {
        for moisture in 1..=4 {
            for activity in 1..=4 {
                for mobility in 1..=4 {
                    for nutrition in 1..=4 {
                        for friction_shear in 1..=3 {
                            let total = braden_total(BradenFactors {
                                sensory_perception,
                                moisture,
                                activity,
                                mobility,
                                nutrition,
                                friction_shear,
                            });
                            assert_eq!(
                                total,
                                sensory_perception
                                    + moisture
                                    + activity
                                    + mobility
                                    + nutrition
                                    + friction_shear
                            );
                            assert!((6..=23).contains(&total));
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn braden_risk_boundaries() {
    assert_eq!(braden_risk(6), RiskLevel::High);
    assert_eq!(braden_risk(9), RiskLevel::High);
    assert_eq!(braden_risk(10), RiskLevel::Medium);
    assert_eq!(braden_risk(14), RiskLevel::Medium);
    assert_eq!(braden_risk(15), RiskLevel::Low);
    assert_eq!(braden_risk(23), RiskLevel::Low);
}

#[test]
fn crt_above_three_seconds_is_high() {
    assert_eq!(crt_risk(0.0), RiskLevel::Low);
    assert_eq!(crt_risk(3.0), RiskLevel::Low);
    assert_eq!(crt_risk(3.1), RiskLevel::High);
    assert_eq!(crt_risk(10.0), RiskLevel::High);
}

#[test]
fn morse_sums_weighted_factors() {
    let none = MorseFactors {
        history_of_falling: false,
        secondary_diagnosis: false,
        ambulatory_aid: AmbulatoryAid::None,
        iv_access: false,
        gait: Gait::Normal,
        mental_status: MentalStatus::Oriented,
    };
    assert_eq!(morse_total(none), 0);

    let all = MorseFactors {
        history_of_falling: true,
        secondary_diagnosis: true,
        ambulatory_aid: AmbulatoryAid::CrutchesCaneWalker,
        iv_access: true,
        gait: Gait::Impaired,
        mental_status: MentalStatus::ForgetsLimitations,
    };
    assert_eq!(morse_total(all), 125);

    let some = MorseFactors {
        history_of_falling: true,
        ambulatory_aid: AmbulatoryAid::Furniture,
        gait: Gait::Weak,
        ..none
    };
    assert_eq!(morse_total(some), 25 + 15 + 10);
}

#[test]
fn morse_risk_boundaries() {
    assert_eq!(morse_risk(24), RiskLevel::Low);
    assert_eq!(morse_risk(25), RiskLevel::Medium);
    assert_eq!(morse_risk(44), RiskLevel::Medium);
    assert_eq!(morse_risk(45), RiskLevel::High);
}

#[test]
fn qsofa_boundary_cases() {
    let total = qsofa_total(22, 100, Avpu::Alert);
    assert_eq!(total, 2);
    assert_eq!(qsofa_risk(total), RiskLevel::High);

    let total = qsofa_total(21, 101, Avpu::Alert);
    assert_eq!(total, 0);
    assert_eq!(qsofa_risk(total), RiskLevel::Low);
}

#[test]
fn qsofa_mental_change_comes_from_avpu_only() {
    assert_eq!(qsofa_total(18, 120, Avpu::Voice), 1);
    assert_eq!(qsofa_total(30, 80, Avpu::Unresponsive), 3);
    assert_eq!(qsofa_risk(1), RiskLevel::Low);
}

#[test]
fn vip_grades_map_to_risk() {
    let risk = |g| vip_risk(VipGrade::new(g).unwrap());
    assert_eq!(risk(0), RiskLevel::Low);
    assert_eq!(risk(1), RiskLevel::Low);
    assert_eq!(risk(2), RiskLevel::Medium);
    assert_eq!(risk(3), RiskLevel::Medium);
    assert_eq!(risk(4), RiskLevel::High);
    assert_eq!(risk(5), RiskLevel::High);
}

#[test]
fn news_normal_vitals_score_zero() {
    let obs = Observation::baseline();
    let breakdown = news_breakdown(&obs.vitals, Avpu::Alert);
    assert_eq!(breakdown.total(), 0);
    assert_eq!(news_risk(0), RiskLevel::Low);
}

#[test]
fn news_respiratory_rate_bands() {
    let mut vitals = Observation::baseline().vitals;
    let cases = [(8, 3), (9, 1), (11, 1), (12, 0), (20, 0), (21, 2), (24, 2), (25, 3)];
    for (rr, points) in cases {
        vitals.respiratory_rate = rr;
        assert_eq!(news_breakdown(&vitals, Avpu::Alert).respiratory_rate, points, "RR {rr}");
    }
}

#[test]
fn news_spo2_bands() {
    let mut vitals = Observation::baseline().vitals;
    let cases = [(91, 3), (92, 2), (93, 2), (94, 1), (95, 1), (96, 0)];
    for (spo2, points) in cases {
        vitals.spo2 = spo2;
        assert_eq!(news_breakdown(&vitals, Avpu::Alert).spo2, points, "SpO2 {spo2}");
    }
}

#[test]
fn news_heart_rate_bands() {
    let mut vitals = Observation::baseline().vitals;
    let cases = [
        (40, 3),
        (41, 1),
        (50, 1),
        (51, 0),
        (90, 0),
        (91, 1),
        (110, 1),
        (111, 2),
        (130, 2),
        (131, 3),
    ];
    for (hr, points) in cases {
        vitals.heart_rate = hr;
        assert_eq!(news_breakdown(&vitals, Avpu::Alert).heart_rate, points, "HR {hr}");
    }
}

#[test]
fn news_systolic_bands_include_hypertensive_top_band() {
    let mut vitals = Observation::baseline().vitals;
    let cases = [(90, 3), (91, 2), (100, 2), (101, 1), (110, 1), (111, 0), (219, 0), (220, 3)];
    for (sbp, points) in cases {
        vitals.systolic_bp = sbp;
        assert_eq!(news_breakdown(&vitals, Avpu::Alert).systolic_bp, points, "SBP {sbp}");
    }
}

#[test]
fn news_temperature_bands() {
    let mut vitals = Observation::baseline().vitals;
    let cases = [
        (35.0, 3),
        (35.1, 1),
        (36.0, 1),
        (36.1, 0),
        (38.0, 0),
        (38.1, 1),
        (39.0, 1),
        (39.1, 2),
    ];
    for (temp, points) in cases {
        vitals.temperature_c = temp;
        assert_eq!(news_breakdown(&vitals, Avpu::Alert).temperature, points, "T {temp}");
    }
}

#[test]
fn news_maximum_is_twenty() {
    let mut vitals = Observation::baseline().vitals;
    vitals.respiratory_rate = 40;
    vitals.spo2 = 80;
    vitals.temperature_c = 34.0;
    vitals.systolic_bp = 80;
    vitals.heart_rate = 150;
    vitals.supplemental_oxygen = true;
    let total = news_total(&vitals, Avpu::Pain);
    assert_eq!(total, 20);
    assert_eq!(news_risk(total), RiskLevel::High);
}

#[test]
fn news_risk_boundaries() {
    assert_eq!(news_risk(4), RiskLevel::Low);
    assert_eq!(news_risk(5), RiskLevel::Medium);
    assert_eq!(news_risk(6), RiskLevel::Medium);
    assert_eq!(news_risk(7), RiskLevel::High);
}

#[test]
fn rass_risk_is_high_at_both_extremes() {
    let expected = [
        (-5, RiskLevel::High),
        (-4, RiskLevel::High),
        (-3, RiskLevel::High),
        (-2, RiskLevel::Medium),
        (-1, RiskLevel::Medium),
        (0, RiskLevel::Low),
        (1, RiskLevel::High),
        (4, RiskLevel::High),
    ];
    for (value, risk) in expected {
        let level = RassLevel::from_value(value).unwrap();
        assert_eq!(rass_risk(level), risk, "RASS {value}");
    }
}

#[test]
fn cam_icu_requires_a_and_b() {
    let positive = CamIcuFeatures {
        acute_onset: true,
        inattention: true,
        altered_consciousness: false,
        disorganized_thinking: true,
    };
    assert!(cam_icu_positive(positive));

    let no_inattention = CamIcuFeatures {
        acute_onset: true,
        inattention: false,
        altered_consciousness: true,
        disorganized_thinking: true,
    };
    assert!(!cam_icu_positive(no_inattention));

    let neither_c_nor_d = CamIcuFeatures {
        acute_onset: true,
        inattention: true,
        ..CamIcuFeatures::default()
    };
    assert!(!cam_icu_positive(neither_c_nor_d));
}
