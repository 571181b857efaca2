use bedside_alert::error::AlertError;
use bedside_alert::{AlertNotice, ContactConfig};
use bedside_core::models::observation::Observation;
use bedside_scoring::evaluate;

fn contact() -> ContactConfig {
    ContactConfig {
        phone: "0123 456 789".to_string(),
        email: "doctor@example.com".to_string(),
    }
}

fn high_news_observation() -> Observation {
    let mut obs = Observation::baseline();
    obs.vitals.respiratory_rate = 26;
    obs.vitals.spo2 = 90;
    obs.vitals.heart_rate = 135;
    obs
}

#[test]
fn no_notice_without_high_risk() {
    let result = evaluate(&Observation::baseline());
    assert!(AlertNotice::for_result(&result, &contact()).is_none());
}

#[test]
fn notice_lists_flagged_scales() {
    let result = evaluate(&high_news_observation());
    let notice = AlertNotice::for_result(&result, &contact()).unwrap();
    assert_eq!(notice.record_id, result.id);
    assert!(notice.flagged.contains(&"NEWS".to_string()));
}

#[test]
fn links_are_percent_encoded() {
    let result = evaluate(&high_news_observation());
    let notice = AlertNotice::for_result(&result, &contact()).unwrap();

    let tel = notice.tel_link().unwrap().unwrap();
    assert_eq!(tel.as_str(), "tel:0123456789");

    let mail = notice.mailto_link().unwrap().unwrap();
    assert!(mail.as_str().starts_with("mailto:doctor@example.com?subject=Alert%20from%20bedside%20scores&body="));
    assert!(mail.as_str().contains(&result.id.to_string()));
    assert!(!mail.as_str().contains(' '));
}

#[test]
fn missing_contacts_are_reported() {
    let result = evaluate(&high_news_observation());
    let notice = AlertNotice::for_result(&result, &ContactConfig::default()).unwrap();
    assert!(notice.tel_link().unwrap().is_none());
    assert!(matches!(notice.contact_links(), Err(AlertError::NoContactChannel)));
}

#[test]
fn acknowledgment_names_the_record_and_person() {
    let result = evaluate(&high_news_observation());
    let notice = AlertNotice::for_result(&result, &contact()).unwrap();
    notice.raise().unwrap();

    let ack = notice.acknowledge("charge nurse");
    assert_eq!(ack.record_id, result.id);
    assert_eq!(ack.acknowledged_by, "charge nurse");
    assert!(ack.acknowledged_at >= result.timestamp);
}
