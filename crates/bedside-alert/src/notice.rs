use bedside_core::models::evaluation::EvaluationResult;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::AlertError;
use crate::events::AlertEvent;

const MAIL_SUBJECT: &str = "Alert from bedside scores";

/// Who to reach when an evaluation needs review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl ContactConfig {
    pub fn is_empty(&self) -> bool {
        self.phone.trim().is_empty() && self.email.trim().is_empty()
    }
}

/// An evaluation that requires immediate review, with its contact channels.
#[derive(Debug, Clone, Serialize)]
pub struct AlertNotice {
    pub record_id: Uuid,
    pub flagged: Vec<String>,
    pub raised_at: jiff::Timestamp,
    pub contact: ContactConfig,
}

/// A manual confirmation that someone has seen the alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub record_id: Uuid,
    pub acknowledged_by: String,
    pub acknowledged_at: jiff::Timestamp,
}

impl AlertNotice {
    /// Build a notice when, and only when, the result requires review.
    pub fn for_result(result: &EvaluationResult, contact: &ContactConfig) -> Option<Self> {
        if !result.requires_review {
            return None;
        }
        Some(Self {
            record_id: result.id,
            flagged: result
                .flagged_scales()
                .into_iter()
                .map(str::to_string)
                .collect(),
            raised_at: result.timestamp,
            contact: contact.clone(),
        })
    }

    /// `tel:` link, if a phone number is configured.
    pub fn tel_link(&self) -> Result<Option<Url>, AlertError> {
        let phone: String = self
            .contact
            .phone
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if phone.is_empty() {
            return Ok(None);
        }
        parse_contact(&format!("tel:{phone}"), &self.contact.phone).map(Some)
    }

    /// `mailto:` link with a subject and a body naming the record, if an
    /// email address is configured.
    pub fn mailto_link(&self) -> Result<Option<Url>, AlertError> {
        let email = self.contact.email.trim();
        if email.is_empty() {
            return Ok(None);
        }
        let mut url = parse_contact(&format!("mailto:{email}"), email)?;
        let body = format!(
            "Patient alert ({}) - please review record ID {}",
            self.flagged.join(", "),
            self.record_id
        );
        url.set_query(Some(&format!("subject={MAIL_SUBJECT}&body={body}")));
        Ok(Some(url))
    }

    /// Every configured contact link. Fails when none is configured.
    pub fn contact_links(&self) -> Result<Vec<Url>, AlertError> {
        let links: Vec<Url> = [self.tel_link()?, self.mailto_link()?]
            .into_iter()
            .flatten()
            .collect();
        if links.is_empty() {
            return Err(AlertError::NoContactChannel);
        }
        Ok(links)
    }

    /// Log the alert as raised.
    pub fn raise(&self) -> Result<(), AlertError> {
        AlertEvent::new("raised", self.record_id.to_string(), "system")
            .with_details(serde_json::to_value(&self.flagged)?)
            .emit();
        Ok(())
    }

    /// Record that `by` has seen the alert and taken over follow-up.
    pub fn acknowledge(&self, by: &str) -> Acknowledgment {
        let ack = Acknowledgment {
            record_id: self.record_id,
            acknowledged_by: by.to_string(),
            acknowledged_at: jiff::Timestamp::now(),
        };
        AlertEvent::new("acknowledged", self.record_id.to_string(), by).emit();
        ack
    }
}

fn parse_contact(raw: &str, contact: &str) -> Result<Url, AlertError> {
    Url::parse(raw).map_err(|source| AlertError::InvalidContact {
        contact: contact.to_string(),
        source,
    })
}
