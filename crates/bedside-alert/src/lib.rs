//! bedside-alert
//!
//! Human-in-the-loop alerting for evaluations that need immediate review.
//! Advisory only: a notice exposes who to call or mail and records a manual
//! acknowledgment. Nothing is delivered automatically.

pub mod error;
pub mod events;
pub mod notice;

pub use notice::{Acknowledgment, AlertNotice, ContactConfig};
