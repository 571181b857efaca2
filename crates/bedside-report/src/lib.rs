//! bedside-report
//!
//! Text and HTML summaries of an evaluation, with risk badges colored
//! low→green, medium→yellow, high→red.

pub mod error;
pub mod render;
pub mod templates;

pub use render::{ReportFormat, render, render_html, render_text};
