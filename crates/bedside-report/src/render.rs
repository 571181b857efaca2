use std::str::FromStr;

use bedside_core::models::evaluation::EvaluationResult;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ReportError;
use crate::templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "html" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
struct Row {
    name: &'static str,
    score: String,
    level_label: &'static str,
    color: &'static str,
}

#[derive(Debug, Serialize)]
struct View {
    id: String,
    timestamp: String,
    avpu_label: &'static str,
    avpu_score: u8,
    rows: Vec<Row>,
    cam_icu_positive: bool,
    requires_review: bool,
    flagged: Vec<&'static str>,
}

impl View {
    fn new(r: &EvaluationResult) -> Self {
        let scores = [
            r.gcs.score.to_string(),
            r.braden.score.to_string(),
            format!("{:.1} s", r.crt.score),
            r.morse.score.to_string(),
            r.qsofa.score.to_string(),
            format!("{} - {}", r.vip.score, r.vip_desc),
            r.news.score.to_string(),
            format!("{:+}", r.rass.score),
        ];
        let rows = r
            .risk_levels()
            .into_iter()
            .zip(scores)
            .map(|((name, risk), score)| Row {
                name,
                score,
                level_label: risk.label(),
                color: risk.color(),
            })
            .collect();

        Self {
            id: r.id.to_string(),
            timestamp: r.timestamp.to_string(),
            avpu_label: r.avpu.label(),
            avpu_score: r.avpu_score,
            rows,
            cam_icu_positive: r.cam_icu_positive,
            requires_review: r.requires_review,
            flagged: r.flagged_scales(),
        }
    }
}

fn render_template(
    name: &str,
    content: &str,
    result: &EvaluationResult,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(name, content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let context = Context::from_serialize(View::new(result))?;
    let rendered = tera.render(name, &context)?;
    tracing::debug!(template = name, evaluation.id = %result.id, "report rendered");
    Ok(rendered)
}

pub fn render_text(result: &EvaluationResult) -> Result<String, ReportError> {
    render_template(templates::TEXT_NAME, templates::TEXT, result)
}

pub fn render_html(result: &EvaluationResult) -> Result<String, ReportError> {
    render_template(templates::HTML_NAME, templates::HTML, result)
}

pub fn render(result: &EvaluationResult, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => render_text(result),
        ReportFormat::Html => render_html(result),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}
