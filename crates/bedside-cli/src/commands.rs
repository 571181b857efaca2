use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use bedside_alert::AlertNotice;
use bedside_core::error::CoreError;
use bedside_core::models::evaluation::EvaluationResult;
use bedside_core::models::observation::Observation;
use bedside_core::models::record::EvaluationRecord;
use bedside_core::validate::ObservationForm;
use bedside_report::ReportFormat;
use bedside_store::RecordStore;
use eyre::{Result, WrapErr, eyre};

use crate::config::{self, BedsideConfig};

/// Options for a single `evaluate` run.
#[derive(Debug, Clone, Default)]
pub struct EvaluateOptions {
    pub save: bool,
    pub format: Option<String>,
    pub ack: Option<String>,
}

/// Read an observation form from a file, or from stdin when `input` is `-`.
pub fn read_form(input: &str) -> Result<ObservationForm> {
    let json = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .wrap_err("failed to read observation from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .wrap_err_with(|| format!("failed to read observation from {input}"))?
    };
    Ok(ObservationForm::from_json(&json)?)
}

/// Validate at the boundary. Every bad field is listed in the error.
pub fn validate_form(form: &ObservationForm) -> Result<Observation> {
    form.validate().map_err(|errors| {
        let lines: Vec<String> = errors.0.iter().map(|e| format!("  - {e}")).collect();
        let summary = format!(
            "observation rejected ({} field(s)):\n{}",
            errors.0.len(),
            lines.join("\n")
        );
        eyre::Report::new(CoreError::InvalidObservation(errors)).wrap_err(summary)
    })
}

pub fn evaluate(
    form: &ObservationForm,
    opts: &EvaluateOptions,
    config: &BedsideConfig,
    store: &mut dyn RecordStore,
    out: &mut dyn Write,
) -> Result<EvaluationResult> {
    let observation = validate_form(form)?;
    let result = bedside_scoring::evaluate(&observation);

    let format: ReportFormat = opts
        .format
        .as_deref()
        .unwrap_or(&config.report_format)
        .parse()?;
    writeln!(out, "{}", bedside_report::render(&result, format)?)?;

    // JSON output stays machine-readable; status lines go to the log instead.
    let human = format != ReportFormat::Json;

    if opts.save {
        let total = store
            .append(&EvaluationRecord::from(&result))
            .wrap_err("failed to save evaluation")?;
        if human {
            writeln!(out, "Saved evaluation {} ({total} record(s) stored).", result.id)?;
        }
    }

    match AlertNotice::for_result(&result, &config.contact) {
        Some(notice) => {
            notice.raise()?;
            match notice.contact_links() {
                Ok(links) if human => {
                    writeln!(out, "Quick actions:")?;
                    for link in links {
                        writeln!(out, "  {link}")?;
                    }
                }
                Ok(links) => {
                    for link in links {
                        tracing::info!(evaluation.id = %result.id, %link, "contact link");
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "alert raised without a contact channel");
                    if human {
                        writeln!(out, "No contact configured; notify the team on duty directly.")?;
                    }
                }
            }
            if let Some(by) = &opts.ack {
                let ack = notice.acknowledge(by);
                if human {
                    writeln!(
                        out,
                        "Alert acknowledged by {} at {}.",
                        ack.acknowledged_by, ack.acknowledged_at
                    )?;
                }
            }
        }
        None => {
            if opts.ack.is_some() {
                if human {
                    writeln!(out, "Nothing to acknowledge: no high-risk scores.")?;
                } else {
                    tracing::info!(evaluation.id = %result.id, "nothing to acknowledge");
                }
            }
        }
    }

    Ok(result)
}

pub fn score_one(scale_id: &str, form: &ObservationForm, out: &mut dyn Write) -> Result<()> {
    let scale = bedside_scoring::require_scale(scale_id)?;
    let observation = validate_form(form)?;
    writeln!(out, "{}: {}", scale.name(), scale.assess(&observation))?;
    Ok(())
}

pub fn list_scales(out: &mut dyn Write) -> Result<()> {
    for scale in bedside_scoring::all_scales() {
        writeln!(out, "{:<8} {:<18} {}", scale.id(), scale.name(), scale.thresholds())?;
    }
    Ok(())
}

/// A form pre-filled with the baseline observation.
pub fn template(out: &mut dyn Write) -> Result<()> {
    let form = ObservationForm::from(&Observation::baseline());
    writeln!(out, "{}", serde_json::to_string_pretty(&form)?)?;
    Ok(())
}

pub fn export(store: &dyn RecordStore, target: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    let bytes = store.export_csv()?;
    match target {
        Some(path) => {
            std::fs::write(path, &bytes)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "records exported");
        }
        None => out.write_all(&bytes)?,
    }
    Ok(())
}

pub fn list(store: &dyn RecordStore, out: &mut dyn Write) -> Result<()> {
    let records = store.load_all()?;
    if records.is_empty() {
        writeln!(out, "No stored evaluations.")?;
        return Ok(());
    }
    for r in records {
        writeln!(
            out,
            "{}  {}  NEWS {:>2} ({})  {}",
            r.id,
            r.timestamp,
            r.news,
            r.news_level,
            if r.requires_review { "REVIEW" } else { "-" }
        )?;
    }
    Ok(())
}

pub fn config_init(path: &Path, force: bool, out: &mut dyn Write) -> Result<()> {
    if path.exists() && !force {
        return Err(eyre!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    config::save_config(path, &BedsideConfig::default())?;
    writeln!(out, "Wrote {}", path.display())?;
    Ok(())
}

pub fn config_show(config: &BedsideConfig, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
    Ok(())
}

/// Store path from the command line, else from the config.
pub fn store_path(overridden: Option<PathBuf>, config: &BedsideConfig) -> PathBuf {
    overridden.unwrap_or_else(|| config.store_path.clone())
}
