use std::path::{Path, PathBuf};

use bedside_alert::ContactConfig;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";
const STORE_FILE: &str = "evaluations.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedsideConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// CSV file evaluations are appended to.
    pub store_path: PathBuf,
    /// Who to reach when an evaluation needs review. Added in v1.
    #[serde(default)]
    pub contact: ContactConfig,
    /// Default output of `evaluate`: text, html or json.
    #[serde(default = "default_report_format")]
    pub report_format: String,
}

fn default_report_format() -> String {
    "text".to_string()
}

impl Default for BedsideConfig {
    fn default() -> Self {
        let store_path = dirs::data_dir()
            .map(|d| d.join("bedside").join(STORE_FILE))
            .unwrap_or_else(|| PathBuf::from(STORE_FILE));
        Self {
            config_version: CURRENT_VERSION,
            store_path,
            contact: ContactConfig::default(),
            report_format: default_report_format(),
        }
    }
}

/// Default location: `<config dir>/bedside/config.json`.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("bedside").join(CONFIG_FILE))
}

pub fn load_config(path: &Path) -> eyre::Result<BedsideConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: BedsideConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Load the config at `path`, falling back to defaults when the file does
/// not exist yet.
pub fn load_or_default(path: &Path) -> eyre::Result<BedsideConfig> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "no config file, using defaults");
        return Ok(BedsideConfig::default());
    }
    load_config(path)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update bedside."
        ));
    }

    // v0 → v1: flat `phone`/`email` keys move under `contact`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        let phone = obj.remove("phone");
        let email = obj.remove("email");
        let mut contact = serde_json::Map::new();
        if let Some(phone) = phone {
            contact.insert("phone".to_string(), phone);
        }
        if let Some(email) = email {
            contact.insert("email".to_string(), email);
        }
        obj.entry("contact")
            .or_insert(serde_json::Value::Object(contact));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (contact block)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(path: &Path, config: &BedsideConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Contact details stay private to the user on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
