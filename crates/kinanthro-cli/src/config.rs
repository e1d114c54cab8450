use std::path::{Path, PathBuf};

use kinanthro_composition::profile::{ActivityLevel, FormulaProfile};
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinanthroConfig {
    /// Schema version; 1 is the first released shape.
    pub config_version: u32,
    /// Profile used when an input file does not name one.
    pub default_profile: FormulaProfile,
    #[serde(default)]
    pub default_activity: ActivityLevel,
    /// Correct growth ages for prematurity when a gestational age is given.
    pub prematurity_correction: bool,
    /// Emit logs as JSON lines.
    pub json_logs: bool,
    pub created_at: jiff::Timestamp,
}

impl KinanthroConfig {
    pub fn new() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            default_profile: FormulaProfile::General,
            default_activity: ActivityLevel::default(),
            prematurity_correction: true,
            json_logs: false,
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl Default for KinanthroConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("kinanthro"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(FILE_NAME))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

/// The saved config, or defaults when none has been written yet.
pub fn load_or_default() -> eyre::Result<KinanthroConfig> {
    let path = config_path()?;
    if path.exists() {
        load_config_from(&path)
    } else {
        Ok(KinanthroConfig::new())
    }
}

pub fn load_config_from(path: &Path) -> eyre::Result<KinanthroConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so migrations run before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: KinanthroConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if !json.is_object() {
        return Err(eyre::eyre!("config is not a JSON object"));
    }
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update kinanthro."
        ));
    }
    if from_version < 1 {
        return Err(eyre::eyre!(
            "config has no config_version; it was not written by kinanthro. \
             Run `kinanthro init --force` to replace it."
        ));
    }

    // v1 is the first schema. Later bumps add one `if from_version < N`
    // block here, in order.

    Ok(json)
}

pub fn save_config(config: &KinanthroConfig) -> eyre::Result<PathBuf> {
    save_config_to(config, &config_dir()?)
}

/// Write `config` into `dir`, replacing any existing file atomically.
pub fn save_config_to(config: &KinanthroConfig, dir: &Path) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(FILE_NAME);
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join(format!("{FILE_NAME}.tmp"));
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}
