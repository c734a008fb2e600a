use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use medibrief_bedrock::generator::DEFAULT_MODEL_ID;
use medibrief_core::models::template::ReportTemplate;
use medibrief_export::styles::DocumentStyles;
use medibrief_markup::GlyphSet;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedibriefConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub region: String,
    /// Bedrock model or inference profile. Added in v1.
    pub model_id: String,
    /// Section layout requested from the model. Added in v1.
    pub template: ReportTemplate,
    pub credentials: CredentialSource,
    #[serde(default)]
    pub styles: DocumentStyles,
    /// Glyphs the report parser recognizes.
    #[serde(default)]
    pub glyphs: GlyphSet,
    #[serde(default = "jiff::Timestamp::now")]
    pub created_at: jiff::Timestamp,
}

impl Default for MedibriefConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            template: ReportTemplate::default(),
            credentials: CredentialSource::DefaultChain,
            styles: DocumentStyles::default(),
            glyphs: GlyphSet::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    DefaultChain,
}

impl CredentialSource {
    /// Short name for display; never includes key material.
    pub fn kind(&self) -> &'static str {
        match self {
            CredentialSource::Inline {
                session_token: Some(_),
                ..
            } => "temporary",
            CredentialSource::Inline { .. } => "inline",
            CredentialSource::Profile { .. } => "profile",
            CredentialSource::DefaultChain => "default_chain",
        }
    }
}

/// Redacted config info, safe to print.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigInfo {
    pub path: String,
    pub config_version: u32,
    pub region: String,
    pub model_id: String,
    pub template: ReportTemplate,
    pub created_at: String,
    pub credential_type: String,
    pub profile_name: Option<String>,
    pub access_key_hint: Option<String>,
    pub heading_glyphs: Vec<String>,
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("medibrief"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<MedibriefConfig> {
    load_config_from(&config_path()?)
}

/// Load the config file, or defaults when none has been written yet.
pub fn load_or_default() -> eyre::Result<MedibriefConfig> {
    if has_config() {
        load_config()
    } else {
        tracing::debug!("no config file, using defaults");
        Ok(MedibriefConfig::default())
    }
}

pub fn load_config_from(path: &Path) -> eyre::Result<MedibriefConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

/// Parse config JSON, running migrations before deserializing.
pub fn parse_config(contents: &str) -> eyre::Result<MedibriefConfig> {
    let json: serde_json::Value = serde_json::from_str(contents)?;
    // Versions past u32 can only come from a newer build.
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
        .unwrap_or(0);

    let migrated = migrate(json, on_disk_version)?;
    let config: MedibriefConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update medibrief."
        ));
    }

    // v0 → v1: model and template became configurable
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("model_id")
            .or_insert(serde_json::Value::String(DEFAULT_MODEL_ID.to_string()));
        obj.entry("template").or_insert(serde_json::Value::String(
            ReportTemplate::default().as_str().to_string(),
        ));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added model_id, template)");
    }

    Ok(json)
}

pub fn save_config(config: &MedibriefConfig) -> eyre::Result<PathBuf> {
    save_config_to(&config_dir()?, config)
}

/// Write `config.json` into `dir` atomically, owner-only on Unix.
pub fn save_config_to(dir: &Path, config: &MedibriefConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}

pub fn config_info(config: &MedibriefConfig, path: &Path) -> ConfigInfo {
    let (profile_name, access_key_hint) = match &config.credentials {
        CredentialSource::Inline { access_key_id, .. } => {
            (None, Some(redact_access_key(access_key_id)))
        }
        CredentialSource::Profile { profile_name } => (Some(profile_name.clone()), None),
        CredentialSource::DefaultChain => (None, None),
    };

    ConfigInfo {
        path: path.display().to_string(),
        config_version: config.config_version,
        region: config.region.clone(),
        model_id: config.model_id.clone(),
        template: config.template,
        created_at: config.created_at.to_string(),
        credential_type: config.credentials.kind().to_string(),
        profile_name,
        access_key_hint,
        heading_glyphs: config
            .glyphs
            .glyphs(medibrief_markup::GlyphRole::Heading)
            .map(str::to_string)
            .collect(),
    }
}

fn redact_access_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}

