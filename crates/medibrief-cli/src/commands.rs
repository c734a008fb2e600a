use std::io::Write;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tracing::info;

use medibrief_bedrock::generator::{BedrockGenerator, ReportGenerator};
use medibrief_core::attachment::{AttachmentSet, mime_type_for_extension};
use medibrief_core::models::patient::PatientRecord;
use medibrief_core::models::template::ReportTemplate;
use medibrief_export::render::HtmlOptions;
use medibrief_export::{ExportFormat, ExportOptions};
use medibrief_markup::{GlyphSet, ReportParser};

use crate::aws;
use crate::config::{self, CredentialSource, MedibriefConfig};

/// Where and how a parsed report is written.
#[derive(Debug, Clone)]
pub struct OutputTarget {
    pub format: ExportFormat,
    /// Stdout when `None`.
    pub out: Option<PathBuf>,
}

pub async fn generate(
    config: &MedibriefConfig,
    patient: &Path,
    images: &[PathBuf],
    template: Option<ReportTemplate>,
    target: &OutputTarget,
) -> Result<()> {
    let mut record = load_patient(patient)?;

    // Previews live until the report has been written.
    let attachments = attach_images(images)?;
    record.files.extend(attachments.descriptors());
    record.validate()?;

    let template = template.unwrap_or(config.template);
    let sdk_config = aws::sdk_config(config).await;
    let generator = BedrockGenerator::from_config(&sdk_config, &config.model_id, template);

    let report = generator.generate(&record).await?;
    info!(
        report_id = %report.id,
        model = %report.model_id,
        cost_usd = report.usage.cost_usd,
        "report generated"
    );

    let parser = ReportParser::new(config.glyphs.clone());
    let bytes = render(&parser, report.text.as_str(), config, target.format)?;
    write_output(&bytes, target.out.as_deref())
}

/// Parse and export a raw report that is already on disk.
pub fn render_file(
    config: &MedibriefConfig,
    input: &Path,
    template: Option<ReportTemplate>,
    target: &OutputTarget,
) -> Result<()> {
    let raw = std::fs::read_to_string(input)
        .wrap_err_with(|| format!("failed to read report at {}", input.display()))?;

    let glyphs = match template {
        Some(t) => GlyphSet::for_template(t),
        None => config.glyphs.clone(),
    };
    let bytes = render(&ReportParser::new(glyphs), &raw, config, target.format)?;
    write_output(&bytes, target.out.as_deref())
}

/// Parse `raw` and export it with the configured styles.
pub fn render(
    parser: &ReportParser,
    raw: &str,
    config: &MedibriefConfig,
    format: ExportFormat,
) -> Result<Vec<u8>> {
    let blocks = parser.parse(raw);
    info!(blocks = blocks.len(), %format, "report parsed");

    let options = ExportOptions {
        html: HtmlOptions::default(),
        styles: config.styles.clone(),
    };
    Ok(medibrief_export::export(&blocks, format, &options)?)
}

pub fn load_patient(path: &Path) -> Result<PatientRecord> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read patient record at {}", path.display()))?;
    let record: PatientRecord = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("invalid patient record in {}", path.display()))?;
    Ok(record)
}

/// Read image files into an [`AttachmentSet`], typing them by extension.
pub fn attach_images(paths: &[PathBuf]) -> Result<AttachmentSet> {
    let mut attachments = AttachmentSet::new();

    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(mime_type_for_extension)
            .unwrap_or("application/octet-stream");
        let bytes = std::fs::read(path)
            .wrap_err_with(|| format!("failed to read image at {}", path.display()))?;

        let attachment = attachments.add(&name, mime_type, &bytes)?;
        info!(
            name = %name,
            mime_type,
            size = bytes.len(),
            preview = %attachment.preview_path().display(),
            "image attached"
        );
    }

    Ok(attachments)
}

fn write_output(bytes: &[u8], out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, bytes)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = bytes.len(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Options accepted by `config init`.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub region: Option<String>,
    pub model_id: Option<String>,
    pub template: Option<ReportTemplate>,
    pub profile: Option<String>,
    pub force: bool,
}

pub fn config_init(options: InitOptions) -> Result<()> {
    if config::has_config() && !options.force {
        return Err(eyre::eyre!(
            "config already exists at {}; pass --force to overwrite",
            config::config_path()?.display()
        ));
    }

    let mut config = MedibriefConfig::default();
    if let Some(region) = options.region {
        config.region = region;
    }
    if let Some(model_id) = options.model_id {
        config.model_id = model_id;
    }
    if let Some(template) = options.template {
        config.template = template;
    }
    if let Some(profile_name) = options.profile {
        config.credentials = CredentialSource::Profile { profile_name };
    }

    let path = config::save_config(&config)?;
    println!("Wrote {}", path.display());
    Ok(())
}

pub fn config_show() -> Result<()> {
    let path = config::config_path()?;
    let config = config::load_or_default()?;
    let info = config::config_info(&config, &path);
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
