use std::path::PathBuf;

use medibrief_cli::commands::{attach_images, load_patient, render};
use medibrief_cli::config::MedibriefConfig;
use medibrief_core::error::CoreError;
use medibrief_core::models::template::ReportTemplate;
use medibrief_export::ExportFormat;
use medibrief_markup::{GlyphSet, ReportParser};

const RAW: &str = "\u{1F9FE} **Patient Summary**\n- **Fever** for two days\n---\nStay strong \u{1F4AA}";

#[test]
fn render_text_uses_configured_glyphs() {
    let config = MedibriefConfig::default();
    let parser = ReportParser::new(config.glyphs.clone());

    let bytes = render(&parser, RAW, &config, ExportFormat::Text).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("\u{1F9FE} Patient Summary\n\u{2022} Fever for two days\n"));
}

#[test]
fn render_without_heading_glyphs_keeps_text() {
    let config = MedibriefConfig::default();
    let parser = ReportParser::new(GlyphSet::empty());

    let bytes = render(&parser, RAW, &config, ExportFormat::Text).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("\u{1F9FE} Patient Summary\n"));
}

#[test]
fn render_html_and_docx() {
    let config = MedibriefConfig::default();
    let parser = ReportParser::new(GlyphSet::for_template(ReportTemplate::Comprehensive));

    let html = render(&parser, RAW, &config, ExportFormat::Html).unwrap();
    assert!(String::from_utf8(html).unwrap().contains("<strong>Fever</strong>"));

    let docx = render(&parser, RAW, &config, ExportFormat::Docx).unwrap();
    assert_eq!(&docx[..2], b"PK");
}

#[test]
fn images_are_typed_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("scan.PNG");
    std::fs::write(&png, [0x89, b'P', b'N', b'G']).unwrap();

    let attachments = attach_images(&[png]).unwrap();
    assert_eq!(attachments.len(), 1);

    let files = attachments.descriptors();
    assert_eq!(files[0].name, "scan.PNG");
    assert_eq!(files[0].mime_type, "image/png");
}

#[test]
fn unsupported_images_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("labs.pdf");
    std::fs::write(&pdf, b"%PDF-1.7").unwrap();

    let err = attach_images(&[pdf]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CoreError>(),
        Some(CoreError::UnsupportedFileType { .. })
    ));
}

#[test]
fn missing_image_is_an_error() {
    assert!(attach_images(&[PathBuf::from("/nonexistent/scan.png")]).is_err());
}

#[test]
fn patient_record_loads_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patient.json");
    std::fs::write(
        &path,
        r#"{ "name": "Asha", "age": 34, "symptoms": ["Fever", "Cough"], "symptom_intensity": 6 }"#,
    )
    .unwrap();

    let record = load_patient(&path).unwrap();
    assert_eq!(record.name, "Asha");
    assert_eq!(record.age, Some(34));
    assert_eq!(record.symptoms.len(), 2);
    assert_eq!(record.symptom_intensity.map(|i| i.get()), Some(6));
}

#[test]
fn invalid_intensity_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patient.json");
    std::fs::write(&path, r#"{ "symptom_intensity": 11 }"#).unwrap();

    assert!(load_patient(&path).is_err());
}
