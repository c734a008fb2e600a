//! One Converse round trip per report.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::operation::converse::ConverseOutput;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use tracing::{info, warn};
use uuid::Uuid;

use medibrief_core::models::patient::PatientRecord;
use medibrief_core::models::report::{GeneratedReport, RawReportText};
use medibrief_core::models::template::ReportTemplate;

use crate::attachments;
use crate::error::BedrockError;
use crate::prompt;
use crate::tokens;

/// Generate a report for `record`.
///
/// The request carries the template's system instruction, the formatted
/// patient record, and one image part per uploaded file. A reply with no
/// text is an error rather than an empty report.
pub async fn generate_report(
    client: &Client,
    model_id: &str,
    template: ReportTemplate,
    record: &PatientRecord,
) -> Result<GeneratedReport, BedrockError> {
    let report_id = Uuid::new_v4();
    info!(
        %report_id,
        model = model_id,
        %template,
        attachments = record.files.len(),
        "requesting report"
    );

    let mut content = Vec::with_capacity(record.files.len() + 1);
    content.push(ContentBlock::Text(prompt::format_patient_record(record)));
    for file in &record.files {
        content.push(attachments::image_block(file)?);
    }

    let message = Message::builder()
        .role(ConversationRole::User)
        .set_content(Some(content))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    let output = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(prompt::system_instruction(template)))
        .messages(message)
        .send()
        .await
        .map_err(|e| {
            let e = BedrockError::Invocation(e.into_service_error().to_string());
            warn!(%report_id, error = %e, "report request failed");
            e
        })?;

    let text = reply_text(&output)?;
    if text.trim().is_empty() {
        return Err(BedrockError::EmptyResponse);
    }

    let tokens = output
        .usage()
        .map(tokens::token_count)
        .unwrap_or_default();
    let usage = tokens::usage_for(model_id, tokens);
    info!(
        %report_id,
        input_tokens = usage.tokens.input,
        output_tokens = usage.tokens.output,
        cost_usd = usage.cost_usd,
        "report received"
    );

    Ok(GeneratedReport {
        id: report_id,
        template,
        model_id: model_id.to_string(),
        text: RawReportText::new(text),
        attachment_count: record.files.len(),
        usage,
        created_at: jiff::Timestamp::now(),
    })
}

/// Concatenate the text blocks of the assistant message.
fn reply_text(output: &ConverseOutput) -> Result<String, BedrockError> {
    let message = output
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("reply carries no message".to_string()))?;

    Ok(message
        .content()
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect())
}

