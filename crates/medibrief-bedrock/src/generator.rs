use std::future::Future;

use aws_sdk_bedrockruntime::Client;
use medibrief_core::models::patient::PatientRecord;
use medibrief_core::models::report::GeneratedReport;
use medibrief_core::models::template::ReportTemplate;

use crate::error::BedrockError;
use crate::converse;

/// Default model: a cross-region inference profile with vision support.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Turns a patient record into raw report text.
pub trait ReportGenerator {
    fn generate(
        &self,
        record: &PatientRecord,
    ) -> impl Future<Output = Result<GeneratedReport, BedrockError>> + Send;
}

/// [`ReportGenerator`] backed by the Bedrock Converse API.
#[derive(Debug, Clone)]
pub struct BedrockGenerator {
    client: Client,
    model_id: String,
    template: ReportTemplate,
}

impl BedrockGenerator {
    pub fn new(client: Client, model_id: impl Into<String>, template: ReportTemplate) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            template,
        }
    }

    pub fn from_config(
        config: &aws_config::SdkConfig,
        model_id: impl Into<String>,
        template: ReportTemplate,
    ) -> Self {
        Self::new(Client::new(config), model_id, template)
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn template(&self) -> ReportTemplate {
        self.template
    }
}

impl ReportGenerator for BedrockGenerator {
    async fn generate(&self, record: &PatientRecord) -> Result<GeneratedReport, BedrockError> {
        converse::generate_report(&self.client, &self.model_id, self.template, record).await
    }
}
