use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_bedrockruntime::config::Credentials;

use crate::config::{CredentialSource, MedibriefConfig};

/// Load the SDK config for the configured region and credential source.
pub async fn sdk_config(config: &MedibriefConfig) -> SdkConfig {
    let loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()));

    let loader = match &config.credentials {
        CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token,
        } => loader.credentials_provider(Credentials::new(
            access_key_id,
            secret_access_key,
            session_token.clone(),
            None,
            "medibrief-config",
        )),
        CredentialSource::Profile { profile_name } => loader.profile_name(profile_name),
        CredentialSource::DefaultChain => loader,
    };

    tracing::debug!(
        region = %config.region,
        credentials = config.credentials.kind(),
        "loading AWS config"
    );
    loader.load().await
}
