use std::sync::Arc;

use dxd_core::ContentService;
use dxd_graphql::auth::TokenProvider;
use dxd_graphql::{HttpGraphQlClient, TransportError};

use crate::config::DxdConfig;

/// Builds the content service over an HTTP GraphQL transport, attaching the
/// client-credentials token provider when credentials are configured.
pub fn build_content_service(
    config: &DxdConfig,
) -> Result<ContentService<HttpGraphQlClient>, TransportError> {
    let mut client =
        HttpGraphQlClient::new(config.graphql_endpoint.clone(), config.request_timeout)?;

    if let Some(credentials) = &config.credentials {
        let provider = TokenProvider::new(
            client.http(),
            credentials.token_url.clone(),
            credentials.client_id.clone(),
            credentials.client_secret.clone(),
        );
        client = client.with_token_provider(Arc::new(provider));
    }

    Ok(ContentService::new(client))
}
