use std::sync::Arc;

use reqwest::Client;
use url::Url;

use crate::{
    backend::{BackendAuthorizer, ServiceAuthorizer},
    config::GatewayConfig,
    credentials::{BasicAuthExtractor, CredentialExtractor},
    error::StartupError,
    gateway::Gateway,
};

#[derive(Default)]
pub struct GatewayBuilder {
    config: Option<GatewayConfig>,
    backend_url: Option<String>,
    backend: Option<Arc<dyn BackendAuthorizer>>,
    credential_extractor: Option<Arc<dyn CredentialExtractor>>,
    accept_invalid_certs: bool,
}

impl GatewayBuilder {
    pub(crate) fn new() -> Self {
        GatewayBuilder::default()
    }

    /// Set the gateway configuration. Required.
    pub fn config(mut self, config: GatewayConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the url of the backend authorization service.
    ///
    /// Required unless a custom [BackendAuthorizer] is provided.
    pub fn backend_url(mut self, backend_url: impl Into<String>) -> Self {
        self.backend_url = Some(backend_url.into());
        self
    }

    /// Replace the HTTP backend authorizer with a custom implementation.
    pub fn backend_authorizer(mut self, backend: Arc<dyn BackendAuthorizer>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Replace the default Basic-or-body credential extractor.
    pub fn credential_extractor(mut self, extractor: Arc<dyn CredentialExtractor>) -> Self {
        self.credential_extractor = Some(extractor);
        self
    }

    /// Disable TLS certificate verification on outbound calls.
    ///
    /// Intended for deployments fronting an identity provider with
    /// self-signed certificates. Off by default.
    pub fn danger_accept_invalid_certs(mut self, accept_invalid_certs: bool) -> Self {
        self.accept_invalid_certs = accept_invalid_certs;
        self
    }

    /// Construct a Gateway, failing fast on incomplete configuration.
    pub fn build(self) -> Result<Gateway, StartupError> {
        let config = self.config.ok_or(StartupError::MissingEndpoint)?;
        let http_client = Client::builder()
            // Upstream responses are relayed verbatim, so redirects must
            // reach the caller instead of being followed by the gateway.
            .redirect(reqwest::redirect::Policy::none())
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()
            .map_err(|e| StartupError::HttpClientInit(e.to_string()))?;

        let backend = match self.backend {
            Some(backend) => backend,
            None => {
                let backend_url = self.backend_url.ok_or(StartupError::MissingBackend)?;
                let backend_url = Url::parse(&backend_url)
                    .map_err(|_| StartupError::InvalidEndpoint(backend_url.clone()))?;
                Arc::new(ServiceAuthorizer::new(http_client.clone(), backend_url))
            }
        };

        Ok(Gateway::new(
            config,
            http_client,
            backend,
            self.credential_extractor
                .unwrap_or_else(|| Arc::new(BasicAuthExtractor)),
        ))
    }
}
