use url::Url;

use crate::{error::StartupError, pem};

/// Immutable gateway configuration, built once per process and shared
/// read-only across requests.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub endpoint: Url,
    pub realm: String,
    /// PEM-framed public key of the identity provider.
    ///
    /// May be absent: such a deployment can still relay authorize/token
    /// requests but cannot verify issued tokens (degraded mode).
    pub public_key: Option<String>,
    pub authorize_url: Url,
    pub token_url: Url,
}

impl GatewayConfig {
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::new()
    }
}

/// Whether the gateway is usable with the given raw settings.
///
/// All three of endpoint, realm and public key must be configured for the
/// full authorize/token/verification surface to work, so a routing layer
/// should only mount the oauth endpoints when this returns true.
pub fn enabled(endpoint: Option<&str>, realm: Option<&str>, public_key: Option<&str>) -> bool {
    let present = |value: Option<&str>| value.is_some_and(|v| !v.is_empty());
    present(endpoint) && present(realm) && present(public_key)
}

pub struct GatewayConfigBuilder {
    endpoint: Option<String>,
    realm: Option<String>,
    public_key: Option<String>,
}

impl GatewayConfigBuilder {
    fn new() -> Self {
        GatewayConfigBuilder {
            endpoint: None,
            realm: None,
            public_key: None,
        }
    }

    /// Set the base url of the identity provider.
    ///
    /// The authorize and token urls are derived from it by appending
    /// `/oauth2/authorize` and `/oauth2/access_token`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the realm, appended to the token url as a `realm` query parameter.
    pub fn realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Set the raw public key material of the identity provider
    /// (base64 without PEM framing).
    pub fn public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    /// Construct a GatewayConfig.
    ///
    /// Pure data transformation, no network calls are made.
    pub fn build(self) -> Result<GatewayConfig, StartupError> {
        let endpoint = match self.endpoint.filter(|e| !e.is_empty()) {
            Some(endpoint) => endpoint,
            None => return Err(StartupError::MissingEndpoint),
        };
        let realm = match self.realm.filter(|r| !r.is_empty()) {
            Some(realm) => realm,
            None => return Err(StartupError::MissingRealm),
        };

        let parse = |url: String| {
            Url::parse(&url).map_err(|_| StartupError::InvalidEndpoint(url.clone()))
        };
        let base = endpoint.trim_end_matches('/');
        let endpoint = parse(endpoint.clone())?;
        let authorize_url = parse(format!("{}/oauth2/authorize", base))?;
        let mut token_url = parse(format!("{}/oauth2/access_token", base))?;
        token_url.query_pairs_mut().append_pair("realm", &realm);

        let public_key = self
            .public_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .map(pem::format_public_key)
            .transpose()?;

        Ok(GatewayConfig {
            endpoint,
            realm,
            public_key,
            authorize_url,
            token_url,
        })
    }
}

impl Default for GatewayConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
