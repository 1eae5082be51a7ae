use base64::{engine::general_purpose::STANDARD, Engine};
use http::{header::AUTHORIZATION, HeaderMap};

use crate::params::Params;

/// Per-request client credentials. Extracted, used, then discarded,
/// never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub access_token: Option<String>,
}

impl Credentials {
    /// Credentials as supplied in the parameter set alone, ignoring headers.
    pub fn from_params(params: &Params) -> Self {
        Credentials {
            client_id: params.get("client_id").cloned(),
            client_secret: params.get("client_secret").cloned(),
            redirect_uri: params.get("redirect_uri").cloned(),
            access_token: params.get("access_token").cloned(),
        }
    }
}

pub trait CredentialExtractor: Send + Sync {
    /// Extraction never fails. Absent values stay unset and parameter
    /// validation is responsible for rejecting them later.
    fn extract(&self, headers: &HeaderMap, params: &Params) -> Credentials;
}

/// Extracts client credentials from an HTTP Basic `Authorization` header,
/// falling back to body/query parameters. Header wins when both are given.
pub struct BasicAuthExtractor;

impl CredentialExtractor for BasicAuthExtractor {
    fn extract(&self, headers: &HeaderMap, params: &Params) -> Credentials {
        let mut credentials = Credentials::from_params(params);
        if let Some((user, password)) = basic_credentials(headers) {
            credentials.client_id = Some(user);
            credentials.client_secret = Some(password);
        }
        credentials
    }
}

fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let encoded = headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Basic ")?;
    let decoded = String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_owned(), password.to_owned()))
}
