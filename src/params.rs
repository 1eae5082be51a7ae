use std::collections::HashMap;

use url::form_urlencoded;

use crate::error::ErrorCode;

/// Query or form parameters of a single request.
pub type Params = HashMap<String, String>;

/// Required parameters per grant type, in their fixed check order.
const GRANT_TYPES: &[(&str, &[&str])] = &[
    (
        "authorization_code",
        &["client_id", "client_secret", "code", "redirect_uri"],
    ),
    (
        "password",
        &["client_id", "client_secret", "username", "password"],
    ),
    ("client_credentials", &["client_id", "client_secret"]),
];

/// Required parameters per response type, in their fixed check order.
const RESPONSE_TYPES: &[(&str, &[&str])] = &[
    ("code", &["client_id", "redirect_uri"]),
    ("token", &["client_id", "redirect_uri"]),
    ("token id_token", &["client_id", "redirect_uri", "nonce"]),
];

/// Parse a form/query encoded byte string into a parameter map.
///
/// Later occurrences of a key overwrite earlier ones.
pub fn parse(input: &[u8]) -> Params {
    form_urlencoded::parse(input)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Check that all parameters required for the declared `response_type`
/// are present and non-empty.
pub fn check_authorize_params(params: &Params) -> Result<(), ErrorCode> {
    check(
        params,
        "response_type",
        RESPONSE_TYPES,
        ErrorCode::UnsupportedResponseType,
    )
}

/// Check that all parameters required for the declared `grant_type`
/// are present and non-empty.
pub fn check_token_params(params: &Params) -> Result<(), ErrorCode> {
    check(
        params,
        "grant_type",
        GRANT_TYPES,
        ErrorCode::UnsupportedGrantType,
    )
}

fn check(
    params: &Params,
    type_field: &str,
    spec: &[(&str, &[&str])],
    unsupported: ErrorCode,
) -> Result<(), ErrorCode> {
    let declared = params
        .get(type_field)
        .filter(|value| !value.is_empty())
        .ok_or(ErrorCode::InvalidRequest)?;
    let required = spec
        .iter()
        .find(|(name, _)| *name == declared.as_str())
        .map(|(_, required)| *required)
        .ok_or(unsupported)?;
    for name in required {
        if params.get(*name).filter(|value| !value.is_empty()).is_none() {
            return Err(ErrorCode::InvalidRequest);
        }
    }
    Ok(())
}
