use std::{error::Error, fmt::Display};

/// Fatal configuration problems, surfaced before any request is served.
#[derive(Clone, Debug, PartialEq)]
pub enum StartupError {
    MissingEndpoint,
    MissingRealm,
    MissingPublicKey,
    MissingBackend,
    InvalidEndpoint(String),
    HttpClientInit(String),
}

impl Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::MissingEndpoint => write!(f, "missing endpoint configuration"),
            StartupError::MissingRealm => write!(f, "missing realm"),
            StartupError::MissingPublicKey => write!(f, "missing public key"),
            StartupError::MissingBackend => write!(f, "missing backend configuration"),
            StartupError::InvalidEndpoint(url) => write!(f, "invalid endpoint url: {}", url),
            StartupError::HttpClientInit(reason) => {
                write!(f, "failed to initialize http client: {}", reason)
            }
        }
    }
}
impl Error for StartupError {}

/// OAuth2 error codes written into the `{"error": <code>}` envelope.
///
/// `Display` renders the wire representation from RFC 6749.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidRequest,
    UnsupportedResponseType,
    UnsupportedGrantType,
    InvalidClient,
    ServerError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "invalid_request",
            ErrorCode::UnsupportedResponseType => "unsupported_response_type",
            ErrorCode::UnsupportedGrantType => "unsupported_grant_type",
            ErrorCode::InvalidClient => "invalid_client",
            ErrorCode::ServerError => "server_error",
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// JWT signature verification failures.
///
/// No claim extracted from the token may be trusted when this is returned.
#[derive(Clone, Debug, PartialEq)]
pub enum VerifyError {
    InvalidKey,
    NotVerified {
        reason: jsonwebtoken::errors::ErrorKind,
    },
}

impl Display for VerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JWT not verified")
    }
}
impl Error for VerifyError {}
