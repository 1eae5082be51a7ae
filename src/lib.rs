#![doc = include_str!("../README.md")]

/// [Gateway](crate::gateway::Gateway) is the struct orchestrating the two
/// entry points: it validates request parameters, authorizes the calling
/// client against a backend service and relays the request to the identity
/// provider.
pub mod gateway;

/// Builder used to construct a [Gateway](crate::gateway::Gateway) instance.
///
/// # Example
///
/// ```no_run
/// use oauth2_gateway::config::GatewayConfig;
/// use oauth2_gateway::gateway::Gateway;
///
/// let config = GatewayConfig::builder()
///     .endpoint("https://idp.example.com/openam")
///     .realm("internal")
///     .public_key("MIIBIjANBgkqhkiG...")
///     .build()
///     .expect("invalid gateway configuration");
/// let gateway = Gateway::builder()
///     .config(config)
///     .backend_url("https://backend.internal/authorize")
///     .build()
///     .expect("failed to build gateway");
/// ```
pub mod builder;

/// Immutable [GatewayConfig](crate::config::GatewayConfig), resolved once
/// at startup from identity-provider endpoint, realm and raw public key
/// material.
pub mod config;

/// Per-request [Credentials](crate::credentials::Credentials) and their
/// extraction from a Basic `Authorization` header or body parameters.
pub mod credentials;

/// RFC 6749 parameter validation against the static per-grant-type and
/// per-response-type requirement tables.
pub mod params;

/// [BackendAuthorizer](crate::backend::BackendAuthorizer) gates every
/// request against an external authorization service before anything is
/// forwarded to the identity provider.
pub mod backend;

/// Signature verification of issued tokens, producing
/// [VerifiedClaims](crate::verify::VerifiedClaims) for metering consumers.
pub mod verify;

/// Terminal [tower services](https://docs.rs/tower/latest/tower/trait.Service.html)
/// exposing the two entry points to a routing layer.
pub mod endpoint;

/// Uniform success/error response serialization.
pub mod response;

/// Error types for startup, validation and token verification failures.
pub mod error;

mod pem;
