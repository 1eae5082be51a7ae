use bytes::Bytes;
use http::{header::CONTENT_TYPE, HeaderMap, HeaderValue, Response, StatusCode};
use http_body_util::Full;

use crate::error::ErrorCode;

/// Terminal response of a gateway entry point. Once built and returned,
/// no further processing of the request takes place.
pub type GatewayResponse = Response<Full<Bytes>>;

/// Build a response from status, body and headers.
pub fn respond(status: StatusCode, body: Bytes, headers: HeaderMap) -> GatewayResponse {
    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

/// Build an error response carrying the `{"error": <code>}` JSON envelope.
pub fn respond_error(status: StatusCode, code: ErrorCode) -> GatewayResponse {
    let body = serde_json::json!({ "error": code.as_str() }).to_string();
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/json;charset=UTF-8"),
    );
    respond(status, Bytes::from(body), headers)
}
