use crate::error::StartupError;

const HEADER: &str = "-----BEGIN PUBLIC KEY-----";
const FOOTER: &str = "-----END PUBLIC KEY-----";
const LINE_WIDTH: usize = 64;

/// Wrap raw base64 key material into the PEM framing expected by the JWT
/// verifier.
///
/// The body is split into lines of exactly 64 characters, with the last line
/// possibly shorter. There is no trailing newline after the footer.
pub fn format_public_key(raw: &str) -> Result<String, StartupError> {
    if raw.is_empty() {
        return Err(StartupError::MissingPublicKey);
    }
    let mut pem = String::with_capacity(HEADER.len() + FOOTER.len() + raw.len() + raw.len() / LINE_WIDTH + 2);
    pem.push_str(HEADER);
    for chunk in raw.as_bytes().chunks(LINE_WIDTH) {
        pem.push('\n');
        pem.push_str(&String::from_utf8_lossy(chunk));
    }
    pem.push('\n');
    pem.push_str(FOOTER);
    Ok(pem)
}
