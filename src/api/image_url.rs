use base64::{engine::general_purpose, Engine as _};

use super::models::{AuthToken, ImageRequest};
use crate::config::IMAGE_ENDPOINT;

/// Serializes the request the way the handler expects: compact JSON, then
/// padded standard base64.
pub fn encode_request(request: &ImageRequest) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(request)?;
    Ok(general_purpose::STANDARD.encode(json))
}

/// `name=value` pairs joined with `&`, in storage order.
pub fn token_query(tokens: &[AuthToken]) -> String {
    tokens
        .iter()
        .map(|token| format!("{}={}", token.param_name(), token.value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Full thumbnail URL for `key`. The `?` is always present, even with no tokens.
pub fn image_url(key: &str, size: u32, tokens: &[AuthToken]) -> Result<String, serde_json::Error> {
    let payload = encode_request(&ImageRequest::thumbnail(key, size))?;
    Ok(format!("{IMAGE_ENDPOINT}/{payload}?{}", token_query(tokens)))
}
