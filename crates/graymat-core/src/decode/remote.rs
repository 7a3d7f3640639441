//! Decoding images named by URL.

use std::time::Duration;

use ureq::Agent;
use url::Url;

use super::luma::{decode_bytes, decode_file};
use crate::error::{ResourceError, Result};
use crate::GrayscaleImage;

/// Largest response body accepted from a server.
pub const MAX_RESPONSE_BYTES: u64 = 64 * 1024 * 1024;

/// Overall deadline for a fetch made by [`decode_url`].
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Decode the image named by `url`.
///
/// `file:` URLs are read from the local filesystem. `http:` and `https:`
/// URLs are fetched with a default agent (30 second deadline, proxy taken
/// from the environment); use [`decode_url_with`] to supply your own.
///
/// # Errors
///
/// Returns `ResourceError::Io` for a malformed URL, an unsupported scheme,
/// a transport failure or a non-success HTTP status, plus the errors of
/// [`decode_bytes`].
pub fn decode_url(url: &str) -> Result<GrayscaleImage> {
    let agent: Agent = Agent::config_builder()
        .timeout_global(Some(FETCH_TIMEOUT))
        .build()
        .into();
    decode_url_with(&agent, url)
}

/// Decode the image named by `url`, fetching `http(s):` URLs with `agent`.
pub fn decode_url_with(agent: &Agent, url: &str) -> Result<GrayscaleImage> {
    let parsed = Url::parse(url).map_err(|e| ResourceError::Io(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "file" => {
            let path = parsed
                .to_file_path()
                .map_err(|()| ResourceError::Io(format!("{url}: not a local file path")))?;
            decode_file(path)
        }
        "http" | "https" => decode_bytes(&fetch(agent, parsed.as_str())?),
        scheme => {
            Err(ResourceError::Io(format!("{url}: unsupported URL scheme '{scheme}'")).into())
        }
    }
}

fn fetch(agent: &Agent, url: &str) -> Result<Vec<u8>, ResourceError> {
    log::debug!("fetching {}", url);
    let transport = |e: ureq::Error| ResourceError::Io(format!("{url}: {e}"));

    let response = agent.get(url).call().map_err(transport)?;
    let mut body = response.into_body();
    let bytes = body
        .with_config()
        .limit(MAX_RESPONSE_BYTES)
        .read_to_vec()
        .map_err(transport)?;

    log::debug!("fetched {} bytes from {}", bytes.len(), url);
    Ok(bytes)
}

impl GrayscaleImage {
    /// Decode the image named by `url`. See [`decode_url`].
    pub fn from_url(url: &str) -> Result<GrayscaleImage> {
        decode_url(url)
    }
}
