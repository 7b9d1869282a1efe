//! Blocking HTTP transport.
//!
//! Uses the curl crate (libcurl) for single GETs whose body is buffered in
//! memory and for JSON POSTs to the completion API. Everything runs on the
//! calling thread.

mod error;

pub use error::FetchError;

use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_REDIRECTS: u32 = 10;

/// Status and body of a completed exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn easy_for(url: &str, timeout: Duration) -> Result<curl::easy::Easy, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    easy.connect_timeout(timeout.min(CONNECT_TIMEOUT))?;
    easy.timeout(timeout)?;
    Ok(easy)
}

fn perform(mut easy: curl::easy::Easy) -> Result<HttpResponse, FetchError> {
    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }
    let status = easy.response_code()?;
    Ok(HttpResponse { status, body })
}

/// Performs a GET with default headers and returns the full body.
///
/// Follows redirects. Any non-2xx final status is an error.
pub fn get(url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError> {
    let easy = easy_for(url, timeout)?;
    let resp = perform(easy)?;
    if !resp.is_success() {
        return Err(FetchError::Http(resp.status));
    }
    tracing::debug!("GET {} -> {} ({} bytes)", url, resp.status, resp.body.len());
    Ok(resp.body)
}

/// POSTs `body` as `application/json` with extra `headers` ("Name: value" pairs).
///
/// The status is returned as-is; callers decide what counts as success.
pub fn post_json(
    url: &str,
    headers: &[(&str, &str)],
    body: &[u8],
    timeout: Duration,
) -> Result<HttpResponse, FetchError> {
    let mut easy = easy_for(url, timeout)?;
    easy.post(true)?;
    easy.post_fields_copy(body)?;

    let mut list = curl::easy::List::new();
    list.append("Content-Type: application/json")?;
    // Send the body immediately instead of waiting for `100 Continue`.
    list.append("Expect:")?;
    for (k, v) in headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    easy.http_headers(list)?;

    let resp = perform(easy)?;
    tracing::debug!("POST {} -> {}", url, resp.status);
    Ok(resp)
}
