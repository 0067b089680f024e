use url::Url;

use crate::error::SignError;

/// Parse a request URI, insisting on a scheme and a non-empty host.
pub(crate) fn parse_uri(uri: &str) -> Result<Url, SignError> {
    let url = Url::parse(uri).map_err(|e| SignError::malformed_uri(uri, e))?;
    if url.host_str().map_or(true, str::is_empty) {
        return Err(SignError::malformed_uri(uri, "missing host"));
    }
    Ok(url)
}

/// Base string URI (RFC 5849 section 3.4.1.2).
///
/// Scheme and host are lowercased, the default port is dropped, and the
/// query and fragment are removed. Path case is preserved; the path is
/// taken in `url`'s normalized form, so `.` and `..` segments are resolved.
pub fn normalize_url(uri: &str) -> Result<String, SignError> {
    parse_uri(uri).map(|url| url_to_endpoint(&url))
}

pub(crate) fn url_to_endpoint(url: &Url) -> String {
    // `Url` already reports `None` for a port equal to the scheme default.
    let scheme = url.scheme().to_ascii_lowercase();
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    match url.port() {
        Some(port) => format!("{}://{}:{}{}", scheme, host, port, url.path()),
        None => format!("{}://{}{}", scheme, host, url.path()),
    }
}

/// Decoded query parameters, in order and with duplicates kept.
pub(crate) fn url_to_queries(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
