use std::sync::LazyLock;

use base64::{Engine, engine::general_purpose::STANDARD};
use regex::Regex;

/// Matches `playlist/<id>` anywhere in a URL and captures the alphanumeric id.
pub static PLAYLIST_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"playlist/([a-zA-Z0-9]+)").unwrap());

/// Extracts the playlist id from a Spotify playlist URL.
///
/// Returns the first alphanumeric run directly following `playlist/`, or
/// `None` when the URL has no such segment.
///
/// # Example
///
/// ```
/// let id = extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=1");
/// assert_eq!(id, Some("37i9dQZF1DXcBWIGoYBM5M"));
/// ```
pub fn extract_playlist_id(url: &str) -> Option<&str> {
    PLAYLIST_ID_REGEX
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Builds the `Authorization` header value for HTTP Basic auth.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Builds the `Authorization` header value for a bearer token.
pub fn bearer_auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
