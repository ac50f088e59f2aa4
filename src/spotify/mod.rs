//! # Spotify Integration Module
//!
//! Thin client for the two Spotify endpoints the validator needs:
//!
//! ```text
//! Validator
//!     ↓
//! SpotifyClient
//!     ├── auth      POST {token_url}               client-credentials grant
//!     └── playlist  GET  {api_url}/playlists/{id}  bearer-authorized lookup
//!          ↓
//! reqwest (shared connection pool, bounded timeouts)
//! ```
//!
//! Tokens are requested fresh for every validation and never cached.

use reqwest::Client;

use crate::config::{Config, Credentials};

pub mod auth;
pub mod playlist;

pub use playlist::PlaylistLookup;

/// Shared handle to the Spotify Web API.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    credentials: Credentials,
    token_url: String,
    api_url: String,
}

impl SpotifyClient {
    /// Creates a client from the startup configuration.
    ///
    /// Every request issued through the client is bounded by
    /// `config.request_timeout`.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .connect_timeout(config.request_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(SpotifyClient {
            http,
            credentials: config.credentials.clone(),
            token_url: config.token_url.clone(),
            api_url: config.api_url.clone(),
        })
    }

    fn playlist_url(&self, playlist_id: &str) -> String {
        format!("{}/playlists/{}", self.api_url, playlist_id)
    }
}
