use reqwest::{StatusCode, header::AUTHORIZATION};

use crate::{types::SpotifyPlaylist, utils};

use super::SpotifyClient;

/// Result of looking a playlist up by id.
#[derive(Debug)]
pub enum PlaylistLookup {
    Found(SpotifyPlaylist),
    /// Upstream answered 404: the playlist does not exist or is private.
    NotFound,
    /// Upstream answered any other non-success status.
    Refused(StatusCode),
}

impl SpotifyClient {
    /// Fetches a playlist by id with a bearer token.
    ///
    /// Non-success statuses are returned as [`PlaylistLookup`] variants.
    /// Only transport failures and undecodable success bodies are errors.
    ///
    /// # API Endpoint
    ///
    /// `GET /playlists/{playlist_id}`
    pub async fn get_playlist(
        &self,
        playlist_id: &str,
        token: &str,
    ) -> Result<PlaylistLookup, reqwest::Error> {
        let res = self
            .http
            .get(self.playlist_url(playlist_id))
            .header(AUTHORIZATION, utils::bearer_auth_header(token))
            .send()
            .await?;

        match res.status() {
            status if status.is_success() => Ok(PlaylistLookup::Found(res.json().await?)),
            StatusCode::NOT_FOUND => Ok(PlaylistLookup::NotFound),
            status => Ok(PlaylistLookup::Refused(status)),
        }
    }
}
