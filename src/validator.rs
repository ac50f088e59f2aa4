//! The validation pipeline: URL → playlist id → access token → playlist → summary.
//!
//! Each step is strictly sequential and nothing is shared between calls beyond
//! the HTTP connection pool inside [`SpotifyClient`].

use crate::{
    error::ValidationError,
    info,
    spotify::{PlaylistLookup, SpotifyClient},
    types::PlaylistSummary,
    utils,
};

/// Validates a playlist URL against the Spotify Web API.
///
/// A URL without a `playlist/<id>` segment is rejected before any outbound
/// request is made. A token is requested fresh for every call, and the
/// playlist endpoint is only called once a token has been obtained.
pub async fn validate_playlist(
    client: &SpotifyClient,
    playlist_url: &str,
) -> Result<PlaylistSummary, ValidationError> {
    let playlist_id =
        utils::extract_playlist_id(playlist_url).ok_or(ValidationError::InvalidUrl)?;

    info!("Validating playlist {}", playlist_id);

    let token = client.request_access_token().await?;

    match client.get_playlist(playlist_id, &token).await? {
        PlaylistLookup::Found(playlist) => {
            Ok(PlaylistSummary::from_playlist(playlist, playlist_id))
        }
        PlaylistLookup::NotFound => Err(ValidationError::NotFound),
        PlaylistLookup::Refused(status) => Err(ValidationError::Inaccessible(format!(
            "playlist endpoint responded with {}",
            status
        ))),
    }
}
