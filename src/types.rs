use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Body of `POST /api/validate-playlist`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    pub playlist_url: String,
}

/// Token endpoint response for the client-credentials grant.
///
/// Only `access_token` matters. It is optional so a malformed answer can be
/// reported instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyPlaylist {
    pub name: String,
    pub description: Option<String>,
    pub tracks: PlaylistTracks,
    pub owner: PlaylistOwner,
    pub images: Option<Vec<Image>>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracks {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

/// Normalized metadata of a playlist that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub name: String,
    pub description: String,
    pub tracks: u64,
    pub owner: Option<String>,
    pub image: Option<String>,
    pub external_url: Option<String>,
    #[serde(rename = "playlistId")]
    pub playlist_id: String,
}

impl PlaylistSummary {
    pub fn from_playlist(playlist: SpotifyPlaylist, playlist_id: &str) -> Self {
        let image = playlist
            .images
            .and_then(|images| images.into_iter().next())
            .map(|image| image.url)
            .filter(|url| !url.is_empty());

        PlaylistSummary {
            name: playlist.name,
            description: playlist.description.unwrap_or_default(),
            tracks: playlist.tracks.total,
            owner: playlist.owner.display_name,
            image,
            external_url: playlist.external_urls.spotify,
            playlist_id: playlist_id.to_string(),
        }
    }
}

/// JSON payload returned by the validation endpoint.
///
/// Valid results carry the playlist metadata, invalid ones only the error
/// message. Both shapes carry the `valid` flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidationResult {
    Valid(ValidPlaylist),
    Invalid(InvalidPlaylist),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidPlaylist {
    valid: bool,
    #[serde(flatten)]
    pub playlist: PlaylistSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidPlaylist {
    valid: bool,
    pub error: String,
}

impl ValidationResult {
    pub fn valid(playlist: PlaylistSummary) -> Self {
        ValidationResult::Valid(ValidPlaylist {
            valid: true,
            playlist,
        })
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        ValidationResult::Invalid(InvalidPlaylist {
            valid: false,
            error: error.into(),
        })
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

#[derive(Tabled)]
pub struct ValidationTableRow {
    pub field: String,
    pub value: String,
}

impl ValidationTableRow {
    pub fn new(field: &str, value: impl Into<String>) -> Self {
        ValidationTableRow {
            field: field.to_string(),
            value: value.into(),
        }
    }
}
