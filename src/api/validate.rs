use axum::{
    Extension,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};

use crate::{
    error::ValidationError,
    spotify::SpotifyClient,
    success,
    types::{ValidationRequest, ValidationResult},
    validator, warning,
};

/// `POST /api/validate-playlist`
///
/// Always answers with a JSON body. A body that is not JSON or has no string
/// `playlistUrl` is treated like a URL without a playlist id.
pub async fn validate_playlist(
    Extension(client): Extension<SpotifyClient>,
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warning!("Rejected validation request: {}", rejection.body_text());
            return ValidationError::InvalidUrl.into_response();
        }
    };

    match validator::validate_playlist(&client, &request.playlist_url).await {
        Ok(summary) => {
            success!("Playlist {} is valid", summary.playlist_id);
            Json(ValidationResult::valid(summary)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
