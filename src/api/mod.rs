//! # API Module
//!
//! HTTP endpoints of the validation service.
//!
//! ## Endpoints
//!
//! - [`validate_playlist`] - `POST /api/validate-playlist`. Takes
//!   `{ "playlistUrl": string }` and answers with the normalized playlist
//!   metadata or a `{ "valid": false, "error": ... }` body.
//! - [`health`] - `GET /health`. Static liveness payload for load balancers and
//!   deployment checks.
//!
//! ## Status Codes
//!
//! | Outcome | Status |
//! |---|---|
//! | Valid playlist | 200 |
//! | Malformed URL or body | 400 |
//! | Playlist missing, private or inaccessible | 200 |
//! | Unexpected failure | 500 |
//!
//! Handlers receive the shared [`crate::spotify::SpotifyClient`] through an
//! [`axum::Extension`] layer installed by [`crate::server::router`].

mod health;
mod validate;

pub use health::health;
pub use validate::validate_playlist;
