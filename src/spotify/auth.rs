use reqwest::header::AUTHORIZATION;

use crate::{error::TokenError, types::AccessToken, utils};

use super::SpotifyClient;

impl SpotifyClient {
    /// Requests an app access token via the client-credentials grant.
    ///
    /// Sends `grant_type=client_credentials` form-encoded to the token
    /// endpoint, authenticated with HTTP Basic auth built from the configured
    /// client id and secret.
    ///
    /// # Returns
    ///
    /// - `Ok(String)` - Bearer token for the Web API
    /// - `Err(TokenError::Request)` - Network error or timeout, also while reading the body
    /// - `Err(TokenError::Rejected)` - Token endpoint answered with an error status
    /// - `Err(TokenError::MissingAccessToken)` - Body was not JSON or had no usable `access_token`
    ///
    /// # API Endpoint
    ///
    /// `POST https://accounts.spotify.com/api/token` by default.
    pub async fn request_access_token(&self) -> Result<String, TokenError> {
        let res = self
            .http
            .post(&self.token_url)
            .header(
                AUTHORIZATION,
                utils::basic_auth_header(
                    &self.credentials.client_id,
                    &self.credentials.client_secret,
                ),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(TokenError::Rejected(status));
        }

        // Body read failures (timeouts, resets) are transport errors
        let body = res.bytes().await?;
        let token: AccessToken =
            serde_json::from_slice(&body).map_err(|_| TokenError::MissingAccessToken)?;

        token
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(TokenError::MissingAccessToken)
    }
}
