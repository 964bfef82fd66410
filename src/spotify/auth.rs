use reqwest::Client;

use crate::{config, types::Token};

/// Performs the OAuth 2.0 client-credentials token exchange with Spotify.
///
/// Sends the application's client ID and secret to the configured token
/// endpoint and returns the short-lived access token Spotify issues for
/// public-data requests. This is the only authentication step the tool
/// performs; there is no user authorization, no refresh token and no
/// token persistence.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token with type and expiry metadata
/// - `Err(reqwest::Error)` - Network error, HTTP error status, or a
///   malformed token response
///
/// # Credentials
///
/// The client ID and secret are read from the environment via
/// [`config::spotify_client_id`] and [`config::spotify_client_secret`]
/// and sent as HTTP Basic authentication, as required by the Spotify
/// accounts service for this grant type.
///
/// # Failure Behavior
///
/// The exchange is attempted exactly once. A failure here is fatal for
/// the run: the caller terminates the program with a visible error, since
/// no API request can be made without a token.
///
/// # Example
///
/// ```
/// let token = request_token().await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token() -> Result<Token, reqwest::Error> {
    let client = Client::new();
    let response = client
        .post(&config::spotify_apitoken_url())
        .basic_auth(
            config::spotify_client_id(),
            Some(config::spotify_client_secret()),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?;

    let token = response.json::<Token>().await?;

    Ok(token)
}
