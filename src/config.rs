//! Configuration management for the Top Songs Playlist CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files, along with the fixed constants
//! that define which playlist the tool looks for. It provides a centralized
//! way to manage application configuration including Spotify API credentials
//! and endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory

use dotenv;
use std::{env, path::PathBuf};

/// Display name of the playlist the tool searches for. The match against a
/// user's playlists is exact and case-sensitive.
pub const YEAR_PLAYLIST_NAME: &str = "Your Top Songs 2017";

/// The "Your Top Songs 2017" playlist is actually owned by the `spotify`
/// platform account; users merely follow it. Track requests must address
/// this owner, not the queried username.
pub const YEAR_PLAYLIST_OWNER: &str = "spotify";

/// Loads environment variables from a `.env` file.
///
/// Looks for a `.env` file in the platform-specific local data directory
/// under `topscli/.env`, creating the directory structure if it doesn't
/// exist. This allows users to store credentials without hardcoding
/// sensitive values. When no file exists there, a `.env` in the current
/// working directory is tried instead; already-set process environment
/// variables always win.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/topscli/.env`
/// - macOS: `~/Library/Application Support/topscli/.env`
/// - Windows: `%LOCALAPPDATA%/topscli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment is set up, or an error string if
/// directory creation or file parsing fails.
///
/// # Example
///
/// ```
/// use topscli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("topscli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    } else {
        // fall back to a .env next to the binary invocation, if any
        dotenv::dotenv().ok();
    }

    Ok(())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
///
/// # Example
///
/// ```
/// let client_id = spotify_client_id(); // e.g., "abc123..."
/// ```
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable which
/// contains the client secret obtained when registering the application with
/// Spotify's developer platform. This is used for the client-credentials
/// token exchange.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Example
///
/// ```
/// let client_secret = spotify_client_secret(); // e.g., "def456..."
/// ```
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. This is used for all API
/// operations after authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which contains
/// the URL used for the client-credentials token exchange before any API
/// request is made.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}
