//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by
//! Topscli, implementing authentication and the two data retrievals the
//! tool needs. It is the only layer that performs HTTP communication.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials)
//!     ├── Playlist Listing (a user's playlists)
//!     └── Track Retrieval (a playlist's tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! [`auth`] implements the OAuth 2.0 client-credentials flow: the
//! application's client ID and secret are exchanged for a short-lived
//! bearer token scoped to public (non-user-private) data. No browser,
//! callback server or refresh token is involved, and the token is not
//! persisted across runs.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /users/{user_id}/playlists` - a user's playlists (first page)
//! - `GET /users/{user_id}/playlists/{playlist_id}/tracks` - a playlist's
//!   tracks (first page)
//!
//! ## Error Handling
//!
//! Every request is attempted exactly once; there is no retry or backoff.
//! Functions return `Result<_, reqwest::Error>` and callers decide whether
//! a failure is fatal. HTTP error statuses are surfaced through
//! `error_for_status` rather than being parsed into partial results.

pub mod auth;
pub mod playlists;
pub mod tracks;
