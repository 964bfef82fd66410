//! # CLI Module
//!
//! This module provides the command-line interface layer for Topscli. It
//! implements the single user-facing workflow and coordinates between the
//! Spotify API layer, the configuration module and console output.
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! The workflow is strictly sequential: authenticate, list the user's
//! playlists, find the year playlist by name, fetch its tracks, print.
//! Nothing is printed before all fetches have succeeded.
//!
//! ## Error Handling Philosophy
//!
//! Recoverable outcomes (a user with no playlists, or one who does not
//! follow the year playlist) are reported with a plain message and exit
//! code 1, making no further network calls. Transport and authentication
//! failures are fatal and carry the underlying error's diagnostic.

mod tracks;

pub use tracks::year_playlist;
