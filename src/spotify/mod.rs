//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by Tunedrop:
//! the OAuth 2.0 authorization-code flow, the authenticated request policy,
//! track search, and playlist mutation. It is the integration layer between the
//! CLI commands and Spotify's services, handling all HTTP communication, token
//! lifecycle, and error mapping.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Wizard)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorize, exchange, refresh, verify)
//!     ├── Request Policy (refresh-and-retry wrapper, error taxonomy)
//!     ├── Track Search (title cleaning, exact-field query)
//!     └── Playlist Operations (list, append)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 authorization-code flow for a
//! confidential client:
//! - **Complete Auth Flow**: From authorization redirect to token storage
//! - **Local Relay**: The code-for-token exchange happens in the local server
//!   process, so the client secret never reaches any user-facing surface
//! - **Token Refresh**: Exchanges refresh tokens for new access tokens
//! - **Account Verification**: Confirms a fresh credential pair against the
//!   profile endpoint before it is persisted
//! - **Browser Integration**: Automatic browser launch for user authorization
//!
//! ### Request Policy Module
//!
//! [`request`] - The one-shot refresh-and-retry contract applied to every
//! authenticated call:
//! - First-attempt 401 triggers exactly one refresh and exactly one retry
//! - Any other failure, including a failed retry or a failed refresh, is
//!   terminal; there is no backoff
//! - A rejected refresh credential clears stored credentials and surfaces a
//!   re-authorization condition
//!
//! ### Search Module
//!
//! [`search`] - Resolves recognized (artist, title) pairs to track URIs with a
//! single-shot, first-result-wins heuristic.
//!
//! ### Playlist Module
//!
//! [`playlist`] - Lists the user's playlists and appends resolved tracks to the
//! selected one.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Token exchange and refresh (accounts host)
//! - `GET /me` - Account verification
//! - `GET /me/playlists` - Playlist listing
//! - `GET /search` - Track search (`type=track`, `limit=1`)
//! - `POST /playlists/{playlist_id}/tracks` - Append a track
//!
//! ## Error Types
//!
//! All fallible operations return [`request::ApiError`], which distinguishes
//! validation failures, the retry-eligible 401, the fatal re-authorization
//! condition, the soft "track not found" condition, other upstream statuses,
//! and transport failures.
//!
//! ## Thread Safety
//!
//! The module is designed for async single-threaded use: one logical thread of
//! control per user action, shared auth state behind `Arc<Mutex<>>`, and no
//! global mutable state.

pub mod auth;
pub mod playlist;
pub mod request;
pub mod search;
