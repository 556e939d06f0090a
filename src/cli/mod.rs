//! # CLI Module
//!
//! This module provides the command-line interface layer for Tunedrop. It
//! implements all user-facing commands and coordinates between the Spotify
//! client, the recognition client, persisted state, and the setup wizard.
//!
//! ## Command Categories
//!
//! ### Setup
//!
//! - [`setup`] - Creates the profile record and stores the recognition API key
//! - [`status`] - Shows the current wizard step and stored configuration
//!
//! ### Authentication
//!
//! - [`auth`] - Runs the Spotify OAuth authorization-code flow through the
//!   local callback/relay server
//!
//! ### Playlists
//!
//! - [`list_playlists`] - Lists the account's playlists with their ids
//! - [`select_playlist`] - Stores the target playlist in the profile record
//!
//! ### Recognition
//!
//! - [`listen`] - Recognizes a recorded sample and appends the matched track
//!   to the selected playlist
//! - [`add`] - Appends a track from a known (artist, title) pair, skipping
//!   recognition
//!
//! ## Error Handling Philosophy
//!
//! Soft conditions (no confident recognition, no matching track) are presented
//! as "try again" messages and never abort the program. Re-authorization
//! conditions direct the user back to `tunedrop auth`. Everything else is a
//! hard error with context.
//!
//! ## Data Flow
//!
//! 1. **Wizard Check**: Derive the setup step from persisted state
//! 2. **Credential Loading**: Load the cached token pair
//! 3. **API Interaction**: Run operations under the refresh-and-retry policy
//! 4. **State Updates**: Persist renewed credentials and profile changes
//! 5. **User Feedback**: Spinners for network calls, tables for listings

mod auth;
mod listen;
mod playlists;
mod setup;
mod status;

pub use auth::auth;
pub use listen::add;
pub use listen::listen;
pub use playlists::list_playlists;
pub use playlists::select_playlist;
pub use setup::setup;
pub use status::status;
