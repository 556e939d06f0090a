//! # API Module
//!
//! This module provides the HTTP endpoints served by Tunedrop's local web
//! server during the authorization flow.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Handles the OAuth redirect from Spotify's authorization
//!   server. Checks the `state` nonce against the pending attempt, exchanges
//!   the authorization code for a token pair, and hands the result back to the
//!   waiting auth command through shared state.
//! - [`token`] - The trusted token relay. Accepts `{code, redirectUri}` as
//!   JSON and performs the code exchange with the confidential client secret,
//!   so the secret never leaves the server process. Answers 400 on missing
//!   fields, 500 with error details on upstream failure, and the raw token
//!   JSON on success.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning application status and
//!   version information.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is an async function wired into the router in
//! [`crate::server`]; the callback handler receives the pending authorization
//! attempt via an `Extension` layer.

mod callback;
mod health;
mod token;

pub use callback::callback;
pub use health::health;
pub use token::token;
