use crate::types::Profile;

/// Setup progression for a new user, as an explicit state machine.
///
/// The flow is strictly linear: sign in, supply the recognition API key,
/// authorize Spotify, pick a target playlist, and only then is the listen
/// command available. Transitions are explicit functions; a transition that
/// does not apply in the current state leaves the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    SignedOut,
    AwaitingApiKey,
    AwaitingAuthorization,
    AwaitingPlaylist,
    Ready,
}

impl SetupStep {
    /// Derives the current step from persisted state.
    ///
    /// `profile` is `None` when no profile record exists yet (signed out).
    /// Otherwise the first missing piece of setup determines the step.
    pub fn determine(profile: Option<&Profile>) -> SetupStep {
        let Some(profile) = profile else {
            return SetupStep::SignedOut;
        };

        if profile.audd_api_key.as_deref().unwrap_or_default().is_empty() {
            return SetupStep::AwaitingApiKey;
        }
        if profile.access_token.as_deref().unwrap_or_default().is_empty() {
            return SetupStep::AwaitingAuthorization;
        }
        if profile.playlist.is_none() {
            return SetupStep::AwaitingPlaylist;
        }

        SetupStep::Ready
    }

    /// A profile record was created for the user.
    pub fn sign_in(self) -> SetupStep {
        match self {
            SetupStep::SignedOut => SetupStep::AwaitingApiKey,
            other => other,
        }
    }

    /// The user supplied a recognition API key.
    pub fn api_key_entered(self) -> SetupStep {
        match self {
            SetupStep::AwaitingApiKey => SetupStep::AwaitingAuthorization,
            other => other,
        }
    }

    /// The authorization flow completed and a credential pair was stored.
    pub fn authorized(self) -> SetupStep {
        match self {
            SetupStep::AwaitingAuthorization => SetupStep::AwaitingPlaylist,
            other => other,
        }
    }

    /// The user selected a target playlist.
    pub fn playlist_selected(self) -> SetupStep {
        match self {
            SetupStep::AwaitingPlaylist => SetupStep::Ready,
            other => other,
        }
    }

    /// Stored credentials were cleared because the provider rejected them.
    /// Anything past the authorization step falls back to it; earlier steps
    /// are unaffected.
    pub fn authorization_revoked(self) -> SetupStep {
        match self {
            SetupStep::AwaitingPlaylist | SetupStep::Ready => SetupStep::AwaitingAuthorization,
            other => other,
        }
    }

    /// What the user should do next to make progress.
    pub fn hint(&self) -> &'static str {
        match self {
            SetupStep::SignedOut => "run `tunedrop setup` to create your profile",
            SetupStep::AwaitingApiKey => {
                "run `tunedrop setup --audd-key <KEY>` to store your recognition API key"
            }
            SetupStep::AwaitingAuthorization => "run `tunedrop auth` to connect Spotify",
            SetupStep::AwaitingPlaylist => {
                "run `tunedrop playlists select <ID>` to pick a target playlist"
            }
            SetupStep::Ready => "run `tunedrop listen <FILE>` to recognize a song",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SetupStep::SignedOut => "signed out",
            SetupStep::AwaitingApiKey => "awaiting recognition API key",
            SetupStep::AwaitingAuthorization => "awaiting Spotify authorization",
            SetupStep::AwaitingPlaylist => "awaiting playlist selection",
            SetupStep::Ready => "ready",
        }
    }
}
