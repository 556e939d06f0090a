use tunedrop::types::{Playlist, Profile};
use tunedrop::wizard::SetupStep;

fn profile(api_key: Option<&str>, access_token: Option<&str>, playlist: bool) -> Profile {
    Profile {
        audd_api_key: api_key.map(|k| k.to_string()),
        playlist: playlist.then(|| Playlist {
            id: "pl1".to_string(),
            name: "Heard".to_string(),
        }),
        access_token: access_token.map(|t| t.to_string()),
        refresh_token: access_token.map(|_| "RT1".to_string()),
    }
}

#[test]
fn determine_without_profile_is_signed_out() {
    assert_eq!(SetupStep::determine(None), SetupStep::SignedOut);
}

#[test]
fn determine_walks_the_setup_sequence() {
    assert_eq!(
        SetupStep::determine(Some(&profile(None, None, false))),
        SetupStep::AwaitingApiKey
    );
    assert_eq!(
        SetupStep::determine(Some(&profile(Some("key"), None, false))),
        SetupStep::AwaitingAuthorization
    );
    assert_eq!(
        SetupStep::determine(Some(&profile(Some("key"), Some("AT1"), false))),
        SetupStep::AwaitingPlaylist
    );
    assert_eq!(
        SetupStep::determine(Some(&profile(Some("key"), Some("AT1"), true))),
        SetupStep::Ready
    );
}

#[test]
fn determine_treats_empty_values_as_missing() {
    assert_eq!(
        SetupStep::determine(Some(&profile(Some(""), None, false))),
        SetupStep::AwaitingApiKey
    );
    assert_eq!(
        SetupStep::determine(Some(&profile(Some("key"), Some(""), false))),
        SetupStep::AwaitingAuthorization
    );
}

#[test]
fn transitions_advance_in_order() {
    let step = SetupStep::SignedOut;
    let step = step.sign_in();
    assert_eq!(step, SetupStep::AwaitingApiKey);
    let step = step.api_key_entered();
    assert_eq!(step, SetupStep::AwaitingAuthorization);
    let step = step.authorized();
    assert_eq!(step, SetupStep::AwaitingPlaylist);
    let step = step.playlist_selected();
    assert_eq!(step, SetupStep::Ready);
}

#[test]
fn out_of_order_transitions_leave_state_unchanged() {
    assert_eq!(
        SetupStep::SignedOut.playlist_selected(),
        SetupStep::SignedOut
    );
    assert_eq!(SetupStep::Ready.sign_in(), SetupStep::Ready);
    assert_eq!(
        SetupStep::AwaitingApiKey.authorized(),
        SetupStep::AwaitingApiKey
    );
}

#[test]
fn revocation_falls_back_to_authorization() {
    assert_eq!(
        SetupStep::Ready.authorization_revoked(),
        SetupStep::AwaitingAuthorization
    );
    assert_eq!(
        SetupStep::AwaitingPlaylist.authorization_revoked(),
        SetupStep::AwaitingAuthorization
    );
    // Earlier steps are unaffected
    assert_eq!(
        SetupStep::AwaitingApiKey.authorization_revoked(),
        SetupStep::AwaitingApiKey
    );
}
