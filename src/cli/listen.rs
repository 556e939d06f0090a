use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info,
    management::{ProfileManager, TokenManager},
    recognize,
    spotify::{playlist, request::ApiError},
    success,
    types::{Playlist, SongGuess},
    warning,
    wizard::SetupStep,
};

pub async fn listen(file: String) {
    let profile_manager = match ProfileManager::load().await {
        Ok(manager) => manager,
        Err(_) => error!("No profile found. Run tunedrop setup first."),
    };

    let step = SetupStep::determine(Some(profile_manager.profile()));
    if step != SetupStep::Ready {
        error!("Setup is not complete: {}", step.hint());
    }

    let profile = profile_manager.profile();
    let api_key = profile.audd_api_key.clone().unwrap_or_default();
    let Some(playlist_ref) = profile.playlist.clone() else {
        error!("No playlist selected. Run tunedrop playlists select <ID>.");
    };

    let mut tokens = load_tokens().await;

    let sample = match async_fs::read(&file).await {
        Ok(bytes) => bytes,
        Err(e) => error!("Failed to read sample {}: {}", file, e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Recognizing song...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let guess = recognize::recognize_song(sample, &api_key).await;
    pb.finish_and_clear();

    let Some(song) = guess else {
        info!("No confident match. Try again with a cleaner sample.");
        return;
    };

    info!("Recognized: {} - {}", song.artist, song.title);

    add_song(&song, &playlist_ref, &mut tokens).await;
}

pub async fn add(artist: String, title: String) {
    let profile_manager = match ProfileManager::load().await {
        Ok(manager) => manager,
        Err(_) => error!("No profile found. Run tunedrop setup first."),
    };

    let Some(playlist_ref) = profile_manager.profile().playlist.clone() else {
        error!("No playlist selected. Run tunedrop playlists select <ID>.");
    };

    let mut tokens = load_tokens().await;

    let song = SongGuess { title, artist };
    add_song(&song, &playlist_ref, &mut tokens).await;
}

async fn add_song(song: &SongGuess, playlist_ref: &Playlist, tokens: &mut TokenManager) {
    match playlist::add_recognized_track(song, &playlist_ref.id, tokens).await {
        Ok(_) => success!(
            "Added \"{} - {}\" to {}.",
            song.artist,
            song.title,
            playlist_ref.name
        ),
        Err(ApiError::TrackNotFound) => warning!(
            "No matching track on Spotify for \"{} - {}\". Try again.",
            song.artist,
            song.title
        ),
        Err(ApiError::ReauthRequired) => {
            error!("Authorization expired. Run tunedrop auth to reconnect.");
        }
        Err(e) => error!("Failed to add track: {}", e),
    }
}

async fn load_tokens() -> TokenManager {
    match TokenManager::load().await {
        Ok(tokens) => tokens,
        Err(e) => {
            error!(
                "Failed to load token. Please run tunedrop auth\n Error: {}",
                e
            );
        }
    }
}
