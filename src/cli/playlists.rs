use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    management::{ProfileManager, TokenManager},
    spotify::{playlist, request::ApiError},
    success,
    types::{Playlist, PlaylistTableRow},
};

pub async fn list_playlists() {
    let playlists = fetch_playlists().await;

    if playlists.is_empty() {
        info!("No playlists found for this account.");
        return;
    }

    let table_rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            name: p.name,
            id: p.id,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

pub async fn select_playlist(id: String) {
    let mut profile_manager = match ProfileManager::load().await {
        Ok(manager) => manager,
        Err(_) => error!("No profile found. Run tunedrop setup first."),
    };

    let playlists = fetch_playlists().await;
    let Some(chosen) = playlists.into_iter().find(|p| p.id == id) else {
        error!("No playlist with id {} in your account.", id);
    };

    let Playlist { id, name } = chosen.clone();
    profile_manager.set_playlist(chosen);
    if let Err(e) = profile_manager.persist().await {
        error!("Failed to save profile: {}", e);
    }

    success!("Selected playlist {} ({}).", name, id);
}

async fn fetch_playlists() -> Vec<Playlist> {
    let mut tokens = match TokenManager::load().await {
        Ok(tokens) => tokens,
        Err(e) => {
            error!(
                "Failed to load token. Please run tunedrop auth\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = playlist::get_user_playlists(&mut tokens).await;
    pb.finish_and_clear();

    match result {
        Ok(playlists) => playlists,
        Err(ApiError::ReauthRequired) => {
            error!("Authorization expired. Run tunedrop auth to reconnect.");
        }
        Err(e) => error!("Failed to fetch playlists: {}", e),
    }
}
