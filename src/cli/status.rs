use chrono::DateTime;
use tabled::Table;

use crate::{
    info,
    management::{ProfileManager, TokenManager},
    types::StatusTableRow,
    wizard::SetupStep,
};

pub async fn status() {
    let profile_manager = ProfileManager::load().await.ok();
    let step = SetupStep::determine(profile_manager.as_ref().map(|m| m.profile()));

    info!("Setup step: {}", step.label());
    info!("Next: {}", step.hint());

    let Some(profile_manager) = profile_manager else {
        return;
    };
    let profile = profile_manager.profile();

    let mut rows = vec![
        StatusTableRow {
            item: "recognition API key".to_string(),
            value: if profile.audd_api_key.is_some() {
                "stored".to_string()
            } else {
                "missing".to_string()
            },
        },
        StatusTableRow {
            item: "target playlist".to_string(),
            value: profile
                .playlist
                .as_ref()
                .map(|p| format!("{} ({})", p.name, p.id))
                .unwrap_or_else(|| "not selected".to_string()),
        },
    ];

    match TokenManager::load().await {
        Ok(tokens) => {
            let obtained = DateTime::from_timestamp(tokens.current_token().obtained_at as i64, 0)
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "unknown".to_string());
            rows.push(StatusTableRow {
                item: "Spotify authorization".to_string(),
                value: format!("authorized since {}", obtained),
            });
        }
        Err(_) => {
            rows.push(StatusTableRow {
                item: "Spotify authorization".to_string(),
                value: "not connected".to_string(),
            });
        }
    }

    let table = Table::new(rows);
    println!("{}", table);
}
