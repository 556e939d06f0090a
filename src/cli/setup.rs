use crate::{error, info, management::ProfileManager, success, wizard::SetupStep};

pub async fn setup(audd_key: Option<String>) {
    let mut manager = match ProfileManager::load().await {
        Ok(manager) => manager,
        Err(_) => {
            info!("Creating a new profile...");
            ProfileManager::new()
        }
    };

    if let Some(key) = audd_key.filter(|key| !key.is_empty()) {
        manager.set_api_key(key);
    }

    if let Err(e) = manager.persist().await {
        error!("Failed to save profile: {}", e);
    }

    if manager.profile().audd_api_key.is_some() {
        success!("Profile ready, recognition API key stored.");
    } else {
        success!("Profile ready.");
    }

    let step = SetupStep::determine(Some(manager.profile()));
    info!("Next: {}", step.hint());
}
