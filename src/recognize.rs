use reqwest::{
    Client,
    multipart::{Form, Part},
};

use crate::{
    config,
    types::{RecognizeResponse, SongGuess},
    warning,
};

/// Submits a recorded audio sample to the fingerprinting service.
///
/// The sample bytes are posted as multipart form data (field `file`, filename
/// `recording.wav`) together with the caller-supplied API key (`api_token`).
/// The service answers with a status and an optional result object carrying
/// the recognized title and artist; an absent result means no confident match.
///
/// This call fails soft on purpose: an empty API key, a transport failure, a
/// non-success status, or an unparseable response all log a warning and come
/// back as `None`, so a flaky recognition call degrades to "try again" instead
/// of aborting the flow. Callers must treat `None` identically to a genuine
/// no-match.
///
/// # Arguments
///
/// * `sample` - Recorded audio bytes, WAV-encoded, around five seconds
/// * `api_key` - The user-supplied fingerprinting API key
pub async fn recognize_song(sample: Vec<u8>, api_key: &str) -> Option<SongGuess> {
    if api_key.is_empty() {
        warning!("Recognition API key is not configured");
        return None;
    }

    let form = Form::new()
        .part("file", Part::bytes(sample).file_name("recording.wav"))
        .text("api_token", api_key.to_string());

    let client = Client::new();
    let response = match client
        .post(&config::audd_apiurl())
        .multipart(form)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warning!("Song recognition request failed: {}", e);
            return None;
        }
    };

    if !response.status().is_success() {
        warning!("Song recognition request failed: {}", response.status());
        return None;
    }

    match response.json::<RecognizeResponse>().await {
        Ok(data) => data.result,
        Err(e) => {
            warning!("Could not parse recognition response: {}", e);
            None
        }
    }
}
