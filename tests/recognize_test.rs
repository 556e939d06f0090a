use tunedrop::types::RecognizeResponse;

#[test]
fn parses_confident_match() {
    let payload = r#"{
        "status": "success",
        "result": {
            "artist": "New Order",
            "title": "Blue Monday",
            "album": "Power, Corruption & Lies",
            "release_date": "1983-05-02"
        }
    }"#;

    let response: RecognizeResponse = serde_json::from_str(payload).unwrap();

    assert_eq!(response.status, "success");
    let song = response.result.unwrap();
    assert_eq!(song.artist, "New Order");
    assert_eq!(song.title, "Blue Monday");
}

#[test]
fn parses_null_result_as_no_match() {
    let payload = r#"{"status": "success", "result": null}"#;

    let response: RecognizeResponse = serde_json::from_str(payload).unwrap();

    assert_eq!(response.status, "success");
    assert!(response.result.is_none());
}

#[test]
fn parses_missing_result_as_no_match() {
    let payload = r#"{"status": "error"}"#;

    let response: RecognizeResponse = serde_json::from_str(payload).unwrap();

    assert!(response.result.is_none());
}
