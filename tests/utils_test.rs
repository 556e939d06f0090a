use tunedrop::utils::*;

#[test]
fn test_generate_state() {
    let state = generate_state();

    // Should be exactly 32 characters
    assert_eq!(state.len(), 32);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated nonces should be different
    let state2 = generate_state();
    assert_ne!(state, state2);
}

#[test]
fn test_clean_title_strips_parenthetical() {
    assert_eq!(clean_title("Song (Live Version)"), "Song");
    assert_eq!(clean_title("Blue Monday (Remastered 2011)"), "Blue Monday");
}

#[test]
fn test_clean_title_without_parenthetical() {
    assert_eq!(clean_title("Song"), "Song");
    assert_eq!(clean_title("  Song  "), "Song");
}

#[test]
fn test_clean_title_is_greedy() {
    // The span from the first `(` to the last `)` goes, in one piece
    assert_eq!(clean_title("Song (Live) (2011)"), "Song");
}

#[test]
fn test_clean_title_unmatched_parenthesis() {
    // No matching pair, nothing to strip
    assert_eq!(clean_title("Song (Live"), "Song (Live");
    assert_eq!(clean_title("Song Live)"), "Song Live)");
}

#[test]
fn test_build_search_query() {
    assert_eq!(
        build_search_query("Band", "Song (Live Version)"),
        "track:Song artist:Band"
    );
}

#[test]
fn test_build_search_query_plain_title() {
    assert_eq!(
        build_search_query("New Order", "Blue Monday"),
        "track:Blue Monday artist:New Order"
    );
}
