use super::*;

#[test]
fn color_grammar_lists_the_four_words() {
    let grammar = SpeechGrammar::colors();
    assert_eq!(
        grammar.to_jsgf(),
        "#JSGF V1.0; grammar colors; public <color> = yellow | green | red | blue;"
    );
    assert!(grammar.contains("red"));
    assert!(!grammar.contains("Red"));
    assert!(!grammar.contains("purple"));
}

#[test]
fn default_options_listen_for_a_single_final_utterance() {
    let options = RecognitionOptions::default();
    assert_eq!(options.lang, "en-US");
    assert!(!options.continuous);
    assert!(!options.interim_results);
    assert_eq!(options.max_alternatives, 1);
    assert_eq!(options.grammar.weight, 1.0);
}

#[test]
fn permission_serializes_snake_case() {
    let json = serde_json::to_string(&NotificationPermission::Default).expect("serialize");
    assert_eq!(json, "\"default\"");
}

#[tokio::test]
async fn missing_collaborators_degrade_to_unavailable() {
    assert!(MissingSpeechRecognizer
        .configure(RecognitionOptions::default())
        .await
        .is_err());

    assert_eq!(MissingNotifier.permission(), NotificationPermission::Denied);
    assert_eq!(
        MissingNotifier.request_permission().await.expect("request"),
        NotificationPermission::Denied
    );
    assert!(MissingNotifier.show("title").await.is_err());
}
