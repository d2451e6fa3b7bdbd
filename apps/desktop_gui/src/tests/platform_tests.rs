use super::*;

use crossbeam_channel::bounded;

#[tokio::test]
async fn typed_utterance_produces_a_result_then_speech_end() {
    let recognizer = TypedSpeechRecognizer::new();
    let mut rx = recognizer.subscribe_events();

    recognizer.submit("blue");
    assert!(rx.try_recv().is_err(), "nothing is heard before start");

    recognizer.start().await.expect("start");
    assert!(recognizer.start().await.is_err());
    recognizer.submit("  Blue ");
    assert_eq!(
        rx.recv().await.expect("result"),
        RecognitionEvent::Result(RecognitionAlternative {
            transcript: "blue".to_string(),
            confidence: 1.0,
        })
    );
    assert_eq!(rx.recv().await.expect("speech end"), RecognitionEvent::SpeechEnd);

    recognizer.stop().await.expect("stop");
    assert_eq!(rx.recv().await.expect("end"), RecognitionEvent::End);
    assert!(!recognizer.is_listening());
}

#[tokio::test]
async fn blank_utterance_is_a_no_match() {
    let recognizer = TypedSpeechRecognizer::new();
    let mut rx = recognizer.subscribe_events();
    recognizer.start().await.expect("start");
    recognizer.submit("   ");
    assert_eq!(rx.recv().await.expect("no match"), RecognitionEvent::NoMatch);
    assert_eq!(rx.recv().await.expect("speech end"), RecognitionEvent::SpeechEnd);
}

#[tokio::test]
async fn notifier_prompts_once_and_remembers_the_answer() {
    let (ui_tx, ui_rx) = bounded(8);
    let notifier = Arc::new(InAppNotifier::new(ui_tx));
    assert_eq!(notifier.permission(), NotificationPermission::Default);

    let waiting = {
        let notifier = notifier.clone();
        tokio::spawn(async move { notifier.request_permission().await })
    };
    let prompt = tokio::task::spawn_blocking(move || ui_rx.recv())
        .await
        .expect("join")
        .expect("prompt event");
    assert_eq!(prompt, UiEvent::NotificationPermissionRequested);

    notifier.answer(true);
    let answered = waiting.await.expect("join").expect("request");
    assert_eq!(answered, NotificationPermission::Granted);
    assert_eq!(
        notifier.request_permission().await.expect("cached"),
        NotificationPermission::Granted
    );
}

#[tokio::test]
async fn prompt_is_offered_again_after_the_ui_queue_was_full() {
    let (ui_tx, ui_rx) = bounded(1);
    ui_tx
        .try_send(UiEvent::Info("busy".to_string()))
        .expect("fill queue");
    let notifier = Arc::new(InAppNotifier::new(ui_tx));

    assert!(notifier.request_permission().await.is_err());
    assert_eq!(ui_rx.try_recv().expect("filler"), UiEvent::Info("busy".to_string()));

    let waiting = {
        let notifier = notifier.clone();
        tokio::spawn(async move { notifier.request_permission().await })
    };
    let prompt = tokio::task::spawn_blocking(move || ui_rx.recv())
        .await
        .expect("join")
        .expect("prompt event");
    assert_eq!(prompt, UiEvent::NotificationPermissionRequested);

    notifier.answer(false);
    assert_eq!(
        waiting.await.expect("join").expect("request"),
        NotificationPermission::Denied
    );
}

#[tokio::test]
async fn notifications_are_queued_as_toasts() {
    let (ui_tx, ui_rx) = bounded(8);
    let notifier = InAppNotifier::new(ui_tx);
    notifier.answer(false);
    assert_eq!(notifier.permission(), NotificationPermission::Denied);

    notifier
        .show("Game is over !  You scored 3")
        .await
        .expect("show");
    assert_eq!(
        ui_rx.try_recv().expect("toast"),
        UiEvent::Notification("Game is over !  You scored 3".to_string())
    );
}
