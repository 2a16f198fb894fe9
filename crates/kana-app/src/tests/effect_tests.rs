use std::sync::Arc;
use std::time::Duration;

use kana_core::{Action, AppEvent};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use super::support::FakeSpeech;
use crate::events::auto_advance::schedule_advance;
use crate::events::speech_lookup::spawn_lookup;

#[tokio::test]
async fn test_lookup_posts_clip_back() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let speech = Arc::new(FakeSpeech::default().with_clip("あ", &[1, 2]));

    spawn_lookup(speech.clone(), "あ".to_string(), tx);

    match timeout(Duration::from_secs(2), rx.recv()).await {
        Ok(Ok(AppEvent::Action(Action::SpeechCompleted { text, clip }))) => {
            assert_eq!(text, "あ");
            assert_eq!(clip.unwrap().data, vec![1, 2]);
        }
        Ok(Ok(other)) => panic!("Wrong event type: {other:?}"),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - lookup never reported back"),
    }
    assert_eq!(speech.calls(), 1);
}

#[tokio::test]
async fn test_failed_lookup_reports_missing_clip() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    spawn_lookup(Arc::new(FakeSpeech::default()), "ん".to_string(), tx);

    match timeout(Duration::from_secs(2), rx.recv()).await {
        Ok(Ok(AppEvent::Action(Action::SpeechCompleted { text, clip }))) => {
            assert_eq!(text, "ん");
            assert!(clip.is_none());
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn test_many_lookups_all_complete() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let speech = Arc::new(FakeSpeech::default());

    for i in 0..50 {
        spawn_lookup(speech.clone(), format!("word{i}"), tx.clone());
    }

    let mut count = 0;
    let result = timeout(Duration::from_secs(2), async {
        while count < 50 {
            rx.recv().await.expect("recv failed");
            count += 1;
        }
    })
    .await;

    assert!(result.is_ok(), "Timeout waiting for completions!");
    assert_eq!(speech.calls(), 50);
}

#[tokio::test]
async fn test_advance_fires_after_delay() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    schedule_advance(7, Duration::from_millis(20), tx, CancellationToken::new());

    match timeout(Duration::from_secs(2), rx.recv()).await {
        Ok(Ok(AppEvent::Action(Action::AutoAdvance { generation }))) => assert_eq!(generation, 7),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn test_cancelled_advance_never_fires() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let token = CancellationToken::new();

    let handle = schedule_advance(1, Duration::from_millis(50), tx, token.clone());
    token.cancel();
    handle.await.unwrap();

    assert!(rx.is_empty());
}
