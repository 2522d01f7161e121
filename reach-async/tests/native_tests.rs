//! Integration tests for reach-async on native platforms.
//!
//! These tests verify that the async abstraction works correctly with Tokio.

use reach_async::{sync, task, time};

#[tokio::test]
async fn test_task_spawn() {
    let handle = task::spawn(async { 42 });
    let result = handle.await.unwrap();
    assert_eq!(result, 42);
}

#[tokio::test]
async fn test_sleep() {
    let start = time::Instant::now();
    time::sleep(time::Duration::from_millis(50)).await;
    let elapsed = start.elapsed();
    assert!(elapsed >= time::Duration::from_millis(50));
    assert!(elapsed < time::Duration::from_millis(150)); // Allow some slack
}

#[tokio::test]
async fn test_timeout_success() {
    let result = time::timeout(time::Duration::from_millis(100), async {
        time::sleep(time::Duration::from_millis(10)).await;
        42
    })
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 42);
}

#[tokio::test]
async fn test_timeout_failure() {
    let result = time::timeout(time::Duration::from_millis(10), async {
        time::sleep(time::Duration::from_millis(100)).await;
        42
    })
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_watch_channel() {
    let (tx, mut rx) = sync::watch::channel(0);
    assert_eq!(*rx.borrow(), 0);

    tx.send(7).unwrap();
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), 7);
}

#[tokio::test]
async fn test_cancellation_token() {
    let token = sync::CancellationToken::new();
    assert!(!token.is_cancelled());

    let child = token.clone();
    let handle = task::spawn(async move {
        child.cancelled().await;
        true
    });

    token.cancel();
    assert!(handle.await.unwrap());
}
