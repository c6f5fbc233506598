//! Tests for the caller-side helpers (retry, timeout, cancellation).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use bandwidth::error::{BandwidthError, RemoteError};
use bandwidth::util::cancel::with_cancellation;
use bandwidth::util::retry::RetryPolicy;
use bandwidth::util::timeout::with_timeout;
use tokio_util::sync::CancellationToken;

fn quick_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        initial_backoff: Duration::from_millis(100),
        max_backoff: Duration::from_millis(100),
        multiplier: 2.0,
    }
}

#[tokio::test(start_paused = true)]
async fn retry_policy_retries_retryable_errors_until_success() {
    let policy = quick_policy(4);
    let attempts = Arc::new(AtomicUsize::new(0));
    let attempts_for_task = attempts.clone();

    let task = tokio::spawn(async move {
        policy
            .execute(|| {
                let attempts = attempts_for_task.clone();
                async move {
                    let attempt = attempts.fetch_add(1, Ordering::SeqCst);
                    if attempt < 2 {
                        Err(BandwidthError::Remote(RemoteError {
                            status: 503,
                            ..Default::default()
                        }))
                    } else {
                        Ok::<_, BandwidthError>("ok")
                    }
                }
            })
            .await
    });

    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_secs(1)).await;
    let result = task.await.unwrap();

    assert_eq!(result.unwrap(), "ok");
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn retry_policy_stops_immediately_for_non_retryable_errors() {
    let attempts = AtomicUsize::new(0);

    let err = quick_policy(5)
        .execute(|| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async {
                Err::<(), _>(BandwidthError::Remote(RemoteError {
                    status: 404,
                    ..Default::default()
                }))
            }
        })
        .await
        .unwrap_err();

    assert!(matches!(err, BandwidthError::Remote(r) if r.status == 404));
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn retry_policy_gives_up_after_max_attempts() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();

    let err = quick_policy(3)
        .execute(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err::<(), _>(BandwidthError::Timeout(10)) }
        })
        .await
        .unwrap_err();

    assert!(matches!(err, BandwidthError::Timeout(10)));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn retry_policy_rejects_zero_attempts() {
    let err = quick_policy(0)
        .execute(|| async { Ok::<_, BandwidthError>(()) })
        .await
        .unwrap_err();
    assert!(matches!(err, BandwidthError::InvalidArgument(_)));
}

#[tokio::test(start_paused = true)]
async fn with_timeout_reports_deadline_in_millis() {
    let err = with_timeout(Duration::from_millis(250), async {
        tokio::time::sleep(Duration::from_secs(10)).await;
        Ok::<_, BandwidthError>(())
    })
    .await
    .unwrap_err();
    assert!(matches!(err, BandwidthError::Timeout(250)));

    let value = with_timeout(Duration::from_secs(1), async { Ok::<_, BandwidthError>(7) })
        .await
        .unwrap();
    assert_eq!(value, 7);
}

#[tokio::test(start_paused = true)]
async fn with_timeout_caps_a_whole_retry_loop() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    let policy = quick_policy(50);

    let err = with_timeout(
        Duration::from_millis(250),
        policy.execute(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err::<(), _>(BandwidthError::Timeout(10)) }
        }),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, BandwidthError::Timeout(250)), "{err:?}");
    let made = attempts.load(Ordering::SeqCst);
    assert!((1..50).contains(&made), "{made} attempts");
}

#[tokio::test]
async fn with_timeout_passes_operation_errors_through() {
    let err = with_timeout(Duration::from_secs(1), async {
        Err::<(), _>(BandwidthError::InvalidArgument("call_id is required".into()))
    })
    .await
    .unwrap_err();
    assert!(matches!(err, BandwidthError::InvalidArgument(msg) if msg == "call_id is required"));
}

#[tokio::test]
async fn with_cancellation_aborts_in_flight_work() {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        trigger.cancel();
    });

    let err = with_cancellation(&token, async {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok::<_, BandwidthError>(())
    })
    .await
    .unwrap_err();
    assert!(matches!(err, BandwidthError::Cancelled));
}

#[tokio::test]
async fn with_cancellation_short_circuits_when_already_cancelled() {
    let token = CancellationToken::new();
    token.cancel();
    let polled = AtomicUsize::new(0);

    let err = with_cancellation(&token, async {
        polled.fetch_add(1, Ordering::SeqCst);
        Ok::<_, BandwidthError>(())
    })
    .await
    .unwrap_err();

    assert!(matches!(err, BandwidthError::Cancelled));
    assert_eq!(polled.load(Ordering::SeqCst), 0);
}
