use super::*;

// =============================================================
// Backoff schedule
// =============================================================

#[test]
fn delays_double_up_to_the_cap() {
    let mut backoff = ReconnectBackoff::new();
    let delays: Vec<u64> = std::iter::from_fn(|| backoff.next_delay()).collect();
    assert_eq!(
        delays,
        vec![1_000, 2_000, 4_000, 8_000, 16_000, 30_000, 30_000, 30_000, 30_000, 30_000]
    );
}

#[test]
fn no_attempt_is_scheduled_after_the_tenth_failure() {
    let mut backoff = ReconnectBackoff::new();
    for _ in 0..MAX_RECONNECT_ATTEMPTS {
        assert!(backoff.next_delay().is_some());
    }
    assert_eq!(backoff.next_delay(), None);
    assert_eq!(backoff.next_delay(), None);
}

#[test]
fn attempts_count_failed_tries() {
    let mut backoff = ReconnectBackoff::new();
    assert_eq!(backoff.attempts(), 0);
    backoff.next_delay();
    backoff.next_delay();
    assert_eq!(backoff.attempts(), 2);
}

#[test]
fn reset_restores_the_initial_schedule() {
    let mut backoff = ReconnectBackoff::new();
    for _ in 0..7 {
        backoff.next_delay();
    }
    backoff.reset();
    assert_eq!(backoff.attempts(), 0);
    assert_eq!(backoff.next_delay(), Some(INITIAL_RECONNECT_DELAY_MS));
    assert_eq!(backoff.next_delay(), Some(2_000));
}

#[test]
fn default_matches_new() {
    assert_eq!(ReconnectBackoff::default(), ReconnectBackoff::new());
}
