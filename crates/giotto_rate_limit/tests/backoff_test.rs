//! Tests for the exponential backoff sequence.

use giotto_rate_limit::ExponentialBackOff;
use std::time::Duration;

#[test]
fn test_grows_exponentially_without_jitter() {
    let mut backoff = ExponentialBackOff::new(2.0, 64.0, 0.0, 0);
    assert_eq!(backoff.next(), Some(Duration::from_secs(1)));
    assert_eq!(backoff.next(), Some(Duration::from_secs(2)));
    assert_eq!(backoff.next(), Some(Duration::from_secs(4)));
    assert_eq!(backoff.next(), Some(Duration::from_secs(8)));
}

#[test]
fn test_ends_at_maximum() {
    let mut backoff = ExponentialBackOff::new(2.0, 64.0, 0.0, 0);
    // 1, 2, 4, 8, 16, 32 are yielded; 64 >= maximum ends the sequence.
    for _ in 0..6 {
        assert!(backoff.next().is_some());
    }
    assert_eq!(backoff.next(), None);
    assert_eq!(backoff.next(), None);
}

#[test]
fn test_reset_restarts_from_initial_increment() {
    let mut backoff = ExponentialBackOff::new(2.0, 64.0, 0.0, 2);
    assert_eq!(backoff.next(), Some(Duration::from_secs(4)));
    assert_eq!(backoff.next(), Some(Duration::from_secs(8)));
    backoff.reset();
    assert_eq!(backoff.increment(), 2);
    assert_eq!(backoff.next(), Some(Duration::from_secs(4)));
}

#[test]
fn test_jitter_stays_within_multiplier() {
    let mut backoff = ExponentialBackOff::new(2.0, 64.0, 0.5, 0);
    for expected in [1.0, 2.0, 4.0] {
        let value = backoff.next().unwrap().as_secs_f64();
        assert!(value >= expected, "{value} < {expected}");
        assert!(value < expected + 0.5, "{value} >= {expected} + 0.5");
    }
}

#[test]
fn test_gateway_reconnect_parameters() {
    // base 1.85, 600s ceiling, starting at increment 2: first waits sit
    // around 3.4s and 6.3s, and the sequence stays finite.
    let backoff = ExponentialBackOff::new(1.85, 600.0, 0.0, 2);
    let waits: Vec<f64> = backoff.map(|d| d.as_secs_f64()).collect();
    assert!((waits[0] - 1.85f64.powi(2)).abs() < 1e-9);
    assert!(waits.iter().all(|w| *w < 600.0));
    assert!(waits.len() < 20);
}
