//! Exponential backoff with random jitter.

use std::time::Duration;

/// An exponential backoff sequence with random jitter.
///
/// Each call to [`next`](Iterator::next) yields `base^increment` seconds plus
/// `jitter_multiplier * rand()` where `rand()` is uniform over `[0, 1)`. The
/// iterator ends once the un-jittered value reaches `maximum`, which callers
/// should treat as the connection being beyond saving.
///
/// # Examples
///
/// ```
/// use giotto_rate_limit::ExponentialBackOff;
///
/// let mut backoff = ExponentialBackOff::new(2.0, 64.0, 0.0, 0);
/// assert_eq!(backoff.next(), Some(std::time::Duration::from_secs(1)));
/// assert_eq!(backoff.next(), Some(std::time::Duration::from_secs(2)));
/// backoff.reset();
/// assert_eq!(backoff.next(), Some(std::time::Duration::from_secs(1)));
/// ```
#[derive(Debug, Clone)]
pub struct ExponentialBackOff {
    base: f64,
    maximum: f64,
    jitter_multiplier: f64,
    increment: u32,
    initial_increment: u32,
}

impl ExponentialBackOff {
    /// Create a backoff sequence.
    ///
    /// `maximum` bounds a single un-jittered interval; `initial_increment`
    /// skips the first steps of the sequence, which is useful when the first
    /// waits would be too short to matter.
    pub fn new(base: f64, maximum: f64, jitter_multiplier: f64, initial_increment: u32) -> Self {
        Self {
            base,
            maximum,
            jitter_multiplier,
            increment: initial_increment,
            initial_increment,
        }
    }

    /// Restart the sequence from its initial increment.
    pub fn reset(&mut self) {
        self.increment = self.initial_increment;
    }

    /// The current increment.
    pub fn increment(&self) -> u32 {
        self.increment
    }
}

impl Default for ExponentialBackOff {
    fn default() -> Self {
        Self::new(2.0, 64.0, 1.0, 0)
    }
}

impl Iterator for ExponentialBackOff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let value = self.base.powi(self.increment as i32);
        if !value.is_finite() || value >= self.maximum {
            return None;
        }
        // Only advance once we know the maximum was not hit.
        self.increment += 1;
        let jitter = rand::random::<f64>() * self.jitter_multiplier;
        Some(Duration::from_secs_f64(value + jitter))
    }
}
