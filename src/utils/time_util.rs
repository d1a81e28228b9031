use chrono::Utc;
use rand::Rng;

/// Wall-clock source for payload timestamps. Injected so tests can pin
/// every time-derived field to a known instant.
pub trait Clock: Send + Sync {
    fn now_unix_secs(&self) -> u64;
    fn now_unix_millis(&self) -> u64;
}

/// Source of the coarse cache-buster value sent on tracking calls.
/// Not cryptographic.
pub trait RandomSource: Send + Sync {
    /// Returns a value in [0, 1).
    fn next_f64(&self) -> f64;
}

#[derive(Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_secs(&self) -> u64 {
        Utc::now().timestamp() as u64
    }

    fn now_unix_millis(&self) -> u64 {
        Utc::now().timestamp_millis() as u64
    }
}

#[derive(Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}
