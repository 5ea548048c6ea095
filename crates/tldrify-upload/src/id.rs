//! Tracked file ids.

use rand::Rng;

/// Length of the random suffix appended to local file ids.
pub const SUFFIX_LEN: usize = 7;

/// Source of the random suffix in local file ids.
pub trait IdSource {
    /// Return a fresh suffix.
    fn suffix(&mut self) -> String;
}

/// Lowercase base-36 suffixes from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn suffix(&mut self) -> String {
        let mut rng = rand::thread_rng();
        (0..SUFFIX_LEN)
            .filter_map(|_| char::from_digit(rng.gen_range(0..36), 36))
            .collect()
    }
}

/// Build the id of a freshly added local file: `{name}-{size}-{suffix}`.
#[must_use]
pub fn local_file_id(name: &str, size: u64, suffix: &str) -> String {
    format!("{name}-{size}-{suffix}")
}
