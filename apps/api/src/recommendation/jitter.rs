//! Tie-breaking jitter for the composite recommendation score.
//!
//! Production draws are deliberately unseeded so repeated identical queries vary.
//! Tests inject `FixedJitter` or `SequenceJitter` instead.

use rand::Rng;

/// Source of uniform draws in `[0, 1)`.
pub trait JitterSource: Send + Sync {
    fn next(&self) -> f64;
}

pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn next(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Always returns the same value.
#[cfg(test)]
pub struct FixedJitter(pub f64);

#[cfg(test)]
impl JitterSource for FixedJitter {
    fn next(&self) -> f64 {
        self.0
    }
}

/// Replays a known sequence, then yields 0.0 once exhausted.
#[cfg(test)]
pub struct SequenceJitter {
    values: std::sync::Mutex<std::collections::VecDeque<f64>>,
}

#[cfg(test)]
impl SequenceJitter {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: std::sync::Mutex::new(values.into_iter().collect()),
        }
    }
}

#[cfg(test)]
impl JitterSource for SequenceJitter {
    fn next(&self) -> f64 {
        self.values
            .lock()
            .map(|mut q| q.pop_front().unwrap_or(0.0))
            .unwrap_or(0.0)
    }
}
