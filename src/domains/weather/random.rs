//! Random source abstraction for the weather generators.
//!
//! Every random decision the generators make goes through [`RandomSource`],
//! so tests can pin draws exactly while production code uses `rand`.

use rand::Rng;

/// The draws needed by the forecast generator and alert deriver.
pub trait RandomSource {
    /// Uniform float in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Uniform integer in `[low, high]`, both ends inclusive.
    fn integer(&mut self, low: i32, high: i32) -> i32;

    /// Uniform index in `[0, len)`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.random_range(low..=high)
    }

    fn integer(&mut self, low: i32, high: i32) -> i32 {
        self.random_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// A random source replaying fixed draws, for deterministic tests.
///
/// Each kind of draw has its own queue. Running out of values panics.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedRandom {
    uniforms: std::collections::VecDeque<f64>,
    integers: std::collections::VecDeque<i32>,
    indices: std::collections::VecDeque<usize>,
    units: std::collections::VecDeque<f64>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_uniforms(mut self, values: &[f64]) -> Self {
        self.uniforms.extend(values);
        self
    }

    pub(crate) fn with_integers(mut self, values: &[i32]) -> Self {
        self.integers.extend(values);
        self
    }

    pub(crate) fn with_indices(mut self, values: &[usize]) -> Self {
        self.indices.extend(values);
        self
    }

    pub(crate) fn with_units(mut self, values: &[f64]) -> Self {
        self.units.extend(values);
        self
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let value = self.uniforms.pop_front().expect("no scripted uniform draw left");
        assert!((low..=high).contains(&value), "scripted uniform out of range");
        value
    }

    fn integer(&mut self, low: i32, high: i32) -> i32 {
        let value = self.integers.pop_front().expect("no scripted integer draw left");
        assert!((low..=high).contains(&value), "scripted integer out of range");
        value
    }

    fn index(&mut self, len: usize) -> usize {
        let value = self.indices.pop_front().expect("no scripted index draw left");
        assert!(value < len, "scripted index out of range");
        value
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().expect("no scripted unit draw left")
    }
}
