//! Function Sampler Module
//! Fixed-step sampling of a function over an interval with spike rejection.

use crate::data::Function;
use crate::error::{PlotError, Result};
use std::iter::FusedIterator;

/// Number of equal steps the interval is divided into.
pub const SUBDIVISIONS: f64 = 800.0;

/// Largest jump between consecutive samples that is still drawn.
pub const SPIKE_THRESHOLD: f64 = 100.0;

/// Upper bound on emitted samples (both interval ends included).
pub const MAX_SAMPLES: usize = SUBDIVISIONS as usize + 1;

/// Sample `function` over `[start, end]` into `(x, y)` pairs.
pub fn sample(function: &dyn Function, start: f64, end: f64) -> Result<Vec<[f64; 2]>> {
    Ok(Samples::new(function, start, end)?.collect())
}

/// Lazy sampling loop over one interval.
///
/// The function is evaluated once just before `start` to seed the spike check,
/// then at `start`, `start + dx`, ... while `x <= end`. A sample is dropped when
/// evaluation fails, when the value is not finite, or when it differs from the
/// previous value by more than [`SPIKE_THRESHOLD`]. The previous value tracks
/// every successful evaluation, dropped or not.
pub struct Samples<'a> {
    function: &'a dyn Function,
    x: f64,
    end: f64,
    dx: f64,
    previous: f64,
    remaining: usize,
}

impl<'a> Samples<'a> {
    /// Start sampling. Fails if the function cannot be evaluated at `start - dx`.
    pub fn new(function: &'a dyn Function, start: f64, end: f64) -> Result<Self> {
        let dx = (end - start) / SUBDIVISIONS;
        let seed_x = start - dx;
        let previous = function
            .eval(seed_x)
            .map_err(|source| PlotError::SampleEvaluation { x: seed_x, source })?;
        Ok(Self {
            function,
            x: start,
            end,
            dx,
            previous,
            remaining: MAX_SAMPLES,
        })
    }

    /// Step size between samples.
    pub fn step(&self) -> f64 {
        self.dx
    }

    fn advance(&mut self) {
        let next = self.x + self.dx;
        // a zero or vanishing step would never leave the interval
        if next > self.x {
            self.x = next;
            self.remaining -= 1;
        } else {
            self.remaining = 0;
        }
    }
}

impl Iterator for Samples<'_> {
    type Item = [f64; 2];

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 && self.x <= self.end {
            let x = self.x;
            self.advance();

            let value = match self.function.eval(x) {
                Ok(value) => value,
                Err(err) => {
                    tracing::trace!(x, error = %err, "sample skipped, evaluation failed");
                    continue;
                }
            };

            let erroneous =
                !value.is_finite() || (value - self.previous).abs() > SPIKE_THRESHOLD;
            self.previous = value;
            if erroneous {
                tracing::trace!(x, value, "sample skipped, not finite or spike");
                continue;
            }
            return Some([x, value]);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl FusedIterator for Samples<'_> {}
