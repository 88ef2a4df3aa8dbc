//! Deterministic random sources for world generation.

pub mod legacy_random;

pub use legacy_random::LegacyRandom;

/// A seeded pseudo-random number source.
///
/// Every value drawn advances the internal state, so the order of calls is
/// part of the output: two sources with the same seed produce the same values
/// only when they are consumed in the same order.
pub trait Random {
    /// Returns the next uniformly distributed `i32`.
    fn next_i32(&mut self) -> i32;

    /// Returns the next `i32` in `0..bound`.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Returns the next uniformly distributed `i64`.
    fn next_i64(&mut self) -> i64;

    /// Returns the next `f32` in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Returns the next `f64` in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns the next boolean.
    fn next_bool(&mut self) -> bool;
}
