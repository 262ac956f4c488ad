//! RNG module - injectable piece selection
//!
//! The engine draws template indices through the [`PieceSource`] trait so
//! tests can replace randomness with a fixed script.
//!
//! - [`SimpleRng`]: seeded LCG, uniform over the requested range
//! - [`ScriptedSource`]: replays a fixed list of indices, cycling at the end

use std::fmt::Debug;

/// Source of template indices.
pub trait PieceSource: Debug {
    /// Return an index in `0..count`.
    fn next_index(&mut self, count: usize) -> usize;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Current internal state (reseeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl PieceSource for SimpleRng {
    fn next_index(&mut self, count: usize) -> usize {
        self.next_range(count as u32) as usize
    }
}

/// Replays a fixed sequence of indices, starting over when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<usize>,
    pos: usize,
}

impl ScriptedSource {
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: Vec<usize>) -> Self {
        assert!(!script.is_empty(), "scripted source needs at least one index");
        Self { script, pos: 0 }
    }

    /// Always yield the same index.
    pub fn repeat(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl PieceSource for ScriptedSource {
    fn next_index(&mut self, count: usize) -> usize {
        let index = self.script[self.pos];
        self.pos = (self.pos + 1) % self.script.len();
        assert!(index < count, "scripted index {index} out of range 0..{count}");
        index
    }
}
