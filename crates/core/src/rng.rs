//! RNG module - bounded-range random integers for spawn logic
//!
//! A small seeded LCG keeps every session reproducible: the same seed and the
//! same inputs replay the same game, which the tests and benches rely on.

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

    /// Generate next random u16
    pub fn next_u16(&mut self) -> u16 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG cycle quickly; serve the high half.
        (self.state >> 16) as u16
    }

    /// Generate next random u32 from two consecutive steps
    pub fn next_u32(&mut self) -> u32 {
        let hi = u32::from(self.next_u16());
        let lo = u32::from(self.next_u16());
        (hi << 16) | lo
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Generate random value in range [min, max]
    ///
    /// Callers pass `min <= max`; a reversed range collapses to `min`.
    pub fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.next_range(max - min + 1) + min
    }

    /// Current RNG state (a seed that resumes this exact sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
