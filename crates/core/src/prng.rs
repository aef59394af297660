//! Deterministic Xorshift64 PRNG used to seed particle positions and colors.
//!
//! Pure integer arithmetic, so a given seed reproduces the same initial
//! particle cloud on every platform.

/// Xorshift64 with shifts (13, 7, 17).
///
/// A seed of 0 is a fixed point of the algorithm and is replaced by a
/// non-zero fallback.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_F10A_7A27_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1) built from the upper 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        let v = min + self.next_f64() * (max - min);
        // Rounding in the multiply can land exactly on `max` for wide ranges.
        if v >= max {
            min
        } else {
            v
        }
    }

    /// Uniform byte covering the full [0, 255] range.
    pub fn next_u8(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }
}
