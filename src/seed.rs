use wrapping_arithmetic::wrappit;

// Scalar seeds are not written into the state directly.
// A small seed like 1 would otherwise leave fifteen zero words behind
// and the first outputs of the main generator would be visibly patterned.
// Instead the seed drives a xorshift64* generator whose outputs fill the state.

/// Xorshift64* generator used to expand a scalar seed into a full state vector.
/// Its state is the scratch word `x`, which only lives for the duration of the expansion.
#[derive(Clone)]
pub struct Xorshift64Star {
    x: u64,
}

impl Xorshift64Star {

    /// Creates an expander from a scalar seed.
    /// A zero seed is a fixed point and produces zeros forever.
    pub fn new(seed: u64) -> Self {
        Xorshift64Star { x: seed }
    }

    /// Generates the next 64-bit expansion word.
    #[wrappit] #[inline]
    pub fn next(&mut self) -> u64 {
        self.x ^= self.x >> 12;
        self.x ^= self.x << 25;
        self.x ^= self.x >> 27;
        self.x * super::XORSHIFT64_MULTIPLIER
    }

    /// Overwrites every word of `words` with successive expansion outputs.
    pub fn fill(&mut self, words: &mut [u64]) {
        for word in words.iter_mut() {
            *word = self.next();
        }
    }
}
