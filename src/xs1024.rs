use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use super::{SeedError, SeedFault, Xorshift64Star, DEFAULT_STATE, STATE_WORDS, XS1024_MULTIPLIER};

// Xs1024 features
// -xorshift1024* by Sebastiano Vigna, after Marsaglia's xorshift generators
// -64-bit output, 1024-bit state, period 2**1024 - 1
// -the all-zero state is a fixed point and cannot be constructed
// -not cryptographically secure: the state is recoverable from 16 outputs

/// Xs1024 non-cryptographic RNG. 64-bit output, 1024-bit state.
/// Instances are single-owner and carry no synchronization.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Xs1024State", into = "Xs1024State"))]
#[derive(Clone, Eq, PartialEq)]
pub struct Xs1024 {
    /// State vector.
    state: [u64; STATE_WORDS],
    /// Index of the word that feeds the next step.
    p: usize,
}

// As recommended, this Debug implementation does not expose internal state.
impl core::fmt::Debug for Xs1024 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Xs1024 {{}}")
    }
}

/// Checkpoint of an Xs1024 RNG: the state vector and the cursor.
/// Converting back into Xs1024 rejects the all-zero state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Xs1024State {
    pub state: [u64; STATE_WORDS],
    pub p: usize,
}

impl From<Xs1024> for Xs1024State {
    fn from(rng: Xs1024) -> Self {
        Xs1024State { state: rng.state, p: rng.p }
    }
}

impl TryFrom<Xs1024State> for Xs1024 {
    type Error = SeedError;

    fn try_from(checkpoint: Xs1024State) -> Result<Self, SeedError> {
        let mut rng = Xs1024::from_state(checkpoint.state)?;
        rng.p = checkpoint.p & 15;
        Ok(rng)
    }
}

impl Default for Xs1024 {
    fn default() -> Self {
        Self::new()
    }
}

impl Xs1024 {

    /// Generates the next 64-bit random number.
    #[wrappit] #[inline]
    pub fn next(&mut self) -> u64 {
        let s0 = self.state[self.p];
        self.p = (self.p + 1) & 15;
        let s1 = self.state[self.p];
        let s1 = s1 ^ (s1 << 31); // a
        let s1 = s1 ^ (s1 >> 11); // b
        let s0 = s0 ^ (s0 >> 30); // c
        self.state[self.p] = s0 ^ s1;
        self.state[self.p] * XS1024_MULTIPLIER
    }

    /// Returns the next raw word reinterpreted as a signed 64-bit integer.
    #[inline]
    pub fn next_i64(&mut self) -> i64 {
        self.next() as i64
    }

    /// Returns a random integer in `0 ..= 2**63 - 1` taken from the high 63 bits.
    #[inline]
    pub fn next_i63(&mut self) -> i64 {
        (self.next() >> 1) as i64
    }

    /// Returns the low 32 bits of the next raw word as a signed integer.
    #[inline]
    pub fn next_i32(&mut self) -> i32 {
        self.next() as i32
    }

    /// Returns a fair coin flip from the lowest bit of the next raw word.
    #[inline]
    pub fn next_bool(&mut self) -> bool {
        self.next() & 1 == 1
    }

    /// Creates a new Xs1024 RNG in the default state.
    /// Every instance created this way produces the same stream.
    pub fn new() -> Self {
        Xs1024 { state: DEFAULT_STATE, p: 0 }
    }

    /// Creates a new Xs1024 RNG from a non-zero 64-bit seed.
    /// The seed is expanded into the full state with xorshift64*.
    pub fn from_u64(seed: u64) -> Result<Self, SeedError> {
        if seed == 0 {
            tracing::warn!("rejected zero scalar seed");
            return Err(SeedFault::Zero.into());
        }
        let mut state = [0u64; STATE_WORDS];
        Xorshift64Star::new(seed).fill(&mut state);
        tracing::debug!(seed, "seeded Xs1024 from scalar");
        Ok(Xs1024 { state, p: 0 })
    }

    /// Creates a new Xs1024 RNG from 1 to 15 seed words, not all zero.
    /// The words occupy the start of the state vector and the remaining words are zero.
    pub fn from_words(seed: &[u64]) -> Result<Self, SeedError> {
        if seed.is_empty() || seed.len() >= STATE_WORDS {
            tracing::warn!(len = seed.len(), "rejected seed vector length");
            return Err(SeedFault::Length(seed.len()).into());
        }
        if seed.iter().all(|&w| w == 0) {
            tracing::warn!(len = seed.len(), "rejected all-zero seed vector");
            return Err(SeedFault::AllZero.into());
        }
        let mut state = [0u64; STATE_WORDS];
        state[.. seed.len()].copy_from_slice(seed);
        tracing::debug!(len = seed.len(), "seeded Xs1024 from word vector");
        Ok(Xs1024 { state, p: 0 })
    }

    /// Creates a new Xs1024 RNG from a full state vector, not all zero.
    pub fn from_state(state: [u64; STATE_WORDS]) -> Result<Self, SeedError> {
        if state.iter().all(|&w| w == 0) {
            tracing::warn!("rejected all-zero state vector");
            return Err(SeedFault::AllZero.into());
        }
        Ok(Xs1024 { state, p: 0 })
    }
}

/// Seed type of Xs1024 for `SeedableRng`: the state vector as 16 little-endian words.
#[derive(Clone)]
pub struct Xs1024Seed(pub [u8; STATE_WORDS * 8]);

impl Default for Xs1024Seed {
    fn default() -> Self {
        Xs1024Seed([0; STATE_WORDS * 8])
    }
}

impl AsMut<[u8]> for Xs1024Seed {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl AsRef<[u8]> for Xs1024Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

use super::{RngCore, Error, SeedableRng};

impl RngCore for Xs1024 {
    fn next_u32(&mut self) -> u32 {
        self.next() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        // Always use Little-Endian.
        for chunk in dest.chunks_mut(8) {
            let x = self.next().to_le_bytes();
            chunk.copy_from_slice(&x[.. chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xs1024 {
    type Seed = Xs1024Seed;

    /// Creates a new Xs1024 RNG from a full 1024-bit seed.
    /// The all-zero seed falls back to the default state.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0u64; STATE_WORDS];
        for (word, bytes) in state.iter_mut().zip(seed.0.chunks_exact(8)) {
            let mut le = [0u8; 8];
            le.copy_from_slice(bytes);
            *word = u64::from_le_bytes(le);
        }
        // from_seed cannot fail, so the all-zero seed falls back to the default state.
        Xs1024::from_state(state).unwrap_or_default()
    }
}
