use super::RngCore;

// Distribution samplers layered on top of any RngCore.
// Every sampler draws through uniform_double01 or the raw 64-bit output,
// so a sampler's output sequence is fully determined by the generator state.
//
// Preconditions are contracts: violating one is a caller bug and panics.
// Inputs are never clamped into range, as that would silently skew the statistics.

/// Scale that maps a 53-bit integer onto [0, 1], with both endpoints reachable.
pub const UNIT_SCALE: f64 = 1.0 / 9007199254740991.0;

/// Largest double below 1.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Slice of the Poisson rate handled per rescaling of the running product.
pub const POISSON_STEP: f64 = 500.0;

/// `exp(-POISSON_STEP)`.
const POISSON_STEP_LIMIT: f64 = 7.124576406741286e-218;

/// `exp(POISSON_STEP)`.
const POISSON_STEP_SCALE: f64 = 1.4035922178528375e217;

/// Converts a raw word into a double in [0, 1] using its top 53 bits.
#[inline]
pub fn unit_f64(x: u64) -> f64 {
    (x >> 11) as f64 * UNIT_SCALE
}

/// Substitutes the smallest positive normal double for a zero draw, keeping logarithms finite.
#[inline]
fn clamp_zero(u: f64) -> f64 {
    if u <= 0.0 { f64::MIN_POSITIVE } else { u }
}

/// Samplers for uniform and non-uniform distributions.
/// Implemented for every `RngCore`; bring the trait into scope to use it.
pub trait Distributions: RngCore {

    /// Returns a uniformly distributed double in [0, 1].
    #[inline]
    fn uniform_double01(&mut self) -> f64 {
        unit_f64(self.next_u64())
    }

    /// Returns a uniformly distributed integer in `a ..= b`.
    ///
    /// The low 32 bits of one raw word are reduced modulo the range width,
    /// so widths that do not divide 2**32 carry a small modulo bias.
    ///
    /// # Panics
    /// If `a >= b`.
    fn uniform_int(&mut self, a: i32, b: i32) -> i32 {
        assert!(a < b, "uniform_int requires a < b, got a = {}, b = {}", a, b);
        let width = b as i64 - a as i64 + 1;
        let x = self.next_u64() as i32 as i64;
        (x.rem_euclid(width) + a as i64) as i32
    }

    /// Returns a uniformly distributed double in [a, b].
    ///
    /// # Panics
    /// If `a >= b`.
    fn uniform_double(&mut self, a: f64, b: f64) -> f64 {
        assert!(a < b, "uniform_double requires a < b, got a = {}, b = {}", a, b);
        (b - a) * self.uniform_double01() + a
    }

    /// Returns 1 with probability `p` and 0 otherwise.
    ///
    /// # Panics
    /// If `p` is not in [0, 1].
    fn bernoulli(&mut self, p: f64) -> u32 {
        assert!((0.0 ..= 1.0).contains(&p), "bernoulli requires 0 <= p <= 1, got p = {}", p);
        (self.uniform_double01() < p) as u32
    }

    /// Returns a standard normal sample (mean 0, standard deviation 1).
    /// Box-Muller transform; consumes two uniform draws and keeps only the cosine branch.
    fn normal(&mut self) -> f64 {
        let u1 = clamp_zero(self.uniform_double01());
        let u2 = self.uniform_double01();
        libm::sqrt(-2.0 * libm::log(u1)) * libm::cos(2.0 * core::f64::consts::PI * u2)
    }

    /// Returns a normal sample with mean `mu` and standard deviation `sigma`.
    ///
    /// # Panics
    /// If `sigma` is negative or NaN.
    fn normal_with(&mut self, mu: f64, sigma: f64) -> f64 {
        assert!(sigma >= 0.0, "normal_with requires sigma >= 0, got sigma = {}", sigma);
        self.normal() * sigma + mu
    }

    /// Returns an exponentially distributed sample with mean `1 / lambda`.
    ///
    /// # Panics
    /// If `lambda <= 0`.
    fn exponential(&mut self, lambda: f64) -> f64 {
        assert!(lambda > 0.0, "exponential requires lambda > 0, got lambda = {}", lambda);
        let u = clamp_zero(self.uniform_double01());
        -libm::log(u) / lambda
    }

    /// Returns a Weibull sample with shape `a` and rate `lambda`: `(-ln u)^(1/a) / lambda`.
    ///
    /// # Panics
    /// If `a <= 0` or `lambda <= 0`.
    fn weibull(&mut self, a: f64, lambda: f64) -> f64 {
        assert!(a > 0.0, "weibull requires a > 0, got a = {}", a);
        assert!(lambda > 0.0, "weibull requires lambda > 0, got lambda = {}", lambda);
        let u = clamp_zero(self.uniform_double01()).min(BELOW_ONE);
        let u = -libm::log(u);
        libm::exp(libm::log(u) / a) / lambda
    }

    /// Returns an Erlang sample: the sum of `n` exponential variables with rate `lambda`.
    /// The draws are multiplied together and a single logarithm is taken at the end.
    ///
    /// # Panics
    /// If `n <= 1` or `lambda <= 0`.
    fn erlang(&mut self, n: u32, lambda: f64) -> f64 {
        assert!(lambda > 0.0, "erlang requires lambda > 0, got lambda = {}", lambda);
        assert!(n > 1, "erlang requires n > 1, got n = {}", n);
        let mut product = 1.0;
        for _ in 0 .. n {
            product *= clamp_zero(self.uniform_double01());
        }
        // The product may underflow to zero for large n.
        -libm::log(clamp_zero(product)) / lambda
    }

    /// Returns the number of failures before the first success
    /// in Bernoulli trials with success probability `p`.
    ///
    /// # Panics
    /// If `p` is not in the open interval (0, 1).
    fn geometric(&mut self, p: f64) -> u32 {
        assert!(p > 0.0 && p < 1.0, "geometric requires 0 < p < 1, got p = {}", p);
        let u = clamp_zero(self.uniform_double01());
        libm::floor(libm::log(u) / libm::log(1.0 - p)) as u32
    }

    /// Returns the number of successes in `n` Bernoulli trials with probability `p`.
    /// Takes exactly `n` uniform draws.
    ///
    /// # Panics
    /// If `n == 0` or `p` is not in [0, 1].
    fn binomial(&mut self, n: u32, p: f64) -> u32 {
        assert!((0.0 ..= 1.0).contains(&p), "binomial requires 0 <= p <= 1, got p = {}", p);
        assert!(n >= 1, "binomial requires n >= 1, got n = {}", n);
        (0 .. n).map(|_| (self.uniform_double01() < p) as u32).sum()
    }

    /// Returns the number of failures before the `n`th success, as a sum of `n` geometric samples.
    ///
    /// # Panics
    /// If `n == 0` or `p` is not in the open interval (0, 1).
    fn negative_binomial(&mut self, n: u32, p: f64) -> u32 {
        assert!(p > 0.0 && p < 1.0, "negative_binomial requires 0 < p < 1, got p = {}", p);
        assert!(n >= 1, "negative_binomial requires n >= 1, got n = {}", n);
        (0 .. n).fold(0u32, |sum, _| sum.saturating_add(self.geometric(p)))
    }

    /// Returns a Poisson sample with mean `lambda`.
    ///
    /// Knuth's method multiplies uniform draws until the product falls below `exp(-lambda)`,
    /// so it takes `lambda + 1` draws on average. Prefer another sampler for large `lambda`.
    /// Rates above `POISSON_STEP` are consumed in slices of `POISSON_STEP`,
    /// rescaling the product each time, so `exp(-lambda)` never underflows.
    ///
    /// # Panics
    /// If `lambda <= 0`.
    fn poisson(&mut self, lambda: f64) -> u32 {
        assert!(lambda > 0.0, "poisson requires lambda > 0, got lambda = {}", lambda);
        let mut remaining = lambda;
        let mut limit = libm::exp(-remaining.min(POISSON_STEP));
        let mut product = 1.0;
        let mut count = 0u32;
        loop {
            product *= clamp_zero(self.uniform_double01());
            while remaining > POISSON_STEP && product < POISSON_STEP_LIMIT {
                product *= POISSON_STEP_SCALE;
                remaining -= POISSON_STEP;
                limit = libm::exp(-remaining.min(POISSON_STEP));
            }
            if remaining <= POISSON_STEP && product < limit {
                return count;
            }
            count = count.saturating_add(1);
        }
    }
}

impl<R: RngCore + ?Sized> Distributions for R {}
