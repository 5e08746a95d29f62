use rand_xs1024::*;

const SAMPLES: usize = 100_000;

fn mean_and_variance(mut sample: impl FnMut() -> f64) -> (f64, f64) {
    let values: Vec<f64> = (0 .. SAMPLES).map(|_| sample()).collect();
    let mean = values.iter().sum::<f64>() / SAMPLES as f64;
    let variance = values.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (SAMPLES - 1) as f64;
    (mean, variance)
}

fn assert_close(expected: f64, actual: f64, tolerance: f64, what: &str) {
    assert!((expected - actual).abs() < tolerance, "{what}: expected {expected} +- {tolerance}, got {actual}");
}

#[test]
fn uniform_double01_mean_is_one_half() {
    let mut rng = Xs1024::from_u64(1).unwrap();
    let (mean, variance) = mean_and_variance(|| rng.uniform_double01());
    assert_close(0.5, mean, 0.005, "uniform mean");
    assert_close(1.0 / 12.0, variance, 0.002, "uniform variance");
}

#[test]
fn normal_is_standard() {
    let mut rng = Xs1024::new();
    let (mean, variance) = mean_and_variance(|| rng.normal());
    assert_close(0.0, mean, 0.02, "normal mean");
    assert_close(1.0, variance, 0.03, "normal variance");
}

#[test]
fn normal_with_shifts_and_scales() {
    let mut rng = Xs1024::from_u64(2).unwrap();
    let (mean, variance) = mean_and_variance(|| rng.normal_with(-3.0, 2.0));
    assert_close(-3.0, mean, 0.04, "normal_with mean");
    assert_close(4.0, variance, 0.12, "normal_with variance");
}

#[test]
fn exponential_mean_is_inverse_rate() {
    let mut rng = Xs1024::from_u64(3).unwrap();
    let (mean, _) = mean_and_variance(|| rng.exponential(2.0));
    assert_close(0.5, mean, 0.01, "exponential mean");
}

#[test]
fn weibull_mean_matches_gamma() {
    let mut rng = Xs1024::from_u64(4).unwrap();
    // Gamma(1 + 1/2) = sqrt(pi) / 2.
    let (mean, _) = mean_and_variance(|| rng.weibull(2.0, 1.0));
    assert_close(0.886226925452758, mean, 0.01, "weibull mean");
}

#[test]
fn erlang_mean_is_stages_over_rate() {
    let mut rng = Xs1024::from_u64(5).unwrap();
    let (mean, variance) = mean_and_variance(|| rng.erlang(3, 2.0));
    assert_close(1.5, mean, 0.02, "erlang mean");
    assert_close(0.75, variance, 0.03, "erlang variance");
}

#[test]
fn bernoulli_rate_matches_probability() {
    let mut rng = Xs1024::from_u64(6).unwrap();
    let (mean, _) = mean_and_variance(|| rng.bernoulli(0.3) as f64);
    assert_close(0.3, mean, 0.01, "bernoulli rate");
}

#[test]
fn geometric_mean_counts_failures() {
    let mut rng = Xs1024::from_u64(7).unwrap();
    let (mean, _) = mean_and_variance(|| rng.geometric(0.25) as f64);
    assert_close(3.0, mean, 0.07, "geometric mean");
}

#[test]
fn binomial_mean_is_np() {
    let mut rng = Xs1024::from_u64(8).unwrap();
    let (mean, variance) = mean_and_variance(|| rng.binomial(10, 0.3) as f64);
    assert_close(3.0, mean, 0.03, "binomial mean");
    assert_close(2.1, variance, 0.06, "binomial variance");
}

#[test]
fn negative_binomial_mean() {
    let mut rng = Xs1024::from_u64(9).unwrap();
    let (mean, _) = mean_and_variance(|| rng.negative_binomial(3, 0.4) as f64);
    assert_close(4.5, mean, 0.07, "negative binomial mean");
}

#[test]
fn poisson_mean_and_variance_equal_lambda() {
    let mut rng = Xs1024::from_u64(10).unwrap();
    let (mean, variance) = mean_and_variance(|| rng.poisson(4.0) as f64);
    assert_close(4.0, mean, 0.05, "poisson mean");
    assert_close(4.0, variance, 0.15, "poisson variance");
}

#[test]
fn uniform_int_is_roughly_flat() {
    let mut rng = Xs1024::from_u64(11).unwrap();
    let mut counts = [0usize; 6];
    for _ in 0 .. SAMPLES {
        counts[(rng.uniform_int(1, 6) - 1) as usize] += 1;
    }
    for count in counts {
        assert_close(SAMPLES as f64 / 6.0, count as f64, 600.0, "die face count");
    }
}

#[test]
fn poisson_mean_holds_for_large_lambda() {
    let mut rng = Xs1024::from_u64(12).unwrap();
    let values: Vec<f64> = (0 .. 10_000).map(|_| rng.poisson(1000.0) as f64).collect();
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (values.len() - 1) as f64;
    assert_close(1000.0, mean, 2.0, "large poisson mean");
    assert_close(1000.0, variance, 100.0, "large poisson variance");
}
