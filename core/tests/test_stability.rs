//! Stress suite: overload stability, long-run entropy, zen decay, and batch
//! isolation. Milestone diagnostics go to stderr.

use ringwave_core::engine::WaveEngine;
use ringwave_core::field::Channel;
use ringwave_core::numeric::SimpleRng;

/// Exploding input: huge anchors and aggressive rules must stay clamped.
#[test]
fn test_overload_stability() {
    let (batch, dim) = (8, 512);
    let mut engine = WaveEngine::new(batch, dim);
    engine.seed_uniform(11, 0.1);

    let mut rng = SimpleRng::new(3);
    let mut anchors = vec![0.0f32; dim];
    rng.fill_uniform(&mut anchors, 1000.0);

    engine.evolve(&[5.0, -10.0, 5.0], &anchors, 100, 1.0);

    let max_val = engine
        .state()
        .data
        .iter()
        .fold(0.0f32, |m, &v| m.max(v.abs()));
    eprintln!("overload: max amplitude after 100 steps = {max_val:.4}");
    assert!(max_val <= 5.0, "system exploded: max amplitude {max_val}");
}

/// Long-term entropy: 2000 steps under noise, no NaN anywhere.
#[test]
fn test_long_run_entropy() {
    let (batch, dim) = (4, 256);
    let mut engine = WaveEngine::new(batch, dim);
    engine.seed_uniform(21, 0.1);

    let mut rng = SimpleRng::new(5);
    let mut anchors = vec![0.0f32; dim];
    rng.fill_uniform(&mut anchors, 1000.0);

    for round in 0..20 {
        engine.evolve(&[5.0, -10.0, 5.0], &anchors, 100, 0.1);
        assert!(
            engine.state().data.iter().all(|v| v.is_finite()),
            "NaN detected at round {round}"
        );
    }
}

/// Zen decay: a fully lit field with zero stimulus must suppress itself.
#[test]
fn test_zen_decay() {
    let (batch, dim) = (2, 128);
    let mut engine = WaveEngine::new(batch, dim);
    engine.state_mut().fill(3.0);

    let anchors = vec![0.0f32; dim];
    for _ in 0..50 {
        engine.evolve(&[0.5, -0.1, 0.5], &anchors, 10, 0.0);
    }

    let mut sum = 0.0f32;
    for b in 0..batch {
        for &v in engine.state().channel(b, Channel::Activity) {
            sum += v.abs();
        }
    }
    let mean_activity = sum / (batch * dim) as f32;
    eprintln!("zen decay: activity dropped from 3.0 to {mean_activity:.6}");
    assert!(mean_activity < 1.0, "residual activity not suppressed: {mean_activity}");
}

/// Exciting only lane 0 must leave every other lane exactly zero.
#[test]
fn test_batch_isolation() {
    let (batch, dim) = (4, 64);
    let mut engine = WaveEngine::new(batch, dim);
    for v in engine.state_mut().lane_mut(0) {
        *v = 2.0;
    }

    let anchors = vec![0.0f32; dim];
    engine.evolve(&[0.5, -0.1, 0.5], &anchors, 20, 0.0);

    let stride = 3 * dim;
    let leaks: f32 = engine.state().data[stride..].iter().map(|v| v.abs()).sum();
    assert_eq!(leaks, 0.0, "state leaked between lanes: sum = {leaks}");
}
