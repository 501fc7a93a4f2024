/// The memory update: anchor adaptation with panic-scaled decay.
///
/// Nudges each anchor weight against an externally computed gradient while
/// shrinking it toward zero, the shrinkage amplified by the panic level.
/// When the truth signal is high and the gradient agrees with the weight's
/// sign, a reinforcement term pushes the weight further in its current
/// direction instead.
///
/// Per-position independent, read-then-write; no neighbor coupling, unlike
/// the evolution kernel.

use crate::config::{DecayKind, MemoryConfig};
use crate::numeric::clamp_amplitude;

/// Update `anchor_matrix` in place against `grads`.
///
/// Gradients are clamped to [-1, 1] before use. Precondition:
/// `anchor_matrix.len() == grads.len()`.
pub fn update_memory(
    anchor_matrix: &mut [f32],
    grads: &[f32],
    lr: f32,
    truth_signal: f32,
    panic_level: f32,
    cfg: &MemoryConfig,
) {
    debug_assert_eq!(anchor_matrix.len(), grads.len());

    let decay = cfg.base_decay * (1.0 + panic_level * cfg.panic_gain);

    for (w, &raw) in anchor_matrix.iter_mut().zip(grads.iter()) {
        let g = raw.max(-1.0).min(1.0);

        let decay_force = decay_force(cfg.decay, decay, *w);

        let reinforcement = if truth_signal > cfg.truth_threshold && g * *w > 0.0 {
            cfg.reinforcement_rate * g.abs() * truth_signal
        } else {
            0.0
        };
        let direction = if *w > 0.0 { 1.0 } else { -1.0 };

        *w = clamp_amplitude(
            *w - (lr * g + decay_force - reinforcement * direction),
            cfg.max_amplitude,
        );
    }
}

/// Magnitude- and sign-aware shrinkage toward zero.
#[inline]
fn decay_force(kind: DecayKind, decay: f32, w: f32) -> f32 {
    match kind {
        // Linear term keeps small weights decaying instead of stalling.
        DecayKind::Hybrid => decay * w * (0.5 + w.abs()),
        DecayKind::Quadratic => decay * w * w.abs(),
    }
}
