/// The evolution kernel: batched ring dynamics, double-buffered stepping.
///
/// Each lane is an independent ring of cells with three channels: activity,
/// anchor-trace, fatigue. Per step, every cell integrates a gated excitatory
/// drive (lateral coupling + trace contribution), fatigue-proportional
/// inhibition, and deterministic hash noise. All `dim` positions of a step
/// read pre-step values only; buffers swap between steps.
///
/// Lanes never share writable state, so the outer loop is data-parallel via
/// rayon. Within a lane, steps are strictly sequential.

use rayon::prelude::*;

use crate::config::EvolutionConfig;
use crate::numeric::{clamp_amplitude, lcg_noise, softsign};

/// Advance every lane by `steps` discrete steps.
///
/// `state` and `scratch` are [batch][3][dim] channel-major buffers; the final
/// result is always left in `state`, regardless of the parity of `steps`.
/// `rules` is the {left, self, right} lateral coupling vector; `anchors` is
/// the length-`dim` target for the trace channel, read-only here.
///
/// Preconditions (caller contract, not defended in release builds):
/// `state.len() == scratch.len() == batch * 3 * dim`, `anchors.len() == dim`,
/// `dim >= 1`.
pub fn run_evolution(
    state: &mut [f32],
    scratch: &mut [f32],
    rules: &[f32; 3],
    anchors: &[f32],
    batch: usize,
    dim: usize,
    steps: usize,
    noise_level: f32,
    cfg: &EvolutionConfig,
) {
    debug_assert!(dim >= 1);
    debug_assert_eq!(state.len(), batch * 3 * dim);
    debug_assert_eq!(scratch.len(), batch * 3 * dim);
    debug_assert_eq!(anchors.len(), dim);

    let stride = 3 * dim;
    state
        .par_chunks_mut(stride)
        .zip(scratch.par_chunks_mut(stride))
        .enumerate()
        .for_each(|(lane, (cur, nxt))| {
            evolve_lane(cur, nxt, rules, anchors, lane, dim, steps, noise_level, cfg);
        });
}

/// Ping-pong step loop for one lane. After the loop, `cur` holds the newest
/// step; on odd step counts that is the scratch chunk, so the result is
/// copied back into the state chunk.
#[allow(clippy::too_many_arguments)]
fn evolve_lane(
    lane_state: &mut [f32],
    lane_scratch: &mut [f32],
    rules: &[f32; 3],
    anchors: &[f32],
    lane: usize,
    dim: usize,
    steps: usize,
    noise_level: f32,
    cfg: &EvolutionConfig,
) {
    let mut cur: &mut [f32] = lane_state;
    let mut nxt: &mut [f32] = lane_scratch;

    for step in 0..steps {
        step_lane(cur, nxt, rules, anchors, lane, step, dim, steps, noise_level, cfg);
        std::mem::swap(&mut cur, &mut nxt);
    }

    if steps % 2 == 1 {
        nxt.copy_from_slice(cur);
    }
}

/// One transition for every position of one lane: read `cur`, write `nxt`.
#[allow(clippy::too_many_arguments)]
fn step_lane(
    cur: &[f32],
    nxt: &mut [f32],
    rules: &[f32; 3],
    anchors: &[f32],
    lane: usize,
    step: usize,
    dim: usize,
    steps: usize,
    noise_level: f32,
    cfg: &EvolutionConfig,
) {
    let (act_in, rest) = cur.split_at(dim);
    let (trace_in, fatigue_in) = rest.split_at(dim);
    let (act_out, rest_out) = nxt.split_at_mut(dim);
    let (trace_out, fatigue_out) = rest_out.split_at_mut(dim);

    for i in 0..dim {
        let act = act_in[i];
        let fatigue = fatigue_in[i];

        // Noise seed is a pure function of (lane, position, step, dim, steps).
        let seed = (lane * dim * steps + i * steps + step) as i32;
        let noise = lcg_noise(seed) * noise_level;

        // Refractory ceiling: high fatigue shuts off the whole excitatory
        // drive, trace contribution included.
        let gate = if fatigue > cfg.gate_threshold { 0.0 } else { 1.0 };

        let left = act_in[(i + dim - 1) % dim];
        let right = act_in[(i + 1) % dim];
        let lateral = rules[0] * left + rules[1] * act + rules[2] * right;

        let excitation = (lateral + trace_in[i] * cfg.trace_coupling) * gate;
        let inhibition = fatigue * cfg.inhibition_gain * act;
        let drift = excitation - inhibition + noise;

        act_out[i] = clamp_amplitude(
            (act + softsign(drift) * cfg.dt) * cfg.damping,
            cfg.max_amplitude,
        );

        let trace_drift = (anchors[i] - trace_in[i]) * cfg.anchor_pull + act * cfg.trace_feed;
        trace_out[i] = clamp_amplitude(trace_in[i] + trace_drift * cfg.dt, cfg.max_amplitude);

        let fatigue_drift = act.abs() * cfg.fatigue_gain - fatigue * cfg.fatigue_recovery;
        fatigue_out[i] = clamp_amplitude(
            (fatigue + fatigue_drift * cfg.dt).max(0.0),
            cfg.max_amplitude,
        );
    }
}
