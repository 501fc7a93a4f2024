/// Kernel configuration: every physics constant as a named, documented field.
///
/// Nothing in the kernels reads a hidden literal. Test suites override single
/// fields for boundary testing; deployments pin a full struct.

use serde::{Deserialize, Serialize};

/// Which decay-force shape the memory update applies.
///
/// A deployment picks exactly one; the shapes have different small-weight
/// behavior and must not be mixed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DecayKind {
    /// `decay * w * (0.5 + |w|)`, hybrid L1/L2: the linear term keeps small
    /// weights decaying instead of stalling near zero.
    Hybrid,
    /// `decay * w * |w|`, pure quadratic; vanishes as w approaches 0.
    Quadratic,
}

/// Evolution kernel constants, immutable for the duration of a run.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Hard bound on every channel value; clamp target after each write.
    pub max_amplitude: f32,
    /// Integration timestep.
    pub dt: f32,
    /// Fatigue level above which the excitatory drive is gated to zero.
    pub gate_threshold: f32,
    /// Weight of the anchor-trace contribution to the excitatory drive.
    /// The gate covers the combined lateral + trace drive, not lateral alone.
    pub trace_coupling: f32,
    /// Pull rate of the trace toward the external anchor target.
    pub anchor_pull: f32,
    /// Feed rate of activity into the trace.
    pub trace_feed: f32,
    /// Fatigue accumulation per unit of activity magnitude.
    pub fatigue_gain: f32,
    /// Fatigue recovery rate.
    pub fatigue_recovery: f32,
    /// Strength of fatigue-proportional negative feedback on activity.
    pub inhibition_gain: f32,
    /// Inertial damping applied to the whole updated activity each step.
    pub damping: f32,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        EvolutionConfig {
            max_amplitude: 5.0,
            dt: 0.05,
            gate_threshold: 0.85,
            trace_coupling: 0.6,
            anchor_pull: 0.1,
            trace_feed: 0.3,
            fatigue_gain: 0.4,
            fatigue_recovery: 0.02,
            inhibition_gain: 2.5,
            damping: 0.98,
        }
    }
}

/// Memory update constants.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Hard bound on anchor values after each update.
    pub max_amplitude: f32,
    /// Baseline decay constant before panic amplification.
    pub base_decay: f32,
    /// Panic multiplier: effective decay = base_decay * (1 + panic * panic_gain).
    pub panic_gain: f32,
    /// Truth-signal level that must be exceeded for reinforcement to apply.
    pub truth_threshold: f32,
    /// Reinforcement magnitude per unit of |gradient| * truth_signal.
    pub reinforcement_rate: f32,
    /// Decay-force shape.
    pub decay: DecayKind,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        MemoryConfig {
            max_amplitude: 5.0,
            base_decay: 0.001,
            panic_gain: 50.0,
            truth_threshold: 0.15,
            reinforcement_rate: 0.05,
            decay: DecayKind::Hybrid,
        }
    }
}
