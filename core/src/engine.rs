/// Stateful wrapper owning the double buffers.
///
/// The kernels are free functions over caller-supplied slices; `WaveEngine`
/// is the owned form for hosts that allocate once and step a simulation
/// forward frame by frame. It never reallocates after construction; `evolve`
/// is a pure in-place transform over the owned pair.

use crate::config::EvolutionConfig;
use crate::evolution::run_evolution;
use crate::field::WaveField;
use crate::numeric::SimpleRng;

pub struct WaveEngine {
    pub cfg: EvolutionConfig,
    state: WaveField,
    scratch: WaveField,
}

impl WaveEngine {
    pub fn new(batch: usize, dim: usize) -> Self {
        Self::with_config(batch, dim, EvolutionConfig::default())
    }

    pub fn with_config(batch: usize, dim: usize, cfg: EvolutionConfig) -> Self {
        assert!(dim >= 1, "dim must be at least 1");
        WaveEngine {
            cfg,
            state: WaveField::zeros(batch, dim),
            scratch: WaveField::zeros(batch, dim),
        }
    }

    pub fn batch(&self) -> usize {
        self.state.batch
    }

    pub fn dim(&self) -> usize {
        self.state.dim
    }

    pub fn state(&self) -> &WaveField {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut WaveField {
        &mut self.state
    }

    /// Zero every channel of every lane.
    pub fn reset(&mut self) {
        self.state.fill(0.0);
    }

    /// Random start condition, uniform in [-scale, scale].
    pub fn seed_uniform(&mut self, seed: u64, scale: f32) {
        let mut rng = SimpleRng::new(seed);
        self.state.fill_uniform(&mut rng, scale);
    }

    /// Advance all lanes by `steps`; the result lands in `state()`.
    pub fn evolve(&mut self, rules: &[f32; 3], anchors: &[f32], steps: usize, noise_level: f32) {
        assert_eq!(
            anchors.len(),
            self.state.dim,
            "anchors length must equal dim"
        );
        run_evolution(
            &mut self.state.data,
            &mut self.scratch.data,
            rules,
            anchors,
            self.state.batch,
            self.state.dim,
            steps,
            noise_level,
            &self.cfg,
        );
    }
}
