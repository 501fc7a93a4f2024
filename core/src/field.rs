/// Batched ring state storage.
///
/// One lane is a ring of `dim` cells with three channels stored channel-major:
/// the activity block, then the anchor-trace block, then the fatigue block.
/// Lanes are contiguous, so lane `b` occupies `data[b*3*dim .. (b+1)*3*dim]`.
/// Flat Vec<f32> with shape metadata, row-major throughout.

use crate::numeric::SimpleRng;

/// One of the three per-cell channels, in storage order within a lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Fast-varying excitatory signal.
    Activity = 0,
    /// Slow memory trace pulled toward the external anchor target.
    Trace = 1,
    /// Non-negative accumulator of recent activity magnitude.
    Fatigue = 2,
}

/// Flat f32 state buffer with shape metadata: [batch][3][dim].
#[derive(Clone, Debug)]
pub struct WaveField {
    pub data: Vec<f32>,
    pub batch: usize,
    pub dim: usize,
}

impl WaveField {
    pub fn zeros(batch: usize, dim: usize) -> Self {
        WaveField {
            data: vec![0.0; batch * 3 * dim],
            batch,
            dim,
        }
    }

    /// Elements per lane: three channel blocks of `dim`.
    #[inline]
    pub fn lane_stride(&self) -> usize {
        3 * self.dim
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// All three channel blocks of lane `b`.
    pub fn lane(&self, b: usize) -> &[f32] {
        let s = self.lane_stride();
        &self.data[b * s..(b + 1) * s]
    }

    pub fn lane_mut(&mut self, b: usize) -> &mut [f32] {
        let s = self.lane_stride();
        &mut self.data[b * s..(b + 1) * s]
    }

    /// One channel block of lane `b`.
    pub fn channel(&self, b: usize, ch: Channel) -> &[f32] {
        let base = b * self.lane_stride() + ch as usize * self.dim;
        &self.data[base..base + self.dim]
    }

    pub fn channel_mut(&mut self, b: usize, ch: Channel) -> &mut [f32] {
        let dim = self.dim;
        let base = b * self.lane_stride() + ch as usize * dim;
        &mut self.data[base..base + dim]
    }

    /// Set every element of every lane and channel to `value`.
    pub fn fill(&mut self, value: f32) {
        for v in self.data.iter_mut() {
            *v = value;
        }
    }

    /// Random start condition: uniform values in [-scale, scale].
    pub fn fill_uniform(&mut self, rng: &mut SimpleRng, scale: f32) {
        rng.fill_uniform(&mut self.data, scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let f = WaveField::zeros(4, 128);
        assert_eq!(f.numel(), 4 * 3 * 128);
        assert!(f.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_channel_offsets() {
        let mut f = WaveField::zeros(2, 4);
        f.channel_mut(1, Channel::Fatigue)[3] = 9.0;
        // lane 1 starts at 12; fatigue block starts at 12 + 2*4 = 20
        assert_eq!(f.data[23], 9.0);
        assert_eq!(f.channel(1, Channel::Fatigue)[3], 9.0);
        assert_eq!(f.channel(1, Channel::Activity)[3], 0.0);
    }

    #[test]
    fn test_lane_is_disjoint() {
        let mut f = WaveField::zeros(2, 8);
        f.lane_mut(0).iter_mut().for_each(|v| *v = 1.0);
        assert!(f.lane(1).iter().all(|&v| v == 0.0));
    }
}
