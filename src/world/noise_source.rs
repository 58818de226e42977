use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

/// A deterministic, continuous 2D noise function with values in `[0, 1]`
pub trait NoiseSource {
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Fractal Perlin noise from the `noise` crate, remapped to `[0, 1]`
pub struct FbmNoise {
    fbm: Fbm<Perlin>,
}

impl FbmNoise {
    pub fn new(seed: u32, octaves: usize) -> Self {
        Self {
            fbm: Fbm::<Perlin>::new(seed).set_octaves(octaves),
        }
    }
}

impl NoiseSource for FbmNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let raw = self.fbm.get([x, y]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

/// Same value everywhere. Handy for pinning generation in tests.
#[cfg(test)]
pub struct ConstantNoise(pub f64);

#[cfg(test)]
impl NoiseSource for ConstantNoise {
    fn sample(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}
