use bevy::prelude::*;

use crate::config::NOISE_SCALE;
use crate::world::noise_source::NoiseSource;

/// Lowest surface any cell can have
pub const MIN_HEIGHT: u32 = 2;

/// Square grid of surface heights, one per cell.
///
/// Immutable after generation. Every value lies in `[2, height_limit - 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightField {
    size: u32,
    /// Indexed as: x * size + y
    heights: Vec<u32>,
}

impl HeightField {
    /// Sample the noise once per cell at (i / 8, j / 8).
    ///
    /// Squaring the sample pushes mid values down and leaves peaks sharp.
    pub fn generate(size: u32, noise: &impl NoiseSource, height_limit: u32) -> Self {
        let mut heights = Vec::with_capacity((size * size) as usize);
        for i in 0..size {
            for j in 0..size {
                let n = noise.sample(i as f64 / NOISE_SCALE, j as f64 / NOISE_SCALE);
                heights.push(surface_height(n, height_limit));
            }
        }
        Self { size, heights }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Height of the cell at (x, y). Panics off the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u32 {
        assert!(x < self.size && y < self.size, "cell ({x}, {y}) is off the grid");
        self.heights[(x * self.size + y) as usize]
    }

    #[inline]
    pub fn at(&self, cell: UVec2) -> u32 {
        self.get(cell.x, cell.y)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.heights.iter().copied()
    }
}

/// `floor(n² · (limit - 2) + 2)`, kept below the ceiling when n hits 1
fn surface_height(n: f64, height_limit: u32) -> u32 {
    let raw = (n * n * (height_limit - MIN_HEIGHT) as f64 + MIN_HEIGHT as f64).floor();
    (raw as u32).clamp(MIN_HEIGHT, height_limit - 1)
}
