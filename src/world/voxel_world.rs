use bevy::prelude::*;

use crate::config::WorldConfig;
use crate::world::column::{VoxelColumn, build_column};
use crate::world::height_field::HeightField;
use crate::world::noise_source::NoiseSource;
use crate::world::voxel::VoxelData;

/// The whole terrain: a height field plus one voxel column per cell.
///
/// Terrain, water and air codes never change after generation. The only
/// mutation is moving the occupant code, done through [`VoxelWorld::place_occupant`]
/// and [`VoxelWorld::clear_occupant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelWorld {
    height_field: HeightField,
    /// Indexed as: x * map_size + y
    columns: Vec<VoxelColumn>,
    height_limit: u32,
    sea_level: u32,
}

impl VoxelWorld {
    /// Generate every column, with the occupant standing on `config.spawn`
    pub fn generate(config: &WorldConfig, noise: &impl NoiseSource) -> Self {
        let size = config.map_size;
        let height_field = HeightField::generate(size, noise, config.height_limit);

        let mut columns = Vec::with_capacity((size * size) as usize);
        for i in 0..size {
            for j in 0..size {
                let occupant_level =
                    (UVec2::new(i, j) == config.spawn).then(|| height_field.get(i, j));
                columns.push(build_column(
                    i,
                    j,
                    &height_field,
                    noise,
                    config.height_limit,
                    config.sea_level,
                    occupant_level,
                ));
            }
        }

        Self {
            height_field,
            columns,
            height_limit: config.height_limit,
            sea_level: config.sea_level,
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.height_field.size()
    }

    #[inline]
    pub fn height_limit(&self) -> u32 {
        self.height_limit
    }

    #[inline]
    pub fn height(&self, cell: UVec2) -> u32 {
        self.height_field.at(cell)
    }

    #[inline]
    fn column_index(&self, cell: UVec2) -> usize {
        let size = self.size();
        assert!(cell.x < size && cell.y < size, "cell {cell} is off the grid");
        (cell.x * size + cell.y) as usize
    }

    pub fn column(&self, cell: UVec2) -> &VoxelColumn {
        &self.columns[self.column_index(cell)]
    }

    /// Get voxel at a cell and level, or `None` above the ceiling
    #[cfg(test)]
    pub fn voxel(&self, cell: UVec2, z: u32) -> Option<VoxelData> {
        self.column(cell).get(z)
    }

    /// Put the occupant code on the surface of `cell`
    pub(crate) fn place_occupant(&mut self, cell: UVec2) {
        let z = self.height(cell);
        let idx = self.column_index(cell);
        self.columns[idx].set(z, VoxelData::OCCUPANT);
    }

    /// Restore the surface level of `cell` to what generation put there:
    /// water below sea level, air otherwise
    pub(crate) fn clear_occupant(&mut self, cell: UVec2) {
        let z = self.height(cell);
        let restored = if z >= self.sea_level {
            VoxelData::AIR
        } else {
            VoxelData::WATER
        };
        let idx = self.column_index(cell);
        self.columns[idx].set(z, restored);
    }

    /// Every (cell, level) currently holding the occupant code
    #[cfg(test)]
    pub fn occupant_cells(&self) -> Vec<(UVec2, u32)> {
        let size = self.size();
        self.columns
            .iter()
            .enumerate()
            .flat_map(|(idx, column)| {
                let cell = UVec2::new(idx as u32 / size, idx as u32 % size);
                column
                    .iter()
                    .enumerate()
                    .filter(|(_, voxel)| voxel.is_occupant())
                    .map(move |(z, _)| (cell, z as u32))
            })
            .collect()
    }
}
