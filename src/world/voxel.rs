use bevy::prelude::*;

/// What a voxel code looks like on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialType {
    Air,
    Water,
    DeepWater,
    Sand,
    Grass,
    /// The player marker
    Occupant,
}

impl MaterialType {
    /// Every material that produces a draw, in a stable order
    pub const DRAWABLE: [MaterialType; 5] = [
        MaterialType::Water,
        MaterialType::DeepWater,
        MaterialType::Sand,
        MaterialType::Grass,
        MaterialType::Occupant,
    ];

    /// Map a raw code to its material.
    ///
    /// Returns `None` for codes outside the closed set.
    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            VoxelData::WATER_CODE => Some(MaterialType::Water),
            VoxelData::OCCUPANT_CODE => Some(MaterialType::Occupant),
            VoxelData::AIR_CODE => Some(MaterialType::Air),
            0..=4 => Some(MaterialType::Sand),
            5..=7 => Some(MaterialType::Grass),
            8 => Some(MaterialType::DeepWater),
            _ => None,
        }
    }

    /// Air is the only material that is never drawn
    #[inline]
    pub fn is_drawable(&self) -> bool {
        *self != MaterialType::Air
    }

    /// Get the tint used when drawing this material
    pub fn default_color(&self) -> Color {
        match self {
            MaterialType::Air => Color::NONE,
            MaterialType::Water => Color::srgb(0.25, 0.5, 0.9),
            MaterialType::DeepWater => Color::srgb(0.1, 0.25, 0.6),
            MaterialType::Sand => Color::srgb(0.87, 0.8, 0.55),
            MaterialType::Grass => Color::srgb(0.35, 0.7, 0.3),
            MaterialType::Occupant => Color::srgb(0.9, 0.2, 0.2),
        }
    }
}

/// One level of a voxel column, stored as its raw material code.
///
/// Negative codes are sentinels, non-negative codes are terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelData {
    code: i8,
}

impl VoxelData {
    pub const WATER_CODE: i8 = -3;
    pub const OCCUPANT_CODE: i8 = -2;
    pub const AIR_CODE: i8 = -1;

    pub const WATER: VoxelData = VoxelData { code: Self::WATER_CODE };
    pub const OCCUPANT: VoxelData = VoxelData { code: Self::OCCUPANT_CODE };
    pub const AIR: VoxelData = VoxelData { code: Self::AIR_CODE };

    /// Create a terrain voxel from a material selector
    #[inline]
    pub fn terrain(code: i8) -> Self {
        debug_assert!(code >= 0, "terrain codes are non-negative, got {code}");
        Self { code }
    }

    /// Get the raw code
    #[cfg(test)]
    pub fn code(&self) -> i8 {
        self.code
    }

    /// Get material type.
    ///
    /// Panics on a code outside the closed set: the generator never emits one.
    pub fn material(&self) -> MaterialType {
        MaterialType::from_code(self.code)
            .unwrap_or_else(|| panic!("voxel holds unknown material code {}", self.code))
    }

    #[cfg(test)]
    pub fn is_occupant(&self) -> bool {
        self.code == Self::OCCUPANT_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_codes() {
        assert_eq!(VoxelData::WATER.material(), MaterialType::Water);
        assert_eq!(VoxelData::OCCUPANT.material(), MaterialType::Occupant);
        assert_eq!(VoxelData::AIR.material(), MaterialType::Air);
        assert!(VoxelData::OCCUPANT.is_occupant());
    }

    #[test]
    fn test_terrain_codes() {
        for code in 0..=4 {
            assert_eq!(VoxelData::terrain(code).material(), MaterialType::Sand);
        }
        for code in 5..=7 {
            assert_eq!(VoxelData::terrain(code).material(), MaterialType::Grass);
        }
        assert_eq!(VoxelData::terrain(8).material(), MaterialType::DeepWater);
    }

    #[test]
    fn test_unknown_codes_have_no_material() {
        assert_eq!(MaterialType::from_code(9), None);
        assert_eq!(MaterialType::from_code(-4), None);
    }

    #[test]
    #[should_panic(expected = "unknown material code 42")]
    fn test_unknown_code_lookup_panics() {
        VoxelData::terrain(42).material();
    }

    #[test]
    fn test_only_air_is_hidden() {
        assert!(!MaterialType::Air.is_drawable());
        assert!(MaterialType::DRAWABLE.iter().all(MaterialType::is_drawable));
    }
}
