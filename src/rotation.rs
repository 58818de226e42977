use bevy::prelude::*;

/// One of the four axis-aligned camera yaws.
///
/// Shared by movement and rendering, so both see the same quarter-turn steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Build from any step count, wrapping mod 4
    pub fn from_steps(steps: i32) -> Self {
        Self::ALL[steps.rem_euclid(4) as usize]
    }

    #[inline]
    pub fn steps(&self) -> i32 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    #[inline]
    pub fn cos(&self) -> i32 {
        match self {
            Rotation::R0 => 1,
            Rotation::R90 => 0,
            Rotation::R180 => -1,
            Rotation::R270 => 0,
        }
    }

    #[inline]
    pub fn sin(&self) -> i32 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 0,
            Rotation::R270 => -1,
        }
    }

    /// Turn by `delta` quarter steps
    #[inline]
    pub fn turned(&self, delta: i32) -> Self {
        Self::from_steps(self.steps() + delta)
    }
}

/// Current camera yaw, owned by the rotation controls.
///
/// Caches the cos/sin pair of the current rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraRotation {
    rotation: Rotation,
    cos: i32,
    sin: i32,
}

impl Default for CameraRotation {
    fn default() -> Self {
        Self::new(Rotation::R0)
    }
}

impl CameraRotation {
    pub fn new(rotation: Rotation) -> Self {
        Self {
            rotation,
            cos: rotation.cos(),
            sin: rotation.sin(),
        }
    }

    #[inline]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[cfg(test)]
    pub fn cos_sin(&self) -> (i32, i32) {
        (self.cos, self.sin)
    }

    /// `rotation = (rotation + delta) mod 4`
    pub fn rotate(&mut self, delta: i32) {
        *self = Self::new(self.rotation.turned(delta));
    }

    /// Map a local offset into world space.
    ///
    /// `dx' = dx·cos + dy·sin`, `dy' = dy·cos + dx·sin`. The odd steps swap
    /// the axes (a reflection), which is what keeps on-screen directions
    /// and movement in agreement.
    #[inline]
    pub fn apply(&self, offset: IVec2) -> IVec2 {
        IVec2::new(
            offset.x * self.cos + offset.y * self.sin,
            offset.y * self.cos + offset.x * self.sin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_table() {
        let cos: Vec<i32> = Rotation::ALL.iter().map(Rotation::cos).collect();
        let sin: Vec<i32> = Rotation::ALL.iter().map(Rotation::sin).collect();
        assert_eq!(cos, [1, 0, -1, 0]);
        assert_eq!(sin, [0, 1, 0, -1]);
    }

    fn applied(rotation: Rotation, x: i32, y: i32) -> IVec2 {
        CameraRotation::new(rotation).apply(IVec2::new(x, y))
    }

    #[test]
    fn test_identity_at_zero() {
        assert_eq!(applied(Rotation::R0, -1, 1), IVec2::new(-1, 1));
    }

    #[test]
    fn test_quarter_turn_swaps_axes() {
        assert_eq!(applied(Rotation::R90, -1, 1), IVec2::new(1, -1));
        assert_eq!(applied(Rotation::R90, 2, 5), IVec2::new(5, 2));
        assert_eq!(applied(Rotation::R180, 2, 5), IVec2::new(-2, -5));
        assert_eq!(applied(Rotation::R270, 2, 5), IVec2::new(-5, -2));
    }

    #[test]
    fn test_apply_uses_refreshed_pair() {
        let mut camera = CameraRotation::default();
        camera.rotate(1);

        assert_eq!(camera.cos_sin(), (0, 1));
        assert_eq!(camera.apply(IVec2::new(-1, 1)), IVec2::new(1, -1));

        camera.rotate(1);
        assert_eq!(camera.cos_sin(), (-1, 0));
        assert_eq!(camera.apply(IVec2::new(2, 5)), IVec2::new(-2, -5));
    }

    #[test]
    fn test_rotation_composition() {
        for start in Rotation::ALL {
            for a in 0..4 {
                for b in 0..4 {
                    let mut stepwise = CameraRotation::new(start);
                    stepwise.rotate(a);
                    stepwise.rotate(b);

                    let mut single = CameraRotation::new(start);
                    single.rotate((a + b) % 4);

                    assert_eq!(stepwise, single);
                }
            }
        }
    }

    #[test]
    fn test_four_turns_round_trip() {
        let offset = IVec2::new(3, -7);
        for delta in [1, 3] {
            let mut camera = CameraRotation::new(Rotation::R90);
            let before = (camera.cos_sin(), camera.apply(offset));
            for _ in 0..4 {
                camera.rotate(delta);
            }
            assert_eq!((camera.cos_sin(), camera.apply(offset)), before);
        }
    }

    #[test]
    fn test_counter_clockwise_wraps() {
        let mut camera = CameraRotation::default();
        camera.rotate(3);
        assert_eq!(camera.rotation(), Rotation::R270);
        assert_eq!(camera.cos_sin(), (0, -1));
        camera.rotate(1);
        assert_eq!(camera.rotation(), Rotation::R0);
    }
}
