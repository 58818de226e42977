use bevy::prelude::*;
use clap::Parser;
use rand::Rng;
use thiserror::Error;

/// Upper bound for seeds drawn when none is supplied on the command line
pub const MAX_RANDOM_SEED: u32 = 10_000;

/// Octave count used for every terrain noise sample
pub const TERRAIN_OCTAVES: usize = 1;

/// Grid cells per noise unit. Cell (i, j) samples the noise at (i / 8, j / 8).
pub const NOISE_SCALE: f64 = 8.0;

/// Startup constants for world generation, movement and rendering.
///
/// Fixed once the app is built; nothing mutates this resource at runtime.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WorldConfig {
    /// Side length of the square grid
    pub map_size: u32,
    /// Number of vertical levels in every column
    pub height_limit: u32,
    /// Empty levels below this are filled with water instead of air
    pub sea_level: u32,
    /// Half-width of the rendered neighborhood, in cells
    pub render_distance: i32,
    /// How many levels below a column's surface get drawn
    pub render_depth: u32,
    pub tile_width: f32,
    pub tile_height: f32,
    /// Vertical pixel offset between two stacked levels
    pub tile_depth: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Input steps per second
    pub frame_rate: u32,
    /// Where the occupant starts
    pub spawn: UVec2,
    pub seed: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            map_size: 101,
            height_limit: 12,
            sea_level: 4,
            render_distance: 24,
            render_depth: 1,
            tile_width: 30.0,
            tile_height: 15.0,
            tile_depth: 15.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            frame_rate: 20,
            spawn: UVec2::new(40, 40),
            seed: 0,
        }
    }
}

/// Reasons a configuration is refused before the world is generated
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("map size must be at least 1")]
    EmptyMap,
    #[error("height limit must be at least 3, got {0}")]
    HeightLimitTooLow(u32),
    #[error("sea level {sea_level} is above the height limit {height_limit}")]
    SeaLevelAboveLimit { sea_level: u32, height_limit: u32 },
    #[error("spawn ({x}, {y}) lies outside the {map_size}x{map_size} map")]
    SpawnOutOfBounds { x: u32, y: u32, map_size: u32 },
    #[error("frame rate must be positive")]
    ZeroFrameRate,
}

impl WorldConfig {
    /// Check the invariants world generation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_size == 0 {
            return Err(ConfigError::EmptyMap);
        }
        // Heights live in [2, height_limit - 1], so we need at least one level above 2
        if self.height_limit < 3 {
            return Err(ConfigError::HeightLimitTooLow(self.height_limit));
        }
        if self.sea_level > self.height_limit {
            return Err(ConfigError::SeaLevelAboveLimit {
                sea_level: self.sea_level,
                height_limit: self.height_limit,
            });
        }
        if self.spawn.x >= self.map_size || self.spawn.y >= self.map_size {
            return Err(ConfigError::SpawnOutOfBounds {
                x: self.spawn.x,
                y: self.spawn.y,
                map_size: self.map_size,
            });
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }

    /// True if the signed cell coordinate lies on the grid
    #[inline]
    pub fn contains(&self, cell: IVec2) -> bool {
        let size = self.map_size as i32;
        (0..size).contains(&cell.x) && (0..size).contains(&cell.y)
    }
}

/// Command line for the terrain viewer
#[derive(Parser, Debug, Clone)]
#[command(name = "isometric_lands", about = "Seeded voxel terrain in an isometric view")]
pub struct Args {
    /// World seed; a random one is drawn when omitted
    #[arg(long)]
    pub seed: Option<u32>,

    #[arg(long, default_value_t = 101)]
    pub map_size: u32,

    #[arg(long, default_value_t = 12)]
    pub height_limit: u32,

    #[arg(long, default_value_t = 4)]
    pub sea_level: u32,

    #[arg(long, default_value_t = 24)]
    pub render_distance: i32,

    #[arg(long, default_value_t = 1)]
    pub render_depth: u32,

    #[arg(long, default_value_t = 40)]
    pub spawn_x: u32,

    #[arg(long, default_value_t = 40)]
    pub spawn_y: u32,

    /// Input steps per second
    #[arg(long, default_value_t = 20)]
    pub frame_rate: u32,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 720.0)]
    pub height: f32,
}

impl TryFrom<Args> for WorldConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let seed = args
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen_range(0..=MAX_RANDOM_SEED));

        let config = WorldConfig {
            map_size: args.map_size,
            height_limit: args.height_limit,
            sea_level: args.sea_level,
            render_distance: args.render_distance,
            render_depth: args.render_depth,
            viewport_width: args.width,
            viewport_height: args.height,
            frame_rate: args.frame_rate,
            spawn: UVec2::new(args.spawn_x, args.spawn_y),
            seed,
            ..default()
        };
        config.validate()?;
        Ok(config)
    }
}
