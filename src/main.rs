use bevy::{
    prelude::*,
    window::{WindowPlugin, WindowResolution},
};
use clap::Parser;

mod config;
use config::*;

mod controls;
use controls::*;

mod rendering;
use rendering::*;

mod rotation;

mod world;
use world::*;

fn main() -> anyhow::Result<()> {
    let config = WorldConfig::try_from(Args::parse())?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Isometric lands".to_string(),
                resolution: WindowResolution::new(config.viewport_width, config.viewport_height),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.08)))
        .insert_resource(config)
        .add_plugins((
            WorldGenerationPlugin,
            ControlsPlugin,
            IsometricProjectionPlugin,
            TileRendererPlugin,
        ))
        .run();

    Ok(())
}
