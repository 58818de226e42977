use bevy::prelude::*;

use crate::config::WorldConfig;
use crate::world::WorldState;

/// Held-key bindings for movement, in priority order.
///
/// At most one move happens per step: the first held key whose move is accepted.
///
/// The deltas are diagonal so each key walks along one screen axis of the diamond grid.
pub const MOVE_BINDINGS: [(KeyCode, IVec2); 4] = [
    (KeyCode::ArrowLeft, IVec2::new(-1, 1)),
    (KeyCode::ArrowRight, IVec2::new(1, -1)),
    (KeyCode::ArrowUp, IVec2::new(-1, -1)),
    (KeyCode::ArrowDown, IVec2::new(1, 1)),
];

/// Held-key bindings for camera yaw, in quarter steps. First held key wins.
pub const ROTATE_BINDINGS: [(KeyCode, i32); 2] = [(KeyCode::KeyQ, 3), (KeyCode::KeyE, 1)];

pub const QUIT_KEY: KeyCode = KeyCode::Escape;

/// Samples input at the configured frame rate
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, configure_step_rate)
            .add_systems(
                FixedUpdate,
                (handle_movement, handle_rotation)
                    .chain()
                    .run_if(resource_exists::<WorldState>),
            )
            .add_systems(Update, handle_quit);
    }
}

fn configure_step_rate(mut commands: Commands, config: Res<WorldConfig>) {
    commands.insert_resource(Time::<Fixed>::from_hz(config.frame_rate as f64));
}

/// Make at most one move per step
fn handle_movement(keyboard_input: Res<ButtonInput<KeyCode>>, mut state: ResMut<WorldState>) {
    for (key, delta) in MOVE_BINDINGS {
        if !keyboard_input.pressed(key) {
            continue;
        }
        // Only flag a change when the move went through, so rejected
        // moves don't trigger a redraw
        if state.bypass_change_detection().move_occupant(delta) {
            state.set_changed();
            return;
        }
    }
}

/// Make at most one quarter turn per step
fn handle_rotation(keyboard_input: Res<ButtonInput<KeyCode>>, mut state: ResMut<WorldState>) {
    let held = ROTATE_BINDINGS
        .into_iter()
        .find(|(key, _)| keyboard_input.pressed(*key));
    if let Some((_, delta)) = held {
        state.rotate_camera(delta);
    }
}

fn handle_quit(keyboard_input: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard_input.just_pressed(QUIT_KEY) {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
}
