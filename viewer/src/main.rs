use bevy::prelude::*;

mod animation;
mod scene;
mod snapshot;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .init_gizmo_group::<animation::BodyAxisGizmos>()
        .init_resource::<animation::FramePlayback>()
        .init_resource::<animation::CurrentFrame>()
        .add_systems(
            Startup,
            (scene::setup_scene, animation::configure_gizmo_lines),
        )
        .add_systems(
            Update,
            (
                animation::toggle_pause,
                animation::advance_frames,
                scene::draw_reference_axes,
                animation::draw_body_axes,
                animation::rotate_body,
                animation::update_overlay,
                snapshot::save_on_keypress,
            ),
        )
        .run();
}
