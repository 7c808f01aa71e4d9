use bevy::prelude::*;
use shared::OrientationFrame;
use std::time::Duration;

use crate::scene::{BodySlab, OverlayText};

/// Nominal display tick interval
pub const FRAME_INTERVAL: Duration = Duration::from_millis(20);

/// Frames in one playback cycle before the index wraps
pub const FRAME_COUNT: u64 = 800;

// The body axes draw through their own config group so they can be thicker
// than the reference axes
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct BodyAxisGizmos;

// Playback clock: owns the frame index and the fixed tick cadence
#[derive(Resource)]
pub struct FramePlayback {
    pub timer: Timer,
    pub index: u64,
    pub paused: bool,
}

impl Default for FramePlayback {
    fn default() -> Self {
        Self {
            timer: Timer::new(FRAME_INTERVAL, TimerMode::Repeating),
            index: 0,
            paused: false,
        }
    }
}

// The one currently displayed frame, wholesale replaced every tick
#[derive(Resource)]
pub struct CurrentFrame(pub OrientationFrame);

impl Default for CurrentFrame {
    fn default() -> Self {
        Self(OrientationFrame::at(0))
    }
}

pub fn configure_gizmo_lines(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<BodyAxisGizmos>();
    config.line_width = 4.0;
}

// System to advance the playback clock and recompute the displayed frame
pub fn advance_frames(
    time: Res<Time>,
    mut playback: ResMut<FramePlayback>,
    mut current: ResMut<CurrentFrame>,
) {
    if playback.paused {
        return;
    }

    playback.timer.tick(time.delta());
    let steps = playback.timer.times_finished_this_tick() as u64;
    if steps == 0 {
        return;
    }

    playback.index = (playback.index + steps) % FRAME_COUNT;
    if playback.index < steps {
        debug!("playback wrapped to frame {}", playback.index);
    }

    // Fresh immutable data each tick; nothing from the previous frame survives
    current.0 = OrientationFrame::at(playback.index);
}

// System to draw the body axes as red/green/blue arrows from the origin
pub fn draw_body_axes(current: Res<CurrentFrame>, mut gizmos: Gizmos<BodyAxisGizmos>) {
    let axes = current.0.axes;
    gizmos.arrow(Vec3::ZERO, axes.x, Color::srgb(0.9, 0.1, 0.1));
    gizmos.arrow(Vec3::ZERO, axes.y, Color::srgb(0.1, 0.8, 0.1));
    gizmos.arrow(Vec3::ZERO, axes.z, Color::srgb(0.15, 0.3, 0.9));
}

// System to spin the slab with the same orientation as the arrows
pub fn rotate_body(current: Res<CurrentFrame>, mut query: Query<&mut Transform, With<BodySlab>>) {
    if let Ok(mut transform) = query.get_single_mut() {
        transform.rotation = current.0.rotation.into();
    }
}

// System to refresh the angle readout
pub fn update_overlay(current: Res<CurrentFrame>, mut query: Query<&mut Text, With<OverlayText>>) {
    if let Ok(mut text) = query.get_single_mut() {
        let rotation = current.0.rotation;
        text.0 = format!(
            "Yaw  (Z): {:6.1} deg\nPitch (Y): {:6.1} deg\nRoll (X): {:6.1} deg",
            rotation.yaw, rotation.pitch, rotation.roll
        );
    }
}

// System to pause/resume playback with Space
pub fn toggle_pause(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut playback: ResMut<FramePlayback>,
) {
    if keyboard_input.just_pressed(KeyCode::Space) {
        playback.paused = !playback.paused;
        info!(
            "playback {}",
            if playback.paused { "paused" } else { "resumed" }
        );
    }
}
