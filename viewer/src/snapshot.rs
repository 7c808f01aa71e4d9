use anyhow::Result;
use bevy::prelude::{ButtonInput, KeyCode, Res};
use serde::Serialize;
use shared::OrientationFrame;
use std::fs;
use std::path::PathBuf;

use crate::animation::CurrentFrame;

#[derive(Debug, Serialize)]
/// Flat mirror of an `OrientationFrame` with plain-array vectors, for the
/// JSON export
struct Snapshot {
    frame: u64,
    yaw_deg: f32,
    pitch_deg: f32,
    roll_deg: f32,
    x_axis: [f32; 3],
    y_axis: [f32; 3],
    z_axis: [f32; 3],
}

impl From<&OrientationFrame> for Snapshot {
    fn from(frame: &OrientationFrame) -> Self {
        Self {
            frame: frame.index,
            yaw_deg: frame.rotation.yaw,
            pitch_deg: frame.rotation.pitch,
            roll_deg: frame.rotation.roll,
            x_axis: frame.axes.x.into(),
            y_axis: frame.axes.y.into(),
            z_axis: frame.axes.z.into(),
        }
    }
}

pub fn save_snapshot(frame: &OrientationFrame) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(&Snapshot::from(frame))?;
    let path = PathBuf::from(format!("gimbal_frame_{}.json", frame.index));
    fs::write(&path, json)?;
    Ok(path)
}

// System to export the displayed frame when 'S' is pressed
pub fn save_on_keypress(keyboard_input: Res<ButtonInput<KeyCode>>, current: Res<CurrentFrame>) {
    if keyboard_input.just_pressed(KeyCode::KeyS) {
        match save_snapshot(&current.0) {
            Ok(path) => log::info!("saved orientation snapshot to {}", path.display()),
            Err(e) => log::warn!("could not save orientation snapshot: {}", e),
        }
    }
}
