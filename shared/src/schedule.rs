use crate::rotation::Rotation;

/// Degrees of yaw added every frame (free-running spin about world Z)
pub const YAW_DEG_PER_FRAME: u64 = 2;

/// Degrees of roll added every frame (free-running spin about body X)
pub const ROLL_DEG_PER_FRAME: u64 = 3;

/// Pitch stays pinned at the gimbal-lock singularity
pub const LOCKED_PITCH_DEG: f32 = -90.0;

/// Derives the yaw/pitch/roll angles for a frame index.
///
/// Angles advance in whole degrees and wrap with integer arithmetic, so the
/// schedule is exact: yaw repeats every 180 frames, roll every 120.
pub fn rotation_at(frame: u64) -> Rotation {
    let yaw = ((frame * YAW_DEG_PER_FRAME) % 360) as f32;
    let pitch = LOCKED_PITCH_DEG;
    // let pitch = -90.0 + ((frame % 180) as f32);
    let roll = ((frame * ROLL_DEG_PER_FRAME) % 360) as f32;

    Rotation::new(yaw, pitch, roll)
}
