mod orientation;
mod rotation;
mod schedule;

pub use orientation::{BodyAxes, OrientationFrame};
pub use rotation::{pitch_matrix, roll_matrix, yaw_matrix, Rotation};
pub use schedule::{rotation_at, LOCKED_PITCH_DEG, ROLL_DEG_PER_FRAME, YAW_DEG_PER_FRAME};
