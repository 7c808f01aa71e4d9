use bevy::math::{EulerRot, Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
/// Represents a body orientation as Tait-Bryan angles in degrees
///
/// Yaw turns about the world Z axis, pitch about Y, roll about X, applied in
/// that order (intrinsic Z-Y-X).
///
/// # Examples
/// ```rust
/// use shared::Rotation;
/// let rot = Rotation { yaw: 45.0, pitch: -90.0, roll: 10.0 };
/// ```
pub struct Rotation {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Rotation {
    /// Creates a new `Rotation` instance with the given yaw, pitch, and roll.
    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Builds the orientation matrix `Rz(yaw) * Ry(pitch) * Rx(roll)`.
    ///
    /// The order is fixed: swapping it changes which axis collapses at the
    /// pitch singularity.
    pub fn matrix(&self) -> Mat3 {
        yaw_matrix(self.yaw.to_radians())
            * pitch_matrix(self.pitch.to_radians())
            * roll_matrix(self.roll.to_radians())
    }
}

impl Default for Rotation {
    /// Returns a default `Rotation` with all values set to 0.0.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl From<Quat> for Rotation {
    fn from(quat: Quat) -> Self {
        let (yaw, pitch, roll) = quat.to_euler(EulerRot::ZYX);
        Self {
            yaw: yaw.to_degrees(),
            pitch: pitch.to_degrees(),
            roll: roll.to_degrees(),
        }
    }
}

impl Into<Quat> for Rotation {
    fn into(self) -> Quat {
        Quat::from_euler(
            EulerRot::ZYX,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }
}

/// Rotation about the world Z axis (yaw), angle in radians.
///
/// Row-major form `[[c,-s,0],[s,c,0],[0,0,1]]`; `Mat3` stores columns, so the
/// columns below spell out that matrix.
pub fn yaw_matrix(angle: f32) -> Mat3 {
    let (s, c) = angle.sin_cos();
    Mat3::from_cols(
        Vec3::new(c, s, 0.0),
        Vec3::new(-s, c, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    )
}

/// Rotation about the world Y axis (pitch), angle in radians.
///
/// Row-major form `[[c,0,s],[0,1,0],[-s,0,c]]`.
pub fn pitch_matrix(angle: f32) -> Mat3 {
    let (s, c) = angle.sin_cos();
    Mat3::from_cols(
        Vec3::new(c, 0.0, -s),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(s, 0.0, c),
    )
}

/// Rotation about the world X axis (roll), angle in radians.
///
/// Row-major form `[[1,0,0],[0,c,-s],[0,s,c]]`.
pub fn roll_matrix(angle: f32) -> Mat3 {
    let (s, c) = angle.sin_cos();
    Mat3::from_cols(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, c, s),
        Vec3::new(0.0, -s, c),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-5;

    fn assert_vec_close(actual: Vec3, expected: Vec3, what: &str) {
        assert!(
            actual.abs_diff_eq(expected, TOL),
            "{} should be {:?}, got {:?}",
            what,
            expected,
            actual
        );
    }

    #[test]
    fn test_quarter_turns() {
        assert_vec_close(
            yaw_matrix(90f32.to_radians()) * Vec3::X,
            Vec3::Y,
            "yaw by 90 deg applied to X",
        );
        assert_vec_close(
            pitch_matrix((-90f32).to_radians()) * Vec3::X,
            Vec3::Z,
            "pitch by -90 deg applied to X",
        );
        assert_vec_close(
            roll_matrix(90f32.to_radians()) * Vec3::Y,
            Vec3::Z,
            "roll by 90 deg applied to Y",
        );
    }

    #[test]
    fn test_zero_angles_are_identity() {
        assert!(yaw_matrix(0.0).abs_diff_eq(Mat3::IDENTITY, TOL));
        assert!(pitch_matrix(0.0).abs_diff_eq(Mat3::IDENTITY, TOL));
        assert!(roll_matrix(0.0).abs_diff_eq(Mat3::IDENTITY, TOL));
        assert!(Rotation::default().matrix().abs_diff_eq(Mat3::IDENTITY, TOL));
    }

    #[test]
    fn test_matrix_is_orthonormal() {
        let samples = [
            Rotation::new(0.0, 0.0, 0.0),
            Rotation::new(38.0, -90.0, 171.0),
            Rotation::new(120.0, 45.0, 300.0),
            Rotation::new(358.0, -90.0, 357.0),
        ];

        for rot in samples {
            let m = rot.matrix();
            let gram = m.transpose() * m;
            assert!(
                gram.abs_diff_eq(Mat3::IDENTITY, TOL),
                "R^T * R should be identity for {:?}, got {:?}",
                rot,
                gram
            );
            assert!(
                (m.determinant() - 1.0).abs() < TOL,
                "det(R) should be 1 for {:?}, got {}",
                rot,
                m.determinant()
            );
        }
    }

    #[test]
    fn test_composition_matches_intrinsic_zyx() {
        let rot = Rotation::new(25.0, -90.0, 140.0);
        let composed = rot.matrix();
        let reference = Mat3::from_euler(
            EulerRot::ZYX,
            rot.yaw.to_radians(),
            rot.pitch.to_radians(),
            rot.roll.to_radians(),
        );
        assert!(
            composed.abs_diff_eq(reference, TOL),
            "hand-composed matrix should match the intrinsic ZYX composition, got {:?} vs {:?}",
            composed,
            reference
        );
    }

    #[test]
    fn test_quat_round_trip() {
        // Angles away from the pitch singularity so euler extraction is unique
        let rot = Rotation::new(40.0, 30.0, -20.0);
        let quat: Quat = rot.into();
        let back = Rotation::from(quat);

        assert!((back.yaw - rot.yaw).abs() < 1e-3, "yaw drifted: {:?}", back);
        assert!(
            (back.pitch - rot.pitch).abs() < 1e-3,
            "pitch drifted: {:?}",
            back
        );
        assert!(
            (back.roll - rot.roll).abs() < 1e-3,
            "roll drifted: {:?}",
            back
        );
    }
}
