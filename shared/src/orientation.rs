use bevy::math::{Mat3, Vec3};

use crate::rotation::Rotation;
use crate::schedule;

#[derive(Debug, Clone, Copy, PartialEq)]
/// The body's X/Y/Z axis directions in world space
///
/// These are the images of the world unit vectors under the orientation
/// matrix, drawn as the red/green/blue arrows.
pub struct BodyAxes {
    pub x: Vec3,
    pub y: Vec3,
    pub z: Vec3,
}

impl BodyAxes {
    /// Applies the orientation matrix to the world basis, i.e. reads off the
    /// matrix columns.
    pub fn from_matrix(matrix: &Mat3) -> Self {
        Self {
            x: *matrix * Vec3::X,
            y: *matrix * Vec3::Y,
            z: *matrix * Vec3::Z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Everything the renderer needs for one animation tick
///
/// Recomputed from scratch every frame; nothing is carried over or mutated in
/// place.
pub struct OrientationFrame {
    pub index: u64,
    pub rotation: Rotation,
    pub axes: BodyAxes,
}

impl OrientationFrame {
    /// Computes the frame record for a frame index.
    pub fn at(index: u64) -> Self {
        let rotation = schedule::rotation_at(index);
        let axes = BodyAxes::from_matrix(&rotation.matrix());
        Self {
            index,
            rotation,
            axes,
        }
    }
}
