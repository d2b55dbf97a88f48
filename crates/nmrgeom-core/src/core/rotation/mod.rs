//! # Orientation Algebra
//!
//! Relative rotations between orthonormal frames and their Euler-angle description.
//!
//! - [`compose`] - Rotation between two frames and rotation matrices from Euler angles
//! - [`euler`] - Decomposition of a rotation into ZYZ or ZXZ angles, active or passive,
//!   with gimbal-lock handling and folding into a canonical range
//! - [`orientation`] - Euler angles between two tensors' principal axis systems
//! - [`equivalent`] - The sixteen equivalent angle sets arising from axis sign choices

pub mod compose;
pub mod equivalent;
pub mod euler;
pub mod orientation;
