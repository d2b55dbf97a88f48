use super::compose::rotation_between;
use super::euler::{EulerAngles, EulerConvention, RotationSense, euler_from_rotation};
use crate::core::models::frame::OrthonormalFrame;
use crate::core::models::tensor::{EigenOrder, PrincipalAxes};
use thiserror::Error;

/// Which of the two tensors in an orientation calculation is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorSide {
    A,
    B,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum OrientationError {
    #[error("Tensor {side:?} has no principal frame for the '{order}' ordering")]
    MissingFrame { side: TensorSide, order: EigenOrder },
}

/// Resolves the principal frames of both tensors under their requested orderings.
pub fn principal_frames<A, B>(
    tensor_a: &A,
    tensor_b: &B,
    order_a: EigenOrder,
    order_b: EigenOrder,
) -> Result<(OrthonormalFrame, OrthonormalFrame), OrientationError>
where
    A: PrincipalAxes + ?Sized,
    B: PrincipalAxes + ?Sized,
{
    let frame_a = tensor_a
        .principal_frame(order_a)
        .ok_or(OrientationError::MissingFrame {
            side: TensorSide::A,
            order: order_a,
        })?;
    let frame_b = tensor_b
        .principal_frame(order_b)
        .ok_or(OrientationError::MissingFrame {
            side: TensorSide::B,
            order: order_b,
        })?;
    Ok((frame_a, frame_b))
}

/// Euler angles of tensor B's principal axis system relative to tensor A's, as an active
/// rotation.
///
/// # Arguments
///
/// * `tensor_a`, `tensor_b` - Host tensors providing principal frames.
/// * `convention` - Euler axis sequence.
/// * `order_a`, `order_b` - Eigenvector ordering used for each tensor.
///
/// # Errors
///
/// Returns [`OrientationError::MissingFrame`] if a tensor cannot provide a frame for the
/// requested ordering.
pub fn euler_between_tensors<A, B>(
    tensor_a: &A,
    tensor_b: &B,
    convention: EulerConvention,
    order_a: EigenOrder,
    order_b: EigenOrder,
) -> Result<EulerAngles, OrientationError>
where
    A: PrincipalAxes + ?Sized,
    B: PrincipalAxes + ?Sized,
{
    euler_between_tensors_with_sense(
        tensor_a,
        tensor_b,
        convention,
        RotationSense::Active,
        order_a,
        order_b,
    )
}

/// As [`euler_between_tensors`], with an explicit rotation sense.
pub fn euler_between_tensors_with_sense<A, B>(
    tensor_a: &A,
    tensor_b: &B,
    convention: EulerConvention,
    sense: RotationSense,
    order_a: EigenOrder,
    order_b: EigenOrder,
) -> Result<EulerAngles, OrientationError>
where
    A: PrincipalAxes + ?Sized,
    B: PrincipalAxes + ?Sized,
{
    let (frame_a, frame_b) = principal_frames(tensor_a, tensor_b, order_a, order_b)?;
    Ok(euler_from_rotation(
        &rotation_between(&frame_a, &frame_b),
        convention,
        sense,
    ))
}
