//! # nmrgeom Core Library
//!
//! Geometry of NMR interaction tensors: the orientation of one tensor's principal axis
//! system relative to another, and the through-space (dipolar) and through-bond (J)
//! couplings between pairs of nuclear sites.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction.
//!
//! - **[`core`]: The Foundation.** Immutable site and frame models (`AtomSite`,
//!   `SpinSystem`, `OrthonormalFrame`), the rotation and Euler-angle algebra, and the
//!   coupling physics. Every operation here is a pure function of its inputs.
//!
//! - **[`workflows`]: The Public API.** Resolves site labels and tensor kinds against a
//!   `SpinSystem`, applies an `OrientationConfig`, and returns complete reports. This is
//!   the layer a host application (such as the `nmrgeom` CLI) talks to.
//!
//! Tensor eigendecomposition is deliberately not part of this crate. Hosts supply
//! principal frames through the [`core::models::tensor::PrincipalAxes`] trait.

pub mod core;
pub mod workflows;
