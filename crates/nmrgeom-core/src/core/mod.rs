//! # Core Module
//!
//! The computational foundation of nmrgeom: data models for nuclear sites and reference
//! frames, rotation and Euler-angle algebra, and the physics of nuclear spin couplings.
//!
//! ## Architecture
//!
//! - **Site and Frame Representation** ([`models`]) - Atom sites, isotopes, spin systems,
//!   orthonormal frames and the principal-axes capability supplied by the host
//! - **Orientation Algebra** ([`rotation`]) - Relative rotations between frames, Euler
//!   angle decomposition and composition, equivalent angle sets
//! - **Coupling Physics** ([`coupling`]) - Dipolar coupling constants and tensors,
//!   isotropic J-couplings and the gyromagnetic ratio table
//!
//! ## Conventions
//!
//! - Positions are in Ångström, gyromagnetic ratios in rad·s⁻¹·T⁻¹, couplings in Hz.
//! - Angles are radians everywhere in the library. Conversion to degrees happens only at
//!   the presentation boundary via [`rotation::euler::EulerAngles::to_degrees`].
//! - Frames store their axes as matrix columns.

pub mod coupling;
pub mod models;
pub mod rotation;
