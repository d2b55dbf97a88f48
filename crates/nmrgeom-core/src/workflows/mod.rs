//! # Workflows Module
//!
//! High-level entry points that resolve site labels and interaction kinds against a
//! [`SpinSystem`](crate::core::models::system::SpinSystem) and drive the core algebra.
//!
//! ## Architecture
//!
//! - **Orientation Workflow** ([`orientation`]) - Relative Euler angles between two
//!   interaction tensors (or a tensor and the crystal frame), optionally with the sixteen
//!   equivalent angle sets
//! - **Coupling Workflows** ([`couplings`]) - Dipolar and J-couplings for a named pair, and
//!   radius surveys around a central site
//! - **Configuration** ([`config`]) - Validated settings built through builders
//!
//! Every workflow reports failures through [`error::WorkflowError`].

pub mod config;
pub mod couplings;
pub mod error;
pub mod orientation;
