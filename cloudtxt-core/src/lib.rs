//! Core data structures for cloudtxt
//!
//! This crate provides the fundamental types shared by the loader and
//! writer: a single-precision 3D point, an ordered read-only point cloud,
//! and the common error type.

pub mod point;
pub mod point_cloud;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use error::*;

/// Re-export the nalgebra point type used for interop
pub use nalgebra::Point3;
