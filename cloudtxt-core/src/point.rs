//! Point types and related functionality

use crate::error::{Error, Result};
use bytemuck::{Pod, Zeroable};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A nalgebra point with single precision coordinates
pub type Point3f = Point3<f32>;

/// A 3D point with single precision coordinates
///
/// Equality compares the three coordinates by value, so two points read from
/// different lines with the same numbers are equal. `NaN` coordinates never
/// compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

unsafe impl Pod for Point3D {}
unsafe impl Zeroable for Point3D {}

impl Point3D {
    /// Create a point from three coordinates
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a point from a slice of coordinates
    ///
    /// Fails with [`Error::InvalidPointArity`] unless the slice holds exactly
    /// three values.
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        match *values {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(Error::InvalidPointArity(values.len())),
        }
    }

    /// Coordinates as `[x, y, z]`
    pub fn coords(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Point3D {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl TryFrom<&[f32]> for Point3D {
    type Error = Error;

    fn try_from(values: &[f32]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl From<Point3f> for Point3D {
    fn from(p: Point3f) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Point3D> for Point3f {
    fn from(p: Point3D) -> Self {
        Point3f::new(p.x, p.y, p.z)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}, z: {}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Point3D::default(), Point3D::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_array() {
        let p = Point3D::from([1.0, -2.5, 3.25]);
        assert_eq!(p, Point3D::new(1.0, -2.5, 3.25));
        assert_eq!(p.coords(), [1.0, -2.5, 3.25]);
    }

    #[test]
    fn test_from_slice_requires_three_values() {
        let p = Point3D::from_slice(&[4.5, 6.25, -7.0]).unwrap();
        assert_eq!(p, Point3D::new(4.5, 6.25, -7.0));

        for values in [&[][..], &[1.0][..], &[1.0, 2.0][..], &[1.0, 2.0, 3.0, 4.0][..]] {
            match Point3D::try_from(values) {
                Err(Error::InvalidPointArity(n)) => assert_eq!(n, values.len()),
                other => panic!("expected arity error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_structural_equality() {
        let a = Point3D::new(1.0, 2.0, 3.0);
        let b = Point3D::new(1.0, 2.0, 3.0);
        assert_eq!(a, b);
        assert_ne!(a, Point3D::new(1.0, 2.0, 3.5));
        assert_ne!(Some(a), None);

        let nan = Point3D::new(f32::NAN, 0.0, 0.0);
        assert_ne!(nan, nan);
    }

    #[test]
    fn test_nalgebra_interop() {
        let p = Point3D::new(0.1, 0.2, 0.3);
        let q: Point3f = p.into();
        assert_relative_eq!(q.x, 0.1);
        assert_relative_eq!(q.y, 0.2);
        assert_relative_eq!(q.z, 0.3);
        assert_eq!(Point3D::from(q), p);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point3D::new(1.0, 2.5, -3.0).to_string(), "x: 1, y: 2.5, z: -3");
    }
}
