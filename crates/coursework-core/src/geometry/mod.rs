//! Plane and solid shapes placed in a coordinate system.
//!
//! `Geometry` carries the x/y position shared by every shape. Each shape
//! owns the shape it refines: a `Circle` owns a `Geometry`, a `Sphere`
//! owns a `Circle`, a `Rectangle` owns a `Geometry` and a `Cube` owns a
//! `Rectangle`. Size and position are validated on construction and on
//! every setter.
//!
//! Same-kind shapes compare equal when their sizes match, wherever they are
//! placed. Use [`Figure`] to compare shapes of different kinds.
pub mod circle;
pub mod cube;
pub mod figure;
pub mod rectangle;
pub mod sphere;

use crate::error::{CourseworkError, Result};

pub use circle::Circle;
pub use cube::Cube;
pub use figure::Figure;
pub use rectangle::Rectangle;
pub use sphere::Sphere;

/// Reject NaN and infinities.
pub fn validate_numerical(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CourseworkError::NotNumeric {
            value: value.to_string(),
        })
    }
}

pub fn validate_above_zero(value: f64) -> Result<f64> {
    if value <= 0.0 {
        Err(CourseworkError::NotPositive(value))
    } else {
        Ok(value)
    }
}

/// Numeric check first, then the sign check.
pub fn validate_numerical_above_zero(value: f64) -> Result<f64> {
    validate_above_zero(validate_numerical(value)?)
}

/// Behaviour shared by every shape.
pub trait Shape {
    fn name(&self) -> &'static str;

    /// Area for plane shapes, surface area for solids.
    fn area(&self) -> f64;

    /// Perimeter of the shape, or of its footprint in the xy plane for solids.
    fn circumference(&self) -> f64;

    /// Geometric centre; planar shapes sit at z = 0.
    fn centre(&self) -> [f64; 3];

    /// Boundary-inclusive containment without argument validation.
    fn contains(&self, point: [f64; 3]) -> bool;
}

pub trait Solid: Shape {
    fn volume(&self) -> f64;
}

/// A position in the xy plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    x: f64,
    y: f64,
}

impl Geometry {
    pub fn new(x: f64, y: f64) -> Result<Self> {
        Ok(Self {
            x: validate_numerical(x)?,
            y: validate_numerical(y)?,
        })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) -> Result<()> {
        self.x = validate_numerical(x)?;
        Ok(())
    }

    pub fn set_y(&mut self, y: f64) -> Result<()> {
        self.y = validate_numerical(y)?;
        Ok(())
    }

    /// Move to the absolute position (x, y).
    pub fn translate(&mut self, x: f64, y: f64) -> Result<()> {
        *self = Geometry::new(x, y)?;
        Ok(())
    }

    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_failure_keeps_position() {
        let mut geo = Geometry::new(3.0, -3.0).unwrap();
        assert!(geo.translate(4.0, f64::NAN).is_err());
        assert_eq!((geo.x(), geo.y()), (3.0, -3.0));
    }

    #[test]
    fn test_above_zero_accepts_small_positive() {
        assert_eq!(validate_above_zero(1e-9), Ok(1e-9));
        assert_eq!(validate_above_zero(0.0), Err(CourseworkError::NotPositive(0.0)));
    }
}
