use std::f64::consts::PI;
use std::fmt;

use crate::error::Result;
use crate::geometry::{validate_numerical, validate_numerical_above_zero, Geometry, Shape};

/// A circle centred on a point in the plane.
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    geometry: Geometry,
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64, x: f64, y: f64) -> Result<Self> {
        let radius = validate_numerical_above_zero(radius)?;
        Ok(Self {
            geometry: Geometry::new(x, y)?,
            radius,
        })
    }

    /// A circle centred on the origin.
    pub fn with_radius(radius: f64) -> Result<Self> {
        Self::new(radius, 0.0, 0.0)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.radius = validate_numerical_above_zero(radius)?;
        Ok(())
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut Geometry {
        &mut self.geometry
    }

    pub fn x(&self) -> f64 {
        self.geometry.x()
    }

    pub fn y(&self) -> f64 {
        self.geometry.y()
    }

    pub fn translate(&mut self, x: f64, y: f64) -> Result<()> {
        self.geometry.translate(x, y)
    }

    pub fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// True when (x, y) lies inside the circle or on its border.
    pub fn is_inside(&self, x: f64, y: f64) -> Result<bool> {
        let x = validate_numerical(x)?;
        let y = validate_numerical(y)?;
        Ok(self.geometry.distance_to(x, y) <= self.radius)
    }
}

/// Circles are equal when their radii are, regardless of position.
impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.radius == other.radius
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        Circle::area(self)
    }

    fn circumference(&self) -> f64 {
        Circle::circumference(self)
    }

    fn centre(&self) -> [f64; 3] {
        [self.x(), self.y(), 0.0]
    }

    fn contains(&self, point: [f64; 3]) -> bool {
        self.geometry.distance_to(point[0], point[1]) <= self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The radius of the circle is: {} length units. The center is: ({}, {}).",
            self.radius,
            self.x(),
            self.y()
        )
    }
}
