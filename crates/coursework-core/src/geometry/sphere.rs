use std::f64::consts::PI;
use std::fmt;

use crate::error::Result;
use crate::geometry::{validate_numerical, Circle, Shape, Solid};

/// A sphere: a circle in the xy plane lifted to a centre with a z coordinate.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    circle: Circle,
    z: f64,
}

impl Sphere {
    pub fn new(radius: f64, x: f64, y: f64, z: f64) -> Result<Self> {
        let circle = Circle::new(radius, x, y)?;
        Ok(Self {
            circle,
            z: validate_numerical(z)?,
        })
    }

    pub fn with_radius(radius: f64) -> Result<Self> {
        Self::new(radius, 0.0, 0.0, 0.0)
    }

    pub fn radius(&self) -> f64 {
        self.circle.radius()
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.circle.set_radius(radius)
    }

    pub fn x(&self) -> f64 {
        self.circle.x()
    }

    pub fn y(&self) -> f64 {
        self.circle.y()
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn set_z(&mut self, z: f64) -> Result<()> {
        self.z = validate_numerical(z)?;
        Ok(())
    }

    /// The great circle in the plane z = `self.z()`.
    pub fn cross_section(&self) -> &Circle {
        &self.circle
    }

    pub fn translate(&mut self, x: f64, y: f64, z: f64) -> Result<()> {
        let z = validate_numerical(z)?;
        self.circle.translate(x, y)?;
        self.z = z;
        Ok(())
    }

    /// Surface area.
    pub fn area(&self) -> f64 {
        4.0 * PI * self.radius().powi(2)
    }

    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius().powi(3)
    }

    pub fn circumference(&self) -> f64 {
        self.circle.circumference()
    }

    pub fn is_inside(&self, x: f64, y: f64, z: f64) -> Result<bool> {
        let point = [
            validate_numerical(x)?,
            validate_numerical(y)?,
            validate_numerical(z)?,
        ];
        Ok(self.contains(point))
    }
}

impl PartialEq for Sphere {
    fn eq(&self, other: &Self) -> bool {
        self.radius() == other.radius()
    }
}

impl Shape for Sphere {
    fn name(&self) -> &'static str {
        "sphere"
    }

    fn area(&self) -> f64 {
        Sphere::area(self)
    }

    fn circumference(&self) -> f64 {
        Sphere::circumference(self)
    }

    fn centre(&self) -> [f64; 3] {
        [self.x(), self.y(), self.z]
    }

    fn contains(&self, point: [f64; 3]) -> bool {
        let dx = self.x() - point[0];
        let dy = self.y() - point[1];
        let dz = self.z - point[2];
        (dx * dx + dy * dy + dz * dz).sqrt() <= self.radius()
    }
}

impl Solid for Sphere {
    fn volume(&self) -> f64 {
        Sphere::volume(self)
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The radius of the sphere is: {} length units. The center is: ({}, {}, {}).",
            self.radius(),
            self.x(),
            self.y(),
            self.z
        )
    }
}
