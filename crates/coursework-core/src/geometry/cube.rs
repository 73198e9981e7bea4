use std::fmt;

use crate::error::Result;
use crate::geometry::{validate_numerical, validate_numerical_above_zero, Rectangle, Shape, Solid};

/// An axis-aligned cube: a square face in the xy plane extruded along z,
/// centred on (x, y, z).
#[derive(Debug, Clone, Copy)]
pub struct Cube {
    face: Rectangle,
    z: f64,
}

impl Cube {
    pub fn new(side: f64, x: f64, y: f64, z: f64) -> Result<Self> {
        Ok(Self {
            face: Rectangle::new(side, side, x, y)?,
            z: validate_numerical(z)?,
        })
    }

    pub fn with_side(side: f64) -> Result<Self> {
        Self::new(side, 0.0, 0.0, 0.0)
    }

    pub fn side(&self) -> f64 {
        self.face.length()
    }

    /// Resize every edge; length and width of the face follow.
    pub fn set_side(&mut self, side: f64) -> Result<()> {
        let side = validate_numerical_above_zero(side)?;
        self.face.set_length(side)?;
        self.face.set_width(side)
    }

    pub fn x(&self) -> f64 {
        self.face.x()
    }

    pub fn y(&self) -> f64 {
        self.face.y()
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn set_z(&mut self, z: f64) -> Result<()> {
        self.z = validate_numerical(z)?;
        Ok(())
    }

    /// The square cross-section through the centre, parallel to the xy plane.
    pub fn face(&self) -> &Rectangle {
        &self.face
    }

    pub fn translate(&mut self, x: f64, y: f64, z: f64) -> Result<()> {
        let z = validate_numerical(z)?;
        self.face.translate(x, y)?;
        self.z = z;
        Ok(())
    }

    /// Surface area.
    pub fn area(&self) -> f64 {
        6.0 * self.side().powi(2)
    }

    pub fn volume(&self) -> f64 {
        self.side().powi(3)
    }

    pub fn circumference(&self) -> f64 {
        self.face.circumference()
    }

    /// True when (x, y, z) lies inside the cube or on a face.
    pub fn is_inside(&self, x: f64, y: f64, z: f64) -> Result<bool> {
        let point = [
            validate_numerical(x)?,
            validate_numerical(y)?,
            validate_numerical(z)?,
        ];
        Ok(self.contains(point))
    }
}

impl PartialEq for Cube {
    fn eq(&self, other: &Self) -> bool {
        self.side() == other.side()
    }
}

impl Shape for Cube {
    fn name(&self) -> &'static str {
        "cube"
    }

    fn area(&self) -> f64 {
        Cube::area(self)
    }

    fn circumference(&self) -> f64 {
        Cube::circumference(self)
    }

    fn centre(&self) -> [f64; 3] {
        [self.x(), self.y(), self.z]
    }

    fn contains(&self, point: [f64; 3]) -> bool {
        self.face.covers(point[0], point[1]) && (point[2] - self.z).abs() <= self.side() / 2.0
    }
}

impl Solid for Cube {
    fn volume(&self) -> f64 {
        Cube::volume(self)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The cube has a side of {} length units. The geometric center is: ({}, {}, {}).",
            self.side(),
            self.x(),
            self.y(),
            self.z
        )
    }
}
