use std::fmt;

use crate::error::Result;
use crate::geometry::{validate_numerical, validate_numerical_above_zero, Geometry, Shape};

/// An axis-aligned rectangle centred on (x, y), with `length` along the x
/// axis and `width` along the y axis.
#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    geometry: Geometry,
    length: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64, x: f64, y: f64) -> Result<Self> {
        let length = validate_numerical_above_zero(length)?;
        let width = validate_numerical_above_zero(width)?;
        Ok(Self {
            geometry: Geometry::new(x, y)?,
            length,
            width,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_length(&mut self, length: f64) -> Result<()> {
        self.length = validate_numerical_above_zero(length)?;
        Ok(())
    }

    pub fn set_width(&mut self, width: f64) -> Result<()> {
        self.width = validate_numerical_above_zero(width)?;
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
        self.length * self.width
    }

    pub fn circumference(&self) -> f64 {
        2.0 * self.length + 2.0 * self.width
    }

    /// Corners in counter-clockwise order starting bottom left.
    pub fn corners(&self) -> [(f64, f64); 4] {
        let (hl, hw) = (self.length / 2.0, self.width / 2.0);
        let (x, y) = (self.x(), self.y());
        [
            (x - hl, y - hw),
            (x + hl, y - hw),
            (x + hl, y + hw),
            (x - hl, y + hw),
        ]
    }

    /// True when (x, y) lies inside the rectangle or on an edge.
    pub fn is_inside(&self, x: f64, y: f64) -> Result<bool> {
        let x = validate_numerical(x)?;
        let y = validate_numerical(y)?;
        Ok(self.covers(x, y))
    }

    pub(crate) fn covers(&self, x: f64, y: f64) -> bool {
        (x - self.x()).abs() <= self.length / 2.0 && (y - self.y()).abs() <= self.width / 2.0
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.width == other.width
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn area(&self) -> f64 {
        Rectangle::area(self)
    }

    fn circumference(&self) -> f64 {
        Rectangle::circumference(self)
    }

    fn centre(&self) -> [f64; 3] {
        [self.x(), self.y(), 0.0]
    }

    fn contains(&self, point: [f64; 3]) -> bool {
        self.covers(point[0], point[1])
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The rectangle has a length of {} and a width of {} length units. The geometric center is: ({}, {}).",
            self.length,
            self.width,
            self.x(),
            self.y()
        )
    }
}
