use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CourseworkError, Result};
use crate::geometry::{Circle, Cube, Rectangle, Shape, Sphere};

/// Any of the supported shapes.
///
/// Two figures are equal only when they are the same kind of shape with the
/// same size; a circle never equals a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FigureSpec", into = "FigureSpec")]
pub enum Figure {
    Circle(Circle),
    Rectangle(Rectangle),
    Sphere(Sphere),
    Cube(Cube),
}

/// Unvalidated wire form of a [`Figure`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FigureSpec {
    Circle {
        radius: f64,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Rectangle {
        length: f64,
        width: f64,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Sphere {
        radius: f64,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        z: f64,
    },
    Cube {
        side: f64,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        z: f64,
    },
}

impl TryFrom<FigureSpec> for Figure {
    type Error = CourseworkError;

    fn try_from(spec: FigureSpec) -> Result<Self> {
        Ok(match spec {
            FigureSpec::Circle { radius, x, y } => Figure::Circle(Circle::new(radius, x, y)?),
            FigureSpec::Rectangle {
                length,
                width,
                x,
                y,
            } => Figure::Rectangle(Rectangle::new(length, width, x, y)?),
            FigureSpec::Sphere { radius, x, y, z } => {
                Figure::Sphere(Sphere::new(radius, x, y, z)?)
            }
            FigureSpec::Cube { side, x, y, z } => Figure::Cube(Cube::new(side, x, y, z)?),
        })
    }
}

impl From<Figure> for FigureSpec {
    fn from(figure: Figure) -> Self {
        match figure {
            Figure::Circle(c) => FigureSpec::Circle {
                radius: c.radius(),
                x: c.x(),
                y: c.y(),
            },
            Figure::Rectangle(r) => FigureSpec::Rectangle {
                length: r.length(),
                width: r.width(),
                x: r.x(),
                y: r.y(),
            },
            Figure::Sphere(s) => FigureSpec::Sphere {
                radius: s.radius(),
                x: s.x(),
                y: s.y(),
                z: s.z(),
            },
            Figure::Cube(c) => FigureSpec::Cube {
                side: c.side(),
                x: c.x(),
                y: c.y(),
                z: c.z(),
            },
        }
    }
}

impl Figure {
    fn as_shape(&self) -> &dyn Shape {
        match self {
            Figure::Circle(c) => c,
            Figure::Rectangle(r) => r,
            Figure::Sphere(s) => s,
            Figure::Cube(c) => c,
        }
    }

    /// Volume for solids, `None` for plane shapes.
    pub fn volume(&self) -> Option<f64> {
        match self {
            Figure::Sphere(s) => Some(s.volume()),
            Figure::Cube(c) => Some(c.volume()),
            Figure::Circle(_) | Figure::Rectangle(_) => None,
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Figure::Sphere(_) | Figure::Cube(_))
    }
}

impl Shape for Figure {
    fn name(&self) -> &'static str {
        self.as_shape().name()
    }

    fn area(&self) -> f64 {
        self.as_shape().area()
    }

    fn circumference(&self) -> f64 {
        self.as_shape().circumference()
    }

    fn centre(&self) -> [f64; 3] {
        self.as_shape().centre()
    }

    fn contains(&self, point: [f64; 3]) -> bool {
        self.as_shape().contains(point)
    }
}

impl From<Circle> for Figure {
    fn from(value: Circle) -> Self {
        Figure::Circle(value)
    }
}

impl From<Rectangle> for Figure {
    fn from(value: Rectangle) -> Self {
        Figure::Rectangle(value)
    }
}

impl From<Sphere> for Figure {
    fn from(value: Sphere) -> Self {
        Figure::Sphere(value)
    }
}

impl From<Cube> for Figure {
    fn from(value: Cube) -> Self {
        Figure::Cube(value)
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Circle(c) => fmt::Display::fmt(c, f),
            Figure::Rectangle(r) => fmt::Display::fmt(r, f),
            Figure::Sphere(s) => fmt::Display::fmt(s, f),
            Figure::Cube(c) => fmt::Display::fmt(c, f),
        }
    }
}
