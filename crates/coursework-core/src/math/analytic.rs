//! Week 34 arithmetic exercises: right triangles, straight lines and
//! Euclidean distance.

use serde::{Deserialize, Serialize};

use crate::error::{CourseworkError, Result};
use crate::geometry::{validate_numerical, validate_numerical_above_zero};

/// Length of the hypotenuse of a right triangle with legs `a` and `b`.
pub fn hypotenuse(a: f64, b: f64) -> Result<f64> {
    let a = validate_numerical_above_zero(a)?;
    let b = validate_numerical_above_zero(b)?;
    Ok(a.hypot(b))
}

/// Length of the remaining leg given one leg and the hypotenuse.
pub fn cathetus(cathetus: f64, hypotenuse: f64) -> Result<f64> {
    let cathetus = validate_numerical_above_zero(cathetus)?;
    let hypotenuse = validate_numerical_above_zero(hypotenuse)?;
    if hypotenuse <= cathetus {
        return Err(CourseworkError::InvalidTriangle {
            cathetus,
            hypotenuse,
        });
    }
    Ok((hypotenuse.powi(2) - cathetus.powi(2)).sqrt())
}

/// The k-value of the line through two points.
pub fn slope(p1: (f64, f64), p2: (f64, f64)) -> Result<f64> {
    let (x1, y1) = (validate_numerical(p1.0)?, validate_numerical(p1.1)?);
    let (x2, y2) = (validate_numerical(p2.0)?, validate_numerical(p2.1)?);
    if x2 == x1 {
        return Err(CourseworkError::UndefinedSlope(x1));
    }
    Ok((y2 - y1) / (x2 - x1))
}

/// The m-value of the line through two points, i.e. where it crosses x = 0.
pub fn intercept(p1: (f64, f64), p2: (f64, f64)) -> Result<f64> {
    let k = slope(p1, p2)?;
    Ok(p1.1 - k * p1.0)
}

/// A non-vertical straight line `y = kx + m`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    pub fn through(p1: (f64, f64), p2: (f64, f64)) -> Result<Self> {
        Ok(Self {
            slope: slope(p1, p2)?,
            intercept: intercept(p1, p2)?,
        })
    }

    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Euclidean distance between two points of equal dimension.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(CourseworkError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(CourseworkError::EmptyVector);
    }
    let mut sum = 0.0;
    for (&p, &q) in a.iter().zip(b.iter()) {
        let d = validate_numerical(q)? - validate_numerical(p)?;
        sum += d * d;
    }
    Ok(sum.sqrt())
}

pub fn distance_2d(a: (f64, f64), b: (f64, f64)) -> Result<f64> {
    euclidean_distance(&[a.0, a.1], &[b.0, b.1])
}

pub fn distance_3d(a: (f64, f64, f64), b: (f64, f64, f64)) -> Result<f64> {
    euclidean_distance(&[a.0, a.1, a.2], &[b.0, b.1, b.2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_through_points() {
        let line = Line::through((4.0, 4.0), (0.0, 1.0)).unwrap();
        assert!((line.slope - 0.75).abs() < 1e-12);
        assert!((line.intercept - 1.0).abs() < 1e-12);
        assert!((line.y_at(8.0) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_vertical_line_has_no_slope() {
        assert_eq!(
            slope((2.0, 0.0), (2.0, 5.0)),
            Err(CourseworkError::UndefinedSlope(2.0))
        );
    }
}
