use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};
use std::slice::Iter;

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{CourseworkError, Result};
use crate::geometry::validate_numerical;

/// A Euclidean vector with magnitude and direction.
///
/// Components are stored as `f64` regardless of the numeric type they were
/// built from. A vector always has at least one component.
///
/// Construction rejects non-finite components, but the operators do not:
/// `v * f64::NAN` or an overflowing sum yields NaN or infinite components.
/// Use the `checked_*` methods to get an error instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    numbers: Vec<f64>,
}

impl Vector {
    /// Build a vector from any numeric components.
    ///
    /// Fails with [`CourseworkError::NotNumeric`] on the first component that
    /// has no finite `f64` representation, and with
    /// [`CourseworkError::EmptyVector`] when no components are given.
    pub fn new<I, T>(numbers: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: ToPrimitive + fmt::Debug,
    {
        let mut data = Vec::new();
        for number in numbers {
            let value = number.to_f64().ok_or_else(|| CourseworkError::NotNumeric {
                value: format!("{:?}", number),
            })?;
            data.push(validate_numerical(value)?);
        }
        Self::from_vec(data)
    }

    pub fn from_vec(numbers: Vec<f64>) -> Result<Self> {
        if numbers.is_empty() {
            return Err(CourseworkError::EmptyVector);
        }
        for &number in &numbers {
            validate_numerical(number)?;
        }
        Ok(Self { numbers })
    }

    pub fn numbers(&self) -> &[f64] {
        &self.numbers
    }

    /// Number of components, not the Euclidean length.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Always false; kept for parity with `len`.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.numbers.iter()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.numbers.get(index).copied()
    }

    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector pointing in the same direction.
    pub fn unit(&self) -> Result<Vector> {
        let magnitude = validate_numerical(self.magnitude())?;
        if magnitude == 0.0 {
            return Err(CourseworkError::ZeroVector);
        }
        self.mapv(|v| v / magnitude).into_finite()
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        assert_eq!(
            self.len(),
            other.len(),
            "Dot product requires equal length vectors"
        );
        self.iter().zip(other.iter()).map(|(a, b)| a * b).sum()
    }

    pub fn mapv<F>(&self, f: F) -> Vector
    where
        F: FnMut(&f64) -> f64,
    {
        Vector {
            numbers: self.numbers.iter().map(f).collect(),
        }
    }

    /// Check that `other` has the same dimension.
    pub fn validate_vectors(&self, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(CourseworkError::DimensionMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    /// Like `+`, but fails on a dimension mismatch or a non-finite result.
    pub fn checked_add(&self, other: &Vector) -> Result<Vector> {
        self.validate_vectors(other)?;
        self.zip_with(other, |a, b| a + b).into_finite()
    }

    /// Like `-`, but fails on a dimension mismatch or a non-finite result.
    pub fn checked_sub(&self, other: &Vector) -> Result<Vector> {
        self.validate_vectors(other)?;
        self.zip_with(other, |a, b| a - b).into_finite()
    }

    /// Like `* scalar`, but fails when any component leaves the finite range.
    pub fn checked_mul(&self, scalar: f64) -> Result<Vector> {
        self.mapv(|v| v * scalar).into_finite()
    }

    /// Equality that refuses to compare vectors of different dimension.
    pub fn checked_eq(&self, other: &Vector) -> Result<bool> {
        self.validate_vectors(other)?;
        Ok(self == other)
    }

    /// `Vector(1.0, 2.0)`
    pub fn repr(&self) -> String {
        format!("Vector{}", self)
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.numbers.clone()
    }

    fn into_finite(self) -> Result<Vector> {
        for &number in &self.numbers {
            validate_numerical(number)?;
        }
        Ok(self)
    }

    fn zip_with<F>(&self, other: &Vector, mut f: F) -> Vector
    where
        F: FnMut(f64, f64) -> f64,
    {
        Vector {
            numbers: self
                .iter()
                .zip(other.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
        }
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = CourseworkError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        Vector::from_vec(value)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.numbers
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.numbers[index]
    }
}

impl<'a, 'b> Add<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn add(self, rhs: &'b Vector) -> Self::Output {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Both must be Vector and same length"
        );
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Self::Output {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn sub(self, rhs: &'b Vector) -> Self::Output {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Both must be Vector and same length"
        );
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Self::Output {
        &self - &rhs
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Self::Output {
        self.mapv(|v| v * scalar)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Self::Output {
        &self * scalar
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: &Vector) -> Self::Output {
        vector * self
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Self::Output {
        &vector * self
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.mapv(|v| -v)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, value) in self.numbers.iter().enumerate() {
            write!(f, "{:?}", value)?;
            if idx + 1 != self.numbers.len() {
                write!(f, ", ")?;
            }
        }
        // A single component keeps the trailing comma of a one-element tuple.
        if self.numbers.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
