//! coursework-core: small value types and exercises from an introductory
//! programming course.
//!
//! The crate bundles the arithmetic exercises (triangles, lines, distances,
//! accuracy), an n-dimensional `Vector` with overloaded operators, the
//! `OldCoinStash` bookkeeping type, and a hierarchy of plane and solid shapes
//! with plotting helpers.
//!
//! Every constructor and setter validates its arguments and returns
//! [`CourseworkError`] on the first bad value.
pub mod coins;
pub mod error;
pub mod geometry;
pub mod math;
pub mod report;
pub mod stats;

pub use error::{CourseworkError, Result};
