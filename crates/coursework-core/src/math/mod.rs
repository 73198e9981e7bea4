//! Vector arithmetic and the analytic-geometry exercises.
//!
//! `Vector` is the operator-overloading example; `analytic` holds the
//! small free functions for triangles, lines and distances.
pub mod analytic;
pub mod vector;

pub use analytic::{
    cathetus, distance_2d, distance_3d, euclidean_distance, hypotenuse, intercept, slope, Line,
};
pub use vector::Vector;
