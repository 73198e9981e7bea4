pub mod coins;
pub mod exercises;
pub mod geometry;
pub mod vector;

pub use coins::run_coins;
pub use exercises::run_exercises;
pub use geometry::{run_geometry, GeometryOutputs};
pub use vector::run_vector;
