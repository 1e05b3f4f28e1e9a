//! Geometry primitives
//!
//! Pure value types only: no rendering or platform dependencies.

pub mod transform;
pub mod vector;

pub use transform::Transform;
pub use vector::Vector2d;
