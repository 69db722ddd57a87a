//! Basic geometry primitives produced by the samplers.

mod point;
mod point3;

pub use point::Point;
pub use point3::Point3;

/// Errors raised by geometry operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// The operation has no agreed formula yet.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}
