use thiserror::Error;

/// Failures surfaced by mutating store operations. Every `Err` leaves the
/// store unmodified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {0} not found")]
    VertexNotFound(u32),
    #[error("line {0} not found")]
    LineNotFound(u32),
    #[error("a line needs at least one vertex id")]
    EmptyLine,
    #[error("position must be finite")]
    NonFinitePosition,
}
