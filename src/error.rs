use thiserror::Error;

/// Top-level error type for the fexel math kernel.
#[derive(Debug, Error)]
pub enum FexelError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors related to geometric queries.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("line does not intersect the plane within its bounds")]
    NoIntersection,
}

/// Errors raised while building kernel values from external representations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown rotation order: {0:?}")]
    RotationOrder(String),

    #[error("expected {expected} matrix elements, found {found}")]
    ElementCount { expected: usize, found: usize },
}

/// Convenience type alias for results using [`FexelError`].
pub type Result<T> = std::result::Result<T, FexelError>;
