use thiserror::Error;

/// Top-level error type for runway zone construction.
#[derive(Debug, Error)]
pub enum ZoneError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-simple result: {0}")]
    NonSimpleResult(String),

    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

/// Errors raised by zone operations on their arguments.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid side {0:?}, expected 'left' or 'right'")]
    InvalidSide(String),

    #[error("invalid end {0:?}")]
    InvalidEnd(String),

    #[error("lines share no endpoint and cannot be welded")]
    Disjoint,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to zone parameter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("zone parameter {name} = {value} is out of range")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Convenience type alias for results using [`ZoneError`].
pub type Result<T> = std::result::Result<T, ZoneError>;
