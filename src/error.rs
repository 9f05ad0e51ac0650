use thiserror::Error;

/// Top-level error type for the Hermite spline engine.
#[derive(Debug, Error)]
pub enum SplineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to curve queries.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{what} index {index} is out of range (count {count})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        count: usize,
    },

    #[error("parameter {parameter} is not finite")]
    NonFinite { parameter: &'static str },
}

/// Errors related to constructing and editing splines.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("x = {x} does not fall inside any segment")]
    NoSegment { x: f64 },

    #[error("x = {x} is closer than {min_spacing} to an existing point")]
    SpacingViolation { x: f64, min_spacing: f64 },
}

/// Errors related to tessellation.
#[derive(Debug, Error, PartialEq)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`SplineError`].
pub type Result<T> = std::result::Result<T, SplineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_message_names_parameter() {
        let err: SplineError = GeometryError::ParameterOutOfRange {
            parameter: "x",
            value: 1.5,
            min: 0.0,
            max: 1.0,
        }
        .into();
        assert_eq!(err.to_string(), "parameter x = 1.5 is out of range [0, 1]");
    }

    #[test]
    fn operation_errors_are_transparent() {
        let err: SplineError = OperationError::NoSegment { x: 1.0 }.into();
        assert!(matches!(
            err,
            SplineError::Operation(OperationError::NoSegment { .. })
        ));
        assert_eq!(err.to_string(), "x = 1 does not fall inside any segment");
    }
}
