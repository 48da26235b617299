//! Unified error types for hidl-method using thiserror

use crate::location::Location;
use thiserror::Error;

/// Top-level error type for method processing
#[derive(Error, Debug)]
pub enum HidlError {
    #[error("semantic error: {0}")]
    Semantic(#[from] SemanticError),

    #[error("reserved method misuse: {0}")]
    Reservation(#[from] ReservationError),

    #[error("invalid usage: {0}")]
    Usage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Semantic analysis errors, reported against user declarations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("undefined type '{name}' at {location}")]
    UnresolvedType { name: String, location: Location },

    #[error("duplicate name '{name}' at {location}")]
    DuplicateName { name: String, location: Location },

    #[error("invalid annotation '@{name}': {reason}")]
    InvalidAnnotation { name: String, reason: String },

    #[error("duplicate parameter '{param}' in annotation '@{name}'")]
    DuplicateAnnotationParam { name: String, param: String },

    #[error("method name must not be empty")]
    EmptyMethodName,

    #[error("oneway methods cannot have results")]
    OnewayWithResults,

    #[error("in method '{method}' declared at {location}: {source}")]
    InMethod {
        method: String,
        location: Location,
        #[source]
        source: Box<SemanticError>,
    },
}

impl SemanticError {
    /// Innermost error, with any method context stripped
    pub fn root_cause(&self) -> &SemanticError {
        match self {
            SemanticError::InMethod { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Misuse of the reserved-method API.
///
/// These are compiler bugs, never user errors; callers abort on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("serial id of '{method}' is already {serial:#x}")]
    SerialAlreadySet { method: String, serial: u32 },

    #[error("'{method}' is reserved; its serial id comes from the reservation")]
    SerialOnReserved { method: String },

    #[error("'{method}' is already reserved")]
    AlreadyReserved { method: String },

    #[error("managed implementations cannot use the stub-impl role; use the interface role")]
    StubImplOnManaged,

    #[error("native stub role would shadow the stub-impl role")]
    StubShadowsStubImpl,
}
