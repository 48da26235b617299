//! Declared-type contracts consumed by methods, and the builtin types.
//!
//! Types are shared: many methods reference the same declared type through
//! `Rc<dyn Type>` handles, and nothing mutates a type after evaluation.

pub mod builtin;
pub mod reference;
pub mod registry;

pub use builtin::{HandleType, ScalarKind, ScalarType, StringType, VecType};
pub use reference::{NamedReference, TypeRef};
pub use registry::TypeRegistry;

use crate::error::SemanticError;
use std::fmt;

/// Namespace prefix for runtime support types in fully qualified output
pub const HARDWARE_NAMESPACE: &str = "::android::hardware::";

pub(crate) fn namespace(specify_namespaces: bool) -> &'static str {
    if specify_namespaces {
        HARDWARE_NAMESPACE
    } else {
        ""
    }
}

/// A declared type as seen by method processing
pub trait Type: fmt::Debug {
    /// Name used in diagnostics
    fn type_name(&self) -> String;

    /// Resolve lazily bound state. Must be idempotent.
    fn evaluate(&self) -> Result<(), SemanticError> {
        Ok(())
    }

    /// Check legality after evaluation. Must not mutate.
    fn validate(&self) -> Result<(), SemanticError> {
        Ok(())
    }

    /// Whether a single result of this type can be returned directly
    /// instead of through a callback
    fn is_elidable(&self) -> bool {
        false
    }

    /// Native spelling when passed as an argument
    fn native_argument_type(&self, specify_namespaces: bool) -> String {
        self.native_result_type(specify_namespaces)
    }

    /// Native spelling when returned or stored by value
    fn native_result_type(&self, specify_namespaces: bool) -> String;

    fn managed_type(&self) -> String;

    /// Managed spelling inside generic containers
    fn managed_boxed_type(&self) -> String {
        self.managed_type()
    }

    fn managed_default_value(&self) -> &'static str {
        "null"
    }

    fn is_java_compatible(&self) -> bool {
        true
    }
}
