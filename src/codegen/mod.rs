//! Signature and body emission for the native and managed backends

pub mod annotations;
pub mod managed;
pub mod native;

pub use annotations::dump_annotations;
pub use managed::ManagedEmitter;
pub use native::NativeEmitter;

use crate::formatter::Formatter;
use crate::method::{Backend, ImplRole, Method};

/// Output options for native emission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitConfig {
    /// Fully qualify runtime support types
    pub specify_namespaces: bool,
    /// Qualifier written before the method name, for out-of-class definitions
    pub class_name: Option<String>,
}

impl EmitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// In-class declarations: short names, no qualifier
    pub fn header() -> Self {
        Self::default()
    }

    /// Out-of-class definitions for `class_name`
    pub fn source(class_name: impl Into<String>) -> Self {
        Self {
            specify_namespaces: true,
            class_name: Some(class_name.into()),
        }
    }

    pub fn with_namespaces(mut self, specify_namespaces: bool) -> Self {
        self.specify_namespaces = specify_namespaces;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// Backend-specific rendering of one method
pub trait BackendEmitter {
    fn backend(&self) -> Backend;

    /// Explicit arguments, plus whatever the backend appends
    fn emit_arg_signature(&self, method: &Method, out: &mut Formatter);

    fn emit_result_signature(&self, method: &Method, out: &mut Formatter);

    /// Generic body used when no reserved override applies
    fn emit_generic_body(&self, method: &Method, out: &mut Formatter);

    /// Whether a reserved body is registered for `role` on this backend
    fn overrides(&self, method: &Method, role: ImplRole) -> bool;

    /// Emit the reserved body for `role`
    fn emit_override(&self, method: &Method, role: ImplRole, out: &mut Formatter);

    /// Body for `role`: the reserved override when one is registered,
    /// otherwise the generic body
    fn emit_method_body(&self, method: &Method, role: ImplRole, out: &mut Formatter) {
        if method.is_reserved() && self.overrides(method, role) {
            tracing::trace!(method = %method.name(), role = role.name(), "using reserved body");
            self.emit_override(method, role, out);
        } else {
            self.emit_generic_body(method, out);
        }
    }
}
