//! Method model and signature emission for a HIDL-style interface compiler
//!
//! Code generation tool - suppress style lints
#![allow(clippy::new_without_default)]
#![allow(clippy::single_char_add_str)]

pub mod annotation;
pub mod cli;
pub mod codegen;
pub mod driver;
pub mod error;
pub mod formatter;
pub mod location;
pub mod method;
pub mod reserved;
pub mod semantic;
pub mod types;

// Re-export main types
pub use annotation::{Annotation, AnnotationParam, NamedAnnotation};
pub use codegen::{BackendEmitter, EmitConfig, ManagedEmitter, NativeEmitter};
pub use error::*;
pub use formatter::Formatter;
pub use location::{Location, Position};
pub use method::{ImplRole, ImplTable, Method, RoleBody, TypedVarVector};
pub use reserved::ReservedCatalogue;
pub use types::{NamedReference, Type, TypeRegistry};
