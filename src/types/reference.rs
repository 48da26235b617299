//! Named type bindings and forward references

use super::registry::TypeRegistry;
use super::Type;
use crate::error::SemanticError;
use crate::location::Location;
use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

/// A named binding of a declared type to an argument or result slot
#[derive(Debug, Clone)]
pub struct NamedReference {
    name: String,
    ty: Rc<dyn Type>,
    location: Location,
}

impl NamedReference {
    pub fn new(name: impl Into<String>, ty: Rc<dyn Type>, location: Location) -> Self {
        Self {
            name: name.into(),
            ty,
            location,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &dyn Type {
        self.ty.as_ref()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

/// A type named before its declaration was seen.
///
/// Resolution happens once, on the first `evaluate`.
pub struct TypeRef {
    name: String,
    registry: Rc<TypeRegistry>,
    location: Location,
    resolved: OnceCell<Rc<dyn Type>>,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, registry: Rc<TypeRegistry>, location: Location) -> Self {
        Self {
            name: name.into(),
            registry,
            location,
            resolved: OnceCell::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    fn unresolved(&self) -> SemanticError {
        SemanticError::UnresolvedType {
            name: self.name.clone(),
            location: self.location.clone(),
        }
    }
}

impl Type for TypeRef {
    fn type_name(&self) -> String {
        self.name.clone()
    }

    fn evaluate(&self) -> Result<(), SemanticError> {
        if let Some(target) = self.resolved.get() {
            return target.evaluate();
        }
        let target = self.registry.lookup(&self.name).ok_or_else(|| self.unresolved())?;
        tracing::trace!(name = %self.name, "resolved forward type reference");
        self.resolved.get_or_init(|| target).evaluate()
    }

    fn validate(&self) -> Result<(), SemanticError> {
        self.resolved.get().ok_or_else(|| self.unresolved())?.validate()
    }

    fn is_elidable(&self) -> bool {
        self.resolved.get().is_some_and(|t| t.is_elidable())
    }

    fn native_argument_type(&self, specify_namespaces: bool) -> String {
        match self.resolved.get() {
            Some(target) => target.native_argument_type(specify_namespaces),
            None => self.name.clone(),
        }
    }

    fn native_result_type(&self, specify_namespaces: bool) -> String {
        match self.resolved.get() {
            Some(target) => target.native_result_type(specify_namespaces),
            None => self.name.clone(),
        }
    }

    fn managed_type(&self) -> String {
        match self.resolved.get() {
            Some(target) => target.managed_type(),
            None => self.name.clone(),
        }
    }

    fn managed_boxed_type(&self) -> String {
        match self.resolved.get() {
            Some(target) => target.managed_boxed_type(),
            None => self.name.clone(),
        }
    }

    fn managed_default_value(&self) -> &'static str {
        self.resolved
            .get()
            .map_or("null", |target| target.managed_default_value())
    }

    fn is_java_compatible(&self) -> bool {
        self.resolved.get().is_some_and(|t| t.is_java_compatible())
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRef")
            .field("name", &self.name)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}
