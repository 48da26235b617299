//! Name table for declared types

use super::builtin::{HandleType, ScalarKind, ScalarType, StringType, VecType};
use super::reference::TypeRef;
use super::Type;
use crate::location::Location;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Type table mapping names to shared declared types.
///
/// Lookups happen during evaluation, so types may be added after the
/// references that name them were created.
pub struct TypeRegistry {
    types: RefCell<HashMap<String, Rc<dyn Type>>>,
}

impl TypeRegistry {
    /// Create a registry holding the builtin types
    pub fn new() -> Self {
        let registry = Self {
            types: RefCell::new(HashMap::new()),
        };
        registry.add_builtins();
        registry
    }

    fn add_builtins(&self) {
        for kind in ScalarKind::ALL {
            self.add(kind.name(), Rc::new(ScalarType::new(kind)));
        }
        self.add("string", Rc::new(StringType));
        self.add("handle", Rc::new(HandleType));
    }

    /// Register a type, replacing any previous binding of `name`
    pub fn add(&self, name: impl Into<String>, ty: Rc<dyn Type>) {
        self.types.borrow_mut().insert(name.into(), ty);
    }

    pub fn lookup(&self, name: &str) -> Option<Rc<dyn Type>> {
        self.types.borrow().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.borrow().contains_key(name)
    }

    /// Build a type from a textual expression such as `int32` or
    /// `vec<vec<string>>`.
    ///
    /// Plain names become forward references resolved on evaluation.
    pub fn parse_type_expr(self: &Rc<Self>, expr: &str, location: &Location) -> Rc<dyn Type> {
        let expr = expr.trim();
        if let Some(inner) = expr
            .strip_prefix("vec<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return Rc::new(VecType::new(self.parse_type_expr(inner, location)));
        }
        Rc::new(TypeRef::new(expr, Rc::clone(self), location.clone()))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types = self.types.borrow();
        let mut names: Vec<&String> = types.keys().collect();
        names.sort();
        f.debug_struct("TypeRegistry").field("types", &names).finish()
    }
}
