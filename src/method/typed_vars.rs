//! Argument and result lists with unique names

use crate::error::SemanticError;
use crate::types::NamedReference;
use std::collections::HashSet;
use std::ops::Deref;

/// Ordered list of named references where no two share a name
#[derive(Debug, Clone, Default)]
pub struct TypedVarVector {
    vars: Vec<NamedReference>,
    names: HashSet<String>,
}

impl TypedVarVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `var` unless its name is taken. Returns whether it was added.
    pub fn add(&mut self, var: NamedReference) -> bool {
        if !self.names.insert(var.name().to_string()) {
            return false;
        }
        self.vars.push(var);
        true
    }

    /// Collect references, reporting the first duplicate at its location
    pub fn try_from_iter<I>(vars: I) -> Result<Self, SemanticError>
    where
        I: IntoIterator<Item = NamedReference>,
    {
        let mut collected = Self::new();
        for var in vars {
            let name = var.name().to_string();
            let location = var.location().clone();
            if !collected.add(var) {
                return Err(SemanticError::DuplicateName { name, location });
            }
        }
        Ok(collected)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl Deref for TypedVarVector {
    type Target = [NamedReference];

    fn deref(&self) -> &Self::Target {
        &self.vars
    }
}

impl<'a> IntoIterator for &'a TypedVarVector {
    type Item = &'a NamedReference;
    type IntoIter = std::slice::Iter<'a, NamedReference>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}
