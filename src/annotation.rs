//! Method annotations

use crate::error::SemanticError;
use crate::formatter::Formatter;
use std::collections::HashSet;
use std::fmt;

/// Metadata attached to a method declaration
pub trait Annotation: fmt::Debug {
    fn name(&self) -> &str;

    fn evaluate(&self) -> Result<(), SemanticError> {
        Ok(())
    }

    fn validate(&self) -> Result<(), SemanticError> {
        Ok(())
    }

    /// Write the annotation in source syntax
    fn dump(&self, out: &mut Formatter);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationParam {
    pub name: String,
    pub values: Vec<String>,
}

impl AnnotationParam {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, vec![value.into()])
    }
}

/// `@name` or `@name(key="value", key={"a", "b"})`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedAnnotation {
    name: String,
    params: Vec<AnnotationParam>,
}

impl NamedAnnotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: AnnotationParam) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(&self) -> &[AnnotationParam] {
        &self.params
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Annotation for NamedAnnotation {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), SemanticError> {
        if !is_identifier(&self.name) {
            return Err(SemanticError::InvalidAnnotation {
                name: self.name.clone(),
                reason: "name is not an identifier".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for param in &self.params {
            if !seen.insert(param.name.as_str()) {
                return Err(SemanticError::DuplicateAnnotationParam {
                    name: self.name.clone(),
                    param: param.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn dump(&self, out: &mut Formatter) {
        out.push("@").push(&self.name);
        if self.params.is_empty() {
            return;
        }

        out.push("(");
        out.join(&self.params, ", ", |out, param| {
            out.push(&param.name).push("=");
            if let [value] = param.values.as_slice() {
                out.push("\"").push(value).push("\"");
            } else {
                out.push("{");
                out.join(&param.values, ", ", |out, value| {
                    out.push("\"").push(value).push("\"");
                });
                out.push("}");
            }
        });
        out.push(")");
    }
}
