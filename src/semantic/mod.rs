//! Semantic analysis for method declarations
//!
//! Analysis runs two ordered passes over the same nodes:
//! - evaluate: force type resolution and annotation evaluation
//! - validate: legality checks over the evaluated state
//!
//! Both passes stop at the first failure.

use crate::annotation::Annotation;
use crate::error::SemanticError;
use crate::method::Method;
use crate::types::NamedReference;

/// Capability pair shared by everything a method analyzes
pub trait Analyzable {
    fn evaluate(&self) -> Result<(), SemanticError>;
    fn validate(&self) -> Result<(), SemanticError>;
}

impl Analyzable for NamedReference {
    fn evaluate(&self) -> Result<(), SemanticError> {
        self.ty().evaluate()
    }

    fn validate(&self) -> Result<(), SemanticError> {
        self.ty().validate()
    }
}

/// One analyzed child of a method, in pass order
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Argument(&'a NamedReference),
    Result(&'a NamedReference),
    Annotation(&'a dyn Annotation),
}

impl Node<'_> {
    pub fn label(&self) -> String {
        match self {
            Node::Argument(arg) => format!("argument '{}'", arg.name()),
            Node::Result(result) => format!("result '{}'", result.name()),
            Node::Annotation(annotation) => format!("annotation '@{}'", annotation.name()),
        }
    }
}

impl Analyzable for Node<'_> {
    fn evaluate(&self) -> Result<(), SemanticError> {
        match self {
            Node::Argument(var) | Node::Result(var) => var.evaluate(),
            Node::Annotation(annotation) => annotation.evaluate(),
        }
    }

    fn validate(&self) -> Result<(), SemanticError> {
        match self {
            Node::Argument(var) | Node::Result(var) => var.validate(),
            Node::Annotation(annotation) => annotation.validate(),
        }
    }
}

/// Evaluate every node in order, stopping at the first failure
pub fn evaluate_all<'a, I>(nodes: I) -> Result<(), SemanticError>
where
    I: IntoIterator<Item = Node<'a>>,
{
    for node in nodes {
        tracing::trace!(node = %node.label(), "evaluate");
        node.evaluate()?;
    }
    Ok(())
}

/// Validate every node in order, stopping at the first failure
pub fn validate_all<'a, I>(nodes: I) -> Result<(), SemanticError>
where
    I: IntoIterator<Item = Node<'a>>,
{
    for node in nodes {
        tracing::trace!(node = %node.label(), "validate");
        node.validate()?;
    }
    Ok(())
}

/// Run both passes over a method
#[tracing::instrument(skip(method), fields(method = %method.name()))]
pub fn analyze(method: &Method) -> Result<(), SemanticError> {
    method.evaluate()?;
    method.validate()?;
    tracing::debug!("method analyzed");
    Ok(())
}
