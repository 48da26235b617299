//! Method declarations on an interface
//!
//! A [`Method`] is built once from parsed arguments, results and
//! annotations, then optionally numbered or reserved, then analyzed and
//! emitted. Its shape never changes after construction.

pub mod dispatch;
pub mod elision;
pub mod typed_vars;

pub use dispatch::{Backend, ImplRole, ImplTable, MethodImpl, RoleBody};
pub use typed_vars::TypedVarVector;

use crate::annotation::Annotation;
use crate::error::{ReservationError, SemanticError};
use crate::formatter::Formatter;
use crate::location::Location;
use crate::semantic::{self, Node};
use crate::types::NamedReference;
use std::rc::Rc;

/// Name of the reserved method that stays visible to the managed backend
/// whatever its argument types
pub const DEBUG_METHOD_NAME: &str = "debug";

#[derive(Debug)]
pub struct Method {
    name: String,
    args: Rc<TypedVarVector>,
    results: Rc<TypedVarVector>,
    oneway: bool,
    annotations: Rc<Vec<Box<dyn Annotation>>>,
    location: Location,
    reserved: bool,
    serial_id: Option<u32>,
    native_impl: ImplTable,
    managed_impl: ImplTable,
}

impl Method {
    pub fn new(
        name: impl Into<String>,
        args: TypedVarVector,
        results: TypedVarVector,
        oneway: bool,
        annotations: Vec<Box<dyn Annotation>>,
        location: Location,
    ) -> Self {
        Self::with_shared(
            name.into(),
            Rc::new(args),
            Rc::new(results),
            oneway,
            Rc::new(annotations),
            location,
        )
    }

    fn with_shared(
        name: String,
        args: Rc<TypedVarVector>,
        results: Rc<TypedVarVector>,
        oneway: bool,
        annotations: Rc<Vec<Box<dyn Annotation>>>,
        location: Location,
    ) -> Self {
        Self {
            name,
            args,
            results,
            oneway,
            annotations,
            location,
            reserved: false,
            serial_id: None,
            native_impl: ImplTable::native(),
            managed_impl: ImplTable::managed(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &TypedVarVector {
        &self.args
    }

    pub fn results(&self) -> &TypedVarVector {
        &self.results
    }

    pub fn annotations(&self) -> &[Box<dyn Annotation>] {
        &self.annotations
    }

    pub fn is_oneway(&self) -> bool {
        self.oneway
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn is_reserved(&self) -> bool {
        self.reserved
    }

    pub fn serial_id(&self) -> Option<u32> {
        self.serial_id
    }

    /// Number an ordinary method. Reserved methods get their serial from
    /// [`Method::reserve`].
    pub fn set_serial_id(&mut self, serial: u32) -> Result<(), ReservationError> {
        if self.reserved {
            return Err(ReservationError::SerialOnReserved {
                method: self.name.clone(),
            });
        }
        if let Some(existing) = self.serial_id {
            return Err(ReservationError::SerialAlreadySet {
                method: self.name.clone(),
                serial: existing,
            });
        }
        self.serial_id = Some(serial);
        Ok(())
    }

    /// Promote to a compiler-injected method with backend bodies
    pub fn reserve(
        &mut self,
        serial: u32,
        native: ImplTable,
        managed: ImplTable,
    ) -> Result<(), ReservationError> {
        assert_eq!(native.backend(), Backend::Native, "native table built for the wrong backend");
        assert_eq!(managed.backend(), Backend::Managed, "managed table built for the wrong backend");

        if self.reserved {
            return Err(ReservationError::AlreadyReserved {
                method: self.name.clone(),
            });
        }
        if let Some(existing) = self.serial_id {
            return Err(ReservationError::SerialAlreadySet {
                method: self.name.clone(),
                serial: existing,
            });
        }

        tracing::debug!(method = %self.name, serial, "reserving method");
        self.reserved = true;
        self.serial_id = Some(serial);
        self.native_impl = native;
        self.managed_impl = managed;
        Ok(())
    }

    /// A new unreserved method sharing this one's argument, result and
    /// annotation lists, with no location.
    pub fn copy_signature(&self) -> Method {
        Self::with_shared(
            self.name.clone(),
            Rc::clone(&self.args),
            Rc::clone(&self.results),
            self.oneway,
            Rc::clone(&self.annotations),
            Location::empty(),
        )
    }

    /// Whether this method shares its argument and result lists with `other`
    pub fn shares_signature_with(&self, other: &Method) -> bool {
        Rc::ptr_eq(&self.args, &other.args) && Rc::ptr_eq(&self.results, &other.results)
    }

    /// Arguments, results, then annotations
    fn nodes(&self) -> impl Iterator<Item = Node<'_>> {
        let args = self.args.iter().map(Node::Argument);
        let results = self.results.iter().map(Node::Result);
        let annotations = self.annotations.iter().map(|a| Node::Annotation(a.as_ref()));
        args.chain(results).chain(annotations)
    }

    fn in_method(&self, source: SemanticError) -> SemanticError {
        SemanticError::InMethod {
            method: self.name.clone(),
            location: self.location.clone(),
            source: Box::new(source),
        }
    }

    pub fn evaluate(&self) -> Result<(), SemanticError> {
        semantic::evaluate_all(self.nodes()).map_err(|e| self.in_method(e))
    }

    pub fn validate(&self) -> Result<(), SemanticError> {
        if self.name.is_empty() {
            return Err(self.in_method(SemanticError::EmptyMethodName));
        }
        if self.oneway && !self.results.is_empty() {
            return Err(self.in_method(SemanticError::OnewayWithResults));
        }
        semantic::validate_all(self.nodes()).map_err(|e| self.in_method(e))
    }

    /// The result returned directly by the native backend, if there is
    /// exactly one and its type allows it
    pub fn can_elide_callback(&self) -> Option<&NamedReference> {
        elision::elided_result(&self.results)
    }

    pub fn has_empty_native_arg_signature(&self) -> bool {
        elision::has_empty_native_arg_signature(&self.args, &self.results)
    }

    pub fn is_hidden_from_java(&self) -> bool {
        self.reserved && self.name == DEBUG_METHOD_NAME
    }

    /// Every argument and result type has a managed form
    pub fn is_java_compatible(&self) -> bool {
        if self.is_hidden_from_java() {
            return true;
        }
        self.args
            .iter()
            .chain(self.results.iter())
            .all(|var| var.ty().is_java_compatible())
    }

    pub fn overrides_native_impl(&self, role: ImplRole) -> bool {
        self.assert_reserved();
        self.native_impl.contains(role)
    }

    pub fn overrides_managed_impl(&self, role: ImplRole) -> bool {
        self.assert_reserved();
        self.managed_impl.contains(role)
    }

    pub fn native_impl(&self, role: ImplRole, out: &mut Formatter) {
        self.assert_reserved();
        self.native_impl.emit(role, out);
    }

    pub fn managed_impl(&self, role: ImplRole, out: &mut Formatter) {
        self.assert_reserved();
        self.managed_impl.emit(role, out);
    }

    fn assert_reserved(&self) {
        assert!(
            self.reserved,
            "role dispatch on '{}', which is not a reserved method",
            self.name
        );
    }
}
