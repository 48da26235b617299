//! Per-backend, per-role bodies of reserved methods

use crate::error::ReservationError;
use crate::formatter::Formatter;
use std::collections::BTreeMap;
use std::fmt;

/// Structural position a reserved body is emitted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImplRole {
    /// Default body on the interface itself
    Interface,
    /// Client-side proxy
    Proxy,
    /// Server-side stub
    Stub,
    /// Default implementation the native stub falls back to
    StubImpl,
    /// Same-process passthrough wrapper
    Passthrough,
}

impl ImplRole {
    pub const ALL: [ImplRole; 5] = [
        ImplRole::Interface,
        ImplRole::Proxy,
        ImplRole::Stub,
        ImplRole::StubImpl,
        ImplRole::Passthrough,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ImplRole::Interface => "interface",
            ImplRole::Proxy => "proxy",
            ImplRole::Stub => "stub",
            ImplRole::StubImpl => "stub-impl",
            ImplRole::Passthrough => "passthrough",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Native,
    Managed,
}

/// Renders one body into a sink
pub trait MethodImpl {
    fn emit(&self, out: &mut Formatter);
}

impl<F> MethodImpl for F
where
    F: Fn(&mut Formatter),
{
    fn emit(&self, out: &mut Formatter) {
        self(out)
    }
}

/// A registered role: either a body, or declared with nothing to emit
pub enum RoleBody {
    Emit(Box<dyn MethodImpl>),
    Empty,
}

impl RoleBody {
    pub fn emit_with<F>(body: F) -> Self
    where
        F: Fn(&mut Formatter) + 'static,
    {
        RoleBody::Emit(Box::new(body))
    }

    /// Body made of fixed lines
    pub fn lines(lines: &[&str]) -> Self {
        let text: String = lines.iter().map(|line| format!("{}\n", line)).collect();
        RoleBody::emit_with(move |out| {
            out.push(&text);
        })
    }

    fn emit(&self, out: &mut Formatter) {
        if let RoleBody::Emit(body) = self {
            body.emit(out);
        }
    }
}

impl fmt::Debug for RoleBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleBody::Emit(_) => write!(f, "Emit(..)"),
            RoleBody::Empty => write!(f, "Empty"),
        }
    }
}

/// Role-keyed bodies for one backend
#[derive(Debug)]
pub struct ImplTable {
    backend: Backend,
    bodies: BTreeMap<ImplRole, RoleBody>,
}

impl ImplTable {
    pub fn native() -> Self {
        Self::for_backend(Backend::Native)
    }

    pub fn managed() -> Self {
        Self::for_backend(Backend::Managed)
    }

    pub fn for_backend(backend: Backend) -> Self {
        Self {
            backend,
            bodies: BTreeMap::new(),
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Register `body` for `role`, replacing an earlier body for the same role.
    ///
    /// Managed tables never take `StubImpl`; native tables never hold both
    /// `Stub` and `StubImpl`.
    pub fn register(&mut self, role: ImplRole, body: RoleBody) -> Result<(), ReservationError> {
        match (self.backend, role) {
            (Backend::Managed, ImplRole::StubImpl) => {
                return Err(ReservationError::StubImplOnManaged);
            }
            (Backend::Native, ImplRole::Stub) if self.contains(ImplRole::StubImpl) => {
                return Err(ReservationError::StubShadowsStubImpl);
            }
            (Backend::Native, ImplRole::StubImpl) if self.contains(ImplRole::Stub) => {
                return Err(ReservationError::StubShadowsStubImpl);
            }
            _ => {}
        }
        self.bodies.insert(role, body);
        Ok(())
    }

    /// Builder form of [`ImplTable::register`]
    pub fn with(mut self, role: ImplRole, body: RoleBody) -> Result<Self, ReservationError> {
        self.register(role, body)?;
        Ok(self)
    }

    pub fn get(&self, role: ImplRole) -> Option<&RoleBody> {
        self.bodies.get(&role)
    }

    pub fn contains(&self, role: ImplRole) -> bool {
        self.bodies.contains_key(&role)
    }

    /// Emit the body for `role`; unregistered and empty roles write nothing
    pub fn emit(&self, role: ImplRole, out: &mut Formatter) {
        if let Some(body) = self.get(role) {
            body.emit(out);
        }
    }

    pub fn roles(&self) -> impl Iterator<Item = ImplRole> + '_ {
        self.bodies.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
