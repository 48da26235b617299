//! Managed backend: typed argument and result pairs, no callback

use super::BackendEmitter;
use crate::formatter::Formatter;
use crate::method::{Backend, ImplRole, Method};
use crate::types::NamedReference;

#[derive(Debug, Clone, Copy, Default)]
pub struct ManagedEmitter;

impl ManagedEmitter {
    pub fn new() -> Self {
        Self
    }

    fn emit_vars(&self, vars: &[NamedReference], out: &mut Formatter) {
        out.join(vars, ", ", |out, var| {
            out.push(&var.ty().managed_type()).push(" ").push(var.name());
        });
    }
}

impl BackendEmitter for ManagedEmitter {
    fn backend(&self) -> Backend {
        Backend::Managed
    }

    fn emit_arg_signature(&self, method: &Method, out: &mut Formatter) {
        self.emit_vars(method.args(), out);
    }

    fn emit_result_signature(&self, method: &Method, out: &mut Formatter) {
        self.emit_vars(method.results(), out);
    }

    fn emit_generic_body(&self, method: &Method, out: &mut Formatter) {
        match &method.results()[..] {
            [only] => {
                out.push("return ").push(only.ty().managed_default_value()).push(";\n");
            }
            _ => {
                out.push("return;\n");
            }
        }
    }

    fn overrides(&self, method: &Method, role: ImplRole) -> bool {
        method.overrides_managed_impl(role)
    }

    fn emit_override(&self, method: &Method, role: ImplRole, out: &mut Formatter) {
        method.managed_impl(role, out);
    }
}
