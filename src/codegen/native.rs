//! Native backend: `Return<T>` signatures with an implicit result callback

use super::{dump_annotations, BackendEmitter, EmitConfig};
use crate::formatter::Formatter;
use crate::method::{Backend, ImplRole, Method};
use crate::types::{namespace, NamedReference};

/// Name of the trailing callback parameter
pub const CALLBACK_PARAM: &str = "_hidl_cb";

pub struct NativeEmitter {
    config: EmitConfig,
}

impl NativeEmitter {
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    /// `Return<void> ` or `Return<T> ` for an elided result
    pub fn emit_return_type(&self, method: &Method, out: &mut Formatter) {
        let ns = namespace(self.config.specify_namespaces);
        match method.can_elide_callback() {
            None => {
                out.push(ns).push("Return<void> ");
            }
            Some(result) => {
                let ty = result.ty().native_result_type(self.config.specify_namespaces);
                out.push(ns).push("Return<").push(&ty).push("> ");
            }
        }
    }

    pub fn emit_signature(&self, method: &Method, out: &mut Formatter) {
        self.emit_return_type(method, out);
        if let Some(class_name) = self.config.class_name.as_deref() {
            out.push(class_name).push("::");
        }
        out.push(method.name()).push("(");
        self.emit_arg_signature(method, out);
        out.push(")");
    }

    /// Annotation comment, then the signature as a declaration
    pub fn emit_declaration(&self, method: &Method, out: &mut Formatter) {
        dump_annotations(method, out);
        self.emit_signature(method, out);
        out.push(";\n");
    }

    /// Signature followed by the body for `role`
    pub fn emit_definition(&self, method: &Method, role: ImplRole, out: &mut Formatter) {
        self.emit_signature(method, out);
        out.push(" ");
        out.block("", |out| self.emit_method_body(method, role, out));
    }

    pub fn signature(&self, method: &Method) -> String {
        let mut out = Formatter::new();
        self.emit_signature(method, &mut out);
        out.into_string()
    }

    fn emit_vars(&self, vars: &[NamedReference], out: &mut Formatter) {
        out.join(vars, ", ", |out, var| {
            let ty = var.ty().native_argument_type(self.config.specify_namespaces);
            out.push(&ty).push(" ").push(var.name());
        });
    }
}

impl BackendEmitter for NativeEmitter {
    fn backend(&self) -> Backend {
        Backend::Native
    }

    fn emit_arg_signature(&self, method: &Method, out: &mut Formatter) {
        self.emit_vars(method.args(), out);

        let returns_value = !method.results().is_empty();
        if returns_value && method.can_elide_callback().is_none() {
            if !method.args().is_empty() {
                out.push(", ");
            }
            out.push(method.name()).push("_cb ").push(CALLBACK_PARAM);
        }
    }

    /// Results as the callback receives them
    fn emit_result_signature(&self, method: &Method, out: &mut Formatter) {
        self.emit_vars(method.results(), out);
    }

    fn emit_generic_body(&self, method: &Method, out: &mut Formatter) {
        match method.can_elide_callback() {
            Some(result) => {
                let ty = result.ty().native_result_type(self.config.specify_namespaces);
                out.push("return ").push(&ty).push(" {};\n");
            }
            None => {
                out.push("return ::android::hardware::Void();\n");
            }
        }
    }

    fn overrides(&self, method: &Method, role: ImplRole) -> bool {
        method.overrides_native_impl(role)
    }

    fn emit_override(&self, method: &Method, role: ImplRole, out: &mut Formatter) {
        method.native_impl(role, out);
    }
}
