//! Builds methods from command-line declarations and renders them

use crate::annotation::{Annotation, NamedAnnotation};
use crate::cli::Cli;
use crate::codegen::{BackendEmitter, EmitConfig, ManagedEmitter, NativeEmitter};
use crate::error::HidlError;
use crate::formatter::Formatter;
use crate::location::{Location, Position};
use crate::method::{Backend, ImplRole, Method, TypedVarVector};
use crate::reserved::ReservedCatalogue;
use crate::semantic;
use crate::types::{NamedReference, TypeRegistry};
use std::fs;
use std::rc::Rc;

const COMMAND_LINE: &str = "<command line>";

/// Parse a `TYPE:NAME` declaration
pub fn parse_var(
    decl: &str,
    registry: &Rc<TypeRegistry>,
    location: Location,
) -> Result<NamedReference, HidlError> {
    let (ty, name) = decl
        .rsplit_once(':')
        .filter(|(ty, name)| !ty.trim().is_empty() && !name.trim().is_empty())
        .ok_or_else(|| HidlError::Usage(format!("expected TYPE:NAME, found '{}'", decl)))?;

    let ty = registry.parse_type_expr(ty, &location);
    Ok(NamedReference::new(name.trim(), ty, location))
}

fn parse_vars(
    decls: &[String],
    registry: &Rc<TypeRegistry>,
    line: usize,
) -> Result<TypedVarVector, HidlError> {
    let vars = decls
        .iter()
        .enumerate()
        .map(|(i, decl)| {
            let position = Position::new(line, i + 1);
            parse_var(decl, registry, Location::new(COMMAND_LINE, position, position))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TypedVarVector::try_from_iter(vars)?)
}

/// The method described by `cli`, analyzed, if a name was given
pub fn build_method(cli: &Cli, registry: &Rc<TypeRegistry>) -> Result<Option<Method>, HidlError> {
    let Some(name) = cli.name.as_deref() else {
        return Ok(None);
    };
    if name.is_empty() {
        return Err(HidlError::Usage("method name must not be empty".to_string()));
    }

    // Arguments on line 1, results on line 2, for diagnostics
    let args = parse_vars(&cli.args, registry, 1)?;
    let results = parse_vars(&cli.results, registry, 2)?;
    let annotations: Vec<Box<dyn Annotation>> = cli
        .annotations
        .iter()
        .map(|a| Box::new(NamedAnnotation::new(a.trim_start_matches('@'))) as Box<dyn Annotation>)
        .collect();

    let method = Method::new(
        name,
        args,
        results,
        cli.oneway,
        annotations,
        Location::new(COMMAND_LINE, Position::new(1, 1), Position::new(2, cli.results.len() + 1)),
    );
    semantic::analyze(&method)?;
    Ok(Some(method))
}

/// Render everything `cli` asks for
pub fn render(cli: &Cli) -> Result<String, HidlError> {
    let registry = Rc::new(TypeRegistry::new());
    let mut out = Formatter::new();

    if let Some(method) = build_method(cli, &registry)? {
        render_method(&method, cli, &mut out);
    }

    if let Some(fq_name) = cli.reserved.as_deref() {
        let catalogue = ReservedCatalogue::new(&registry, fq_name, &[])?;
        for method in catalogue.methods() {
            out.newline();
            if let Some(serial) = method.serial_id() {
                out.push(&format!("// reserved {:#010x}\n", serial));
            }
            render_method(method, cli, &mut out);
        }
    }

    Ok(out.into_string())
}

/// Render, then write to the requested output
pub fn run(cli: &Cli) -> Result<(), HidlError> {
    let text = render(cli)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, text)?;
            tracing::info!(path = %path.display(), "wrote signatures");
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn render_method(method: &Method, cli: &Cli, out: &mut Formatter) {
    if cli.backend.native() {
        let config = EmitConfig {
            specify_namespaces: cli.namespaces,
            class_name: cli.class_name.clone(),
        };
        let native = NativeEmitter::new(config);
        native.emit_declaration(method, out);
        render_reserved_bodies(&native, method, out);
    }

    if cli.backend.managed() {
        if !method.is_java_compatible() {
            out.push("// ")
                .push(method.name())
                .push(" is not available to the managed backend\n");
            return;
        }

        let managed = ManagedEmitter::new();
        out.push("// managed arguments: ");
        managed.emit_arg_signature(method, out);
        out.push("\n// managed results: ");
        managed.emit_result_signature(method, out);
        out.push("\n");
        render_reserved_bodies(&managed, method, out);
    }
}

fn render_reserved_bodies(emitter: &dyn BackendEmitter, method: &Method, out: &mut Formatter) {
    if !method.is_reserved() {
        return;
    }
    let backend = match emitter.backend() {
        Backend::Native => "native",
        Backend::Managed => "managed",
    };
    for role in ImplRole::ALL {
        if emitter.overrides(method, role) {
            out.push("// ").push(backend).push(" ").push(role.name()).push("\n");
            out.indent(|out| emitter.emit_method_body(method, role, out));
        }
    }
}
