//! Compiler-injected methods every interface carries
//!
//! Reserved methods use transaction codes above the user range, packed
//! from a `0x0f` marker and three ASCII tags.

use crate::error::HidlError;
use crate::formatter::Formatter;
use crate::location::Location;
use crate::method::{ImplRole, ImplTable, Method, RoleBody, TypedVarVector};
use crate::semantic;
use crate::types::{NamedReference, TypeRegistry};
use std::rc::Rc;

pub const FIRST_CALL_TRANSACTION: u32 = 0x0000_0001;
pub const LAST_CALL_TRANSACTION: u32 = 0x00ff_ffff;

pub const fn pack_chars(c1: u8, c2: u8, c3: u8, c4: u8) -> u32 {
    ((c1 as u32) << 24) | ((c2 as u32) << 16) | ((c3 as u32) << 8) | (c4 as u32)
}

pub const INTERFACE_CHAIN_TRANSACTION: u32 = pack_chars(0x0f, b'C', b'H', b'N');
pub const INTERFACE_DESCRIPTOR_TRANSACTION: u32 = pack_chars(0x0f, b'D', b'S', b'C');
pub const SYSPROPS_CHANGED_TRANSACTION: u32 = pack_chars(0x0f, b'S', b'Y', b'S');
pub const DEBUG_TRANSACTION: u32 = pack_chars(0x0f, b'D', b'B', b'G');
pub const SET_HAL_INSTRUMENTATION_TRANSACTION: u32 = pack_chars(0x0f, b'I', b'N', b'T');
pub const PING_TRANSACTION: u32 = pack_chars(0x0f, b'P', b'N', b'G');

/// Serial of the `index`-th user-declared method, if it fits the user range
pub fn ordinary_serial(index: usize) -> Option<u32> {
    let serial = u32::try_from(index).ok()?.checked_add(FIRST_CALL_TRANSACTION)?;
    (serial <= LAST_CALL_TRANSACTION).then_some(serial)
}

/// `android.hardware.foo@1.0::IFoo` -> `::android::hardware::foo::V1_0::IFoo`
pub fn native_fq_name(fq_name: &str) -> String {
    let (package, rest) = match fq_name.split_once('@') {
        Some(parts) => parts,
        None => return format!("::{}", fq_name.replace('.', "::")),
    };
    let (version, name) = rest.split_once("::").unwrap_or((rest, ""));

    let mut out = format!("::{}::V{}", package.replace('.', "::"), version.replace('.', "_"));
    if !name.is_empty() {
        out.push_str("::");
        out.push_str(name);
    }
    out
}

/// `android.hardware.foo@1.0::IFoo` -> `android.hardware.foo.V1_0.IFoo`
pub fn managed_fq_name(fq_name: &str) -> String {
    native_fq_name(fq_name)
        .trim_start_matches("::")
        .replace("::", ".")
}

const VOID_RETURN: &str = "return ::android::hardware::Void();";

/// The reserved methods for one interface, in serial order
pub struct ReservedCatalogue {
    methods: Vec<Method>,
}

impl ReservedCatalogue {
    /// Build the catalogue for `fq_name`. `chain` lists the interface and
    /// its ancestors, most derived first; an empty chain means just
    /// `fq_name`.
    #[tracing::instrument(skip(registry, chain))]
    pub fn new(
        registry: &Rc<TypeRegistry>,
        fq_name: &str,
        chain: &[String],
    ) -> Result<Self, HidlError> {
        let chain: Vec<String> = if chain.is_empty() {
            vec![fq_name.to_string()]
        } else {
            chain.to_vec()
        };

        let builder = Builder { registry };
        let mut methods = vec![
            builder.interface_chain(&chain)?,
            builder.interface_descriptor(fq_name)?,
            builder.sysprops_changed()?,
            builder.debug()?,
            builder.set_hal_instrumentation()?,
            builder.ping()?,
        ];
        methods.sort_by_key(|m| m.serial_id());

        for method in &methods {
            semantic::analyze(method)?;
        }
        tracing::debug!(count = methods.len(), "reserved catalogue built");
        Ok(Self { methods })
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn find(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name() == name)
    }
}

struct Builder<'a> {
    registry: &'a Rc<TypeRegistry>,
}

impl Builder<'_> {
    fn vars(&self, decls: &[(&str, &str)]) -> Result<TypedVarVector, HidlError> {
        let location = Location::empty();
        let vars = decls.iter().map(|(ty, name)| {
            NamedReference::new(*name, self.registry.parse_type_expr(ty, &location), location.clone())
        });
        Ok(TypedVarVector::try_from_iter(vars)?)
    }

    #[allow(clippy::too_many_arguments)]
    fn reserved(
        &self,
        name: &str,
        args: &[(&str, &str)],
        results: &[(&str, &str)],
        oneway: bool,
        serial: u32,
        native: ImplTable,
        managed: ImplTable,
    ) -> Result<Method, HidlError> {
        let mut method = Method::new(
            name,
            self.vars(args)?,
            self.vars(results)?,
            oneway,
            Vec::new(),
            Location::empty(),
        );
        method.reserve(serial, native, managed)?;
        Ok(method)
    }

    fn interface_chain(&self, chain: &[String]) -> Result<Method, HidlError> {
        let native_names: Vec<String> = chain.iter().map(|fq| native_fq_name(fq)).collect();
        let managed_names: Vec<String> = chain.iter().map(|fq| managed_fq_name(fq)).collect();

        let native = ImplTable::native().with(
            ImplRole::Interface,
            RoleBody::emit_with(move |out: &mut Formatter| {
                out.push("_hidl_cb({\n");
                out.indent(|out| {
                    for name in &native_names {
                        out.push(name).push("::descriptor,\n");
                    }
                });
                out.push("});\n").push(VOID_RETURN).push("\n");
            }),
        )?;
        let managed = ImplTable::managed().with(
            ImplRole::Interface,
            RoleBody::emit_with(move |out: &mut Formatter| {
                out.push("return new java.util.ArrayList<String>(java.util.Arrays.asList(\n");
                out.indent(|out| {
                    out.join(&managed_names, ",\n", |out, name| {
                        out.push(name).push(".kInterfaceName");
                    });
                });
                out.push("));\n");
            }),
        )?;

        self.reserved(
            "interfaceChain",
            &[],
            &[("vec<string>", "descriptors")],
            false,
            INTERFACE_CHAIN_TRANSACTION,
            native,
            managed,
        )
    }

    fn interface_descriptor(&self, fq_name: &str) -> Result<Method, HidlError> {
        let native_name = native_fq_name(fq_name);
        let managed_name = managed_fq_name(fq_name);

        let native = ImplTable::native().with(
            ImplRole::Interface,
            RoleBody::lines(&[format!("_hidl_cb({}::descriptor);", native_name).as_str(), VOID_RETURN]),
        )?;
        let managed = ImplTable::managed().with(
            ImplRole::Interface,
            RoleBody::lines(&[format!("return {}.kInterfaceName;", managed_name).as_str()]),
        )?;

        self.reserved(
            "interfaceDescriptor",
            &[],
            &[("string", "descriptor")],
            false,
            INTERFACE_DESCRIPTOR_TRANSACTION,
            native,
            managed,
        )
    }

    fn sysprops_changed(&self) -> Result<Method, HidlError> {
        let native = ImplTable::native().with(
            ImplRole::Interface,
            RoleBody::lines(&["::android::report_sysprop_change();", VOID_RETURN]),
        )?;
        let managed = ImplTable::managed().with(
            ImplRole::Interface,
            RoleBody::lines(&["android.os.HwBinder.enableInstrumentation();"]),
        )?;

        self.reserved(
            "notifySyspropsChanged",
            &[],
            &[],
            true,
            SYSPROPS_CHANGED_TRANSACTION,
            native,
            managed,
        )
    }

    fn debug(&self) -> Result<Method, HidlError> {
        let native = ImplTable::native().with(
            ImplRole::Interface,
            RoleBody::lines(&["(void)fd;", "(void)options;", VOID_RETURN]),
        )?;
        let managed = ImplTable::managed().with(ImplRole::Interface, RoleBody::lines(&["return;"]))?;

        self.reserved(
            "debug",
            &[("handle", "fd"), ("vec<string>", "options")],
            &[],
            false,
            DEBUG_TRANSACTION,
            native,
            managed,
        )
    }

    fn set_hal_instrumentation(&self) -> Result<Method, HidlError> {
        let configure = ["configureInstrumentation();", VOID_RETURN];
        let native = ImplTable::native()
            .with(ImplRole::Interface, RoleBody::Empty)?
            .with(ImplRole::Proxy, RoleBody::lines(&configure))?
            .with(ImplRole::StubImpl, RoleBody::lines(&configure))?
            .with(ImplRole::Passthrough, RoleBody::lines(&configure))?;
        let managed = ImplTable::managed().with(ImplRole::Interface, RoleBody::Empty)?;

        self.reserved(
            "setHALInstrumentation",
            &[],
            &[],
            true,
            SET_HAL_INSTRUMENTATION_TRANSACTION,
            native,
            managed,
        )
    }

    fn ping(&self) -> Result<Method, HidlError> {
        let native = ImplTable::native().with(ImplRole::Interface, RoleBody::lines(&[VOID_RETURN]))?;
        let managed = ImplTable::managed().with(ImplRole::Interface, RoleBody::lines(&["return;"]))?;

        self.reserved("ping", &[], &[], false, PING_TRANSACTION, native, managed)
    }
}
