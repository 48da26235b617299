//! End-to-end tests: declare, analyze, reserve and emit methods

use hidl_method::formatter::Formatter;
use hidl_method::method::Backend;
use hidl_method::reserved::{self, ReservedCatalogue};
use hidl_method::semantic;
use hidl_method::types::{ScalarKind, ScalarType, StringType};
use hidl_method::*;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

/// Type that records every pass it sees and can be told to fail one
#[derive(Debug)]
struct ProbeType {
    label: &'static str,
    log: Log,
    fail_evaluate: bool,
    fail_validate: bool,
}

impl ProbeType {
    fn new(label: &'static str, log: &Log) -> Self {
        Self {
            label,
            log: Rc::clone(log),
            fail_evaluate: false,
            fail_validate: false,
        }
    }

    fn failing_evaluate(mut self) -> Self {
        self.fail_evaluate = true;
        self
    }

    fn failing_validate(mut self) -> Self {
        self.fail_validate = true;
        self
    }

    fn error(&self) -> SemanticError {
        SemanticError::UnresolvedType {
            name: self.label.to_string(),
            location: Location::empty(),
        }
    }
}

impl Type for ProbeType {
    fn type_name(&self) -> String {
        self.label.to_string()
    }

    fn evaluate(&self) -> Result<(), SemanticError> {
        self.log.borrow_mut().push(format!("evaluate {}", self.label));
        if self.fail_evaluate {
            return Err(self.error());
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), SemanticError> {
        self.log.borrow_mut().push(format!("validate {}", self.label));
        if self.fail_validate {
            return Err(self.error());
        }
        Ok(())
    }

    fn native_result_type(&self, _specify_namespaces: bool) -> String {
        self.label.to_string()
    }

    fn managed_type(&self) -> String {
        self.label.to_string()
    }
}

#[derive(Debug)]
struct ProbeAnnotation {
    log: Log,
}

impl Annotation for ProbeAnnotation {
    fn name(&self) -> &str {
        "probe"
    }

    fn evaluate(&self) -> Result<(), SemanticError> {
        self.log.borrow_mut().push("evaluate @probe".to_string());
        Ok(())
    }

    fn validate(&self) -> Result<(), SemanticError> {
        self.log.borrow_mut().push("validate @probe".to_string());
        Ok(())
    }

    fn dump(&self, out: &mut Formatter) {
        out.push("@probe");
    }
}

fn var(name: &str, ty: Rc<dyn Type>) -> NamedReference {
    NamedReference::new(name, ty, Location::empty())
}

fn vars(list: Vec<NamedReference>) -> TypedVarVector {
    TypedVarVector::try_from_iter(list).unwrap()
}

fn int32() -> Rc<dyn Type> {
    Rc::new(ScalarType::new(ScalarKind::Int32))
}

fn probe_method(log: &Log, arg: ProbeType, result: ProbeType) -> Method {
    Method::new(
        "probe",
        vars(vec![var("a", Rc::new(arg))]),
        vars(vec![var("r", Rc::new(result))]),
        false,
        vec![Box::new(ProbeAnnotation { log: Rc::clone(log) })],
        Location::empty(),
    )
}

// ════════════════════════════════════════════════════════════
// Analysis Order
// ════════════════════════════════════════════════════════════

#[test]
fn test_passes_visit_args_results_then_annotations() {
    let log = Log::default();
    let m = probe_method(&log, ProbeType::new("a", &log), ProbeType::new("r", &log));

    semantic::analyze(&m).unwrap();
    assert_eq!(
        *log.borrow(),
        vec![
            "evaluate a",
            "evaluate r",
            "evaluate @probe",
            "validate a",
            "validate r",
            "validate @probe",
        ]
    );
}

#[test]
fn test_evaluate_stops_at_first_failure() {
    let log = Log::default();
    let m = probe_method(
        &log,
        ProbeType::new("a", &log),
        ProbeType::new("r", &log).failing_evaluate(),
    );

    let err = semantic::analyze(&m).unwrap_err();
    assert!(matches!(err, SemanticError::InMethod { ref method, .. } if method == "probe"));
    assert_eq!(
        err.root_cause(),
        &SemanticError::UnresolvedType {
            name: "r".to_string(),
            location: Location::empty(),
        }
    );
    // Annotations are never evaluated and validation never starts
    assert_eq!(*log.borrow(), vec!["evaluate a", "evaluate r"]);
}

#[test]
fn test_failing_argument_skips_later_arguments() {
    const LABELS: [&str; 5] = ["a0", "a1", "a2", "a3", "a4"];
    let log = Log::default();
    let args = LABELS
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let ty = ProbeType::new(label, &log);
            let ty = if i == 2 { ty.failing_evaluate() } else { ty };
            var(label, Rc::new(ty))
        })
        .collect();
    let m = Method::new(
        "probe",
        vars(args),
        vars(vec![var("r", Rc::new(ProbeType::new("r", &log)))]),
        false,
        vec![Box::new(ProbeAnnotation { log: Rc::clone(&log) })],
        Location::empty(),
    );

    let err = m.evaluate().unwrap_err();
    assert_eq!(
        err.root_cause(),
        &SemanticError::UnresolvedType {
            name: "a2".to_string(),
            location: Location::empty(),
        }
    );
    assert_eq!(*log.borrow(), vec!["evaluate a0", "evaluate a1", "evaluate a2"]);
}

#[test]
fn test_validate_stops_at_first_failure() {
    let log = Log::default();
    let m = probe_method(
        &log,
        ProbeType::new("a", &log).failing_validate(),
        ProbeType::new("r", &log),
    );

    m.evaluate().unwrap();
    assert!(m.validate().is_err());
    assert_eq!(
        *log.borrow(),
        vec!["evaluate a", "evaluate r", "evaluate @probe", "validate a"]
    );
}

#[test]
fn test_oneway_with_results_rejected_before_children() {
    let log = Log::default();
    let m = Method::new(
        "fire",
        TypedVarVector::new(),
        vars(vec![var("r", Rc::new(ProbeType::new("r", &log)))]),
        true,
        Vec::new(),
        Location::empty(),
    );
    m.evaluate().unwrap();
    let err = m.validate().unwrap_err();
    assert_eq!(err.root_cause(), &SemanticError::OnewayWithResults);
    assert_eq!(*log.borrow(), vec!["evaluate r"]);
}

// ════════════════════════════════════════════════════════════
// Forward References
// ════════════════════════════════════════════════════════════

#[test]
fn test_forward_reference_elides_after_evaluation() {
    let registry = Rc::new(TypeRegistry::new());
    let loc = Location::empty();
    let later = registry.parse_type_expr("Status", &loc);

    let m = Method::new(
        "status",
        TypedVarVector::new(),
        vars(vec![var("s", later)]),
        false,
        Vec::new(),
        loc,
    );
    assert!(m.can_elide_callback().is_none());

    registry.add("Status", int32());
    semantic::analyze(&m).unwrap();

    assert_eq!(m.can_elide_callback().map(|r| r.name()), Some("s"));
    let emitter = NativeEmitter::new(EmitConfig::header());
    assert_eq!(emitter.signature(&m), "Return<int32_t> status()");
}

#[test]
fn test_unresolved_reference_fails_with_location() {
    let registry = Rc::new(TypeRegistry::new());
    let loc = Location::new("IFoo.hal", Position::new(4, 9), Position::new(4, 15));
    let m = Method::new(
        "get",
        vars(vec![var("m", registry.parse_type_expr("Missing", &loc))]),
        TypedVarVector::new(),
        false,
        Vec::new(),
        loc.clone(),
    );

    let err = semantic::analyze(&m).unwrap_err();
    assert_eq!(
        err.to_string(),
        "in method 'get' declared at IFoo.hal:4.9-4.15: undefined type 'Missing' at IFoo.hal:4.9-4.15"
    );
}

// ════════════════════════════════════════════════════════════
// Native Signatures
// ════════════════════════════════════════════════════════════

#[test]
fn test_elided_result_signature() {
    let m = Method::new(
        "foo",
        TypedVarVector::new(),
        vars(vec![var("x", int32())]),
        false,
        Vec::new(),
        Location::empty(),
    );
    semantic::analyze(&m).unwrap();

    let emitter = NativeEmitter::new(EmitConfig::header());
    assert_eq!(emitter.signature(&m), "Return<int32_t> foo()");
    assert!(m.has_empty_native_arg_signature());

    let mut out = Formatter::new();
    emitter.emit_generic_body(&m, &mut out);
    assert_eq!(out.as_str(), "return int32_t {};\n");
}

#[test]
fn test_callback_signature_with_annotations() {
    let annotations: Vec<Box<dyn Annotation>> = vec![
        Box::new(NamedAnnotation::new("entry")),
        Box::new(NamedAnnotation::new("callflow").with_param(AnnotationParam::single("next", "baz"))),
    ];
    let m = Method::new(
        "bar",
        vars(vec![var("a", int32()), var("b", int32())]),
        vars(vec![var("x", int32()), var("y", int32())]),
        false,
        annotations,
        Location::empty(),
    );
    semantic::analyze(&m).unwrap();
    assert!(m.can_elide_callback().is_none());
    assert!(!m.has_empty_native_arg_signature());

    let emitter = NativeEmitter::new(EmitConfig::source("IBar").with_namespaces(true));
    let mut out = Formatter::new();
    emitter.emit_declaration(&m, &mut out);
    assert_eq!(
        out.as_str(),
        "// @entry @callflow(next=\"baz\")\n\
         ::android::hardware::Return<void> IBar::bar(int32_t a, int32_t b, bar_cb _hidl_cb);\n"
    );
}

#[test]
fn test_managed_signatures() {
    let m = Method::new(
        "lookup",
        vars(vec![var("key", Rc::new(StringType)), var("flags", int32())]),
        vars(vec![var("value", Rc::new(StringType))]),
        false,
        Vec::new(),
        Location::empty(),
    );
    let emitter = ManagedEmitter::new();
    assert_eq!(emitter.backend(), Backend::Managed);

    let mut out = Formatter::new();
    emitter.emit_arg_signature(&m, &mut out);
    out.push(" | ");
    emitter.emit_result_signature(&m, &mut out);
    assert_eq!(out.as_str(), "String key, int flags | String value");
}

// ════════════════════════════════════════════════════════════
// Reserved Methods
// ════════════════════════════════════════════════════════════

#[test]
fn test_catalogue_serials_above_user_range() {
    let registry = Rc::new(TypeRegistry::new());
    let catalogue = ReservedCatalogue::new(&registry, "android.hardware.foo@1.0::IFoo", &[]).unwrap();

    let serials: Vec<u32> = catalogue.methods().iter().filter_map(|m| m.serial_id()).collect();
    assert_eq!(serials.len(), 6);
    assert!(serials.windows(2).all(|w| w[0] < w[1]));
    assert!(serials.iter().all(|&s| s > reserved::LAST_CALL_TRANSACTION));
    assert!(catalogue.methods().iter().all(|m| m.is_reserved()));
    assert_eq!(catalogue.find("ping").and_then(|m| m.serial_id()), Some(reserved::PING_TRANSACTION));
}

#[test]
fn test_debug_stays_managed_compatible() {
    let registry = Rc::new(TypeRegistry::new());
    let catalogue = ReservedCatalogue::new(&registry, "android.hardware.foo@1.0::IFoo", &[]).unwrap();

    let debug = catalogue.find("debug").unwrap();
    assert!(debug.is_hidden_from_java());
    assert!(debug.is_java_compatible());

    // The same shape, unreserved, is not
    let copy = debug.copy_signature();
    assert!(copy.shares_signature_with(debug));
    assert!(!copy.is_hidden_from_java());
    assert!(!copy.is_java_compatible());
}

#[test]
fn test_reserved_body_overrides_generic() {
    let mut m = Method::new(
        "ping",
        TypedVarVector::new(),
        TypedVarVector::new(),
        false,
        Vec::new(),
        Location::empty(),
    );
    let native = ImplTable::native()
        .with(ImplRole::Proxy, RoleBody::lines(&["return pingRemote();"]))
        .unwrap()
        .with(ImplRole::Stub, RoleBody::Empty)
        .unwrap();
    m.reserve(reserved::PING_TRANSACTION, native, ImplTable::managed()).unwrap();

    let emitter = NativeEmitter::new(EmitConfig::header());
    let mut out = Formatter::new();
    emitter.emit_method_body(&m, ImplRole::Proxy, &mut out);
    assert_eq!(out.as_str(), "return pingRemote();\n");

    // Registered but empty: nothing, not the generic body
    let mut out = Formatter::new();
    emitter.emit_method_body(&m, ImplRole::Stub, &mut out);
    assert_eq!(out.as_str(), "");

    let mut out = Formatter::new();
    emitter.emit_method_body(&m, ImplRole::Interface, &mut out);
    assert_eq!(out.as_str(), "return ::android::hardware::Void();\n");
}

#[test]
fn test_impl_table_role_rules() {
    assert_eq!(
        ImplTable::managed().with(ImplRole::StubImpl, RoleBody::Empty).unwrap_err(),
        ReservationError::StubImplOnManaged
    );

    let table = ImplTable::native().with(ImplRole::Stub, RoleBody::Empty).unwrap();
    assert_eq!(
        table.with(ImplRole::StubImpl, RoleBody::Empty).unwrap_err(),
        ReservationError::StubShadowsStubImpl
    );

    let table = ImplTable::native().with(ImplRole::StubImpl, RoleBody::Empty).unwrap();
    assert_eq!(
        table.with(ImplRole::Stub, RoleBody::Empty).unwrap_err(),
        ReservationError::StubShadowsStubImpl
    );
}

#[test]
fn test_user_serials() {
    assert_eq!(reserved::ordinary_serial(0), Some(reserved::FIRST_CALL_TRANSACTION));
    assert_eq!(reserved::ordinary_serial(9), Some(10));
    assert_eq!(reserved::ordinary_serial(reserved::LAST_CALL_TRANSACTION as usize), None);

    let mut m = Method::new(
        "foo",
        TypedVarVector::new(),
        TypedVarVector::new(),
        false,
        Vec::new(),
        Location::empty(),
    );
    m.set_serial_id(reserved::ordinary_serial(0).unwrap()).unwrap();
    assert!(matches!(
        m.reserve(reserved::PING_TRANSACTION, ImplTable::native(), ImplTable::managed()),
        Err(ReservationError::SerialAlreadySet { serial: 1, .. })
    ));
}
