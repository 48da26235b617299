//! Proptest strategies for generating method shapes
//!
//! Names are generated positionally so argument and result lists are
//! always valid; duplicates are produced explicitly where a test needs them.

#![allow(dead_code)]

use hidl_method::types::{HandleType, ScalarKind, ScalarType, StringType, Type, VecType};
use hidl_method::{Location, Method, NamedReference, TypedVarVector};
use proptest::prelude::*;
use std::rc::Rc;

// ════════════════════════════════════════════════════════════
// Basic Strategies
// ════════════════════════════════════════════════════════════

/// Generate valid method names
pub fn method_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,20}".prop_map(|s| s.to_string())
}

pub fn scalar_kind() -> impl Strategy<Value = ScalarKind> {
    prop::sample::select(ScalarKind::ALL.to_vec())
}

/// Types that can be returned directly
pub fn elidable_type() -> impl Strategy<Value = Rc<dyn Type>> {
    scalar_kind().prop_map(|kind| Rc::new(ScalarType::new(kind)) as Rc<dyn Type>)
}

/// Types that always need the callback
pub fn non_elidable_type() -> impl Strategy<Value = Rc<dyn Type>> {
    prop_oneof![
        Just(Rc::new(StringType) as Rc<dyn Type>),
        Just(Rc::new(HandleType) as Rc<dyn Type>),
        scalar_kind().prop_map(|kind| {
            Rc::new(VecType::new(Rc::new(ScalarType::new(kind)))) as Rc<dyn Type>
        }),
    ]
}

pub fn any_type() -> impl Strategy<Value = Rc<dyn Type>> {
    prop_oneof![elidable_type(), non_elidable_type()]
}

// ════════════════════════════════════════════════════════════
// Composite Strategies
// ════════════════════════════════════════════════════════════

/// Generate a list of 0-5 types
pub fn type_list() -> impl Strategy<Value = Vec<Rc<dyn Type>>> {
    prop::collection::vec(any_type(), 0..6)
}

/// Name each type `<prefix><index>`
pub fn named(prefix: &str, types: &[Rc<dyn Type>]) -> TypedVarVector {
    let mut vars = TypedVarVector::new();
    for (i, ty) in types.iter().enumerate() {
        let added = vars.add(NamedReference::new(
            format!("{}{}", prefix, i),
            Rc::clone(ty),
            Location::empty(),
        ));
        assert!(added);
    }
    vars
}

pub fn method(name: &str, args: &[Rc<dyn Type>], results: &[Rc<dyn Type>]) -> Method {
    Method::new(
        name,
        named("arg", args),
        named("res", results),
        false,
        Vec::new(),
        Location::empty(),
    )
}
