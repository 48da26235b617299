//! Builtin types: scalars, strings, handles and vectors

use super::{namespace, Type};
use crate::error::SemanticError;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float,
    Double,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 11] = [
        ScalarKind::Bool,
        ScalarKind::Int8,
        ScalarKind::Uint8,
        ScalarKind::Int16,
        ScalarKind::Uint16,
        ScalarKind::Int32,
        ScalarKind::Uint32,
        ScalarKind::Int64,
        ScalarKind::Uint64,
        ScalarKind::Float,
        ScalarKind::Double,
    ];

    /// IDL keyword
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int8 => "int8",
            ScalarKind::Uint8 => "uint8",
            ScalarKind::Int16 => "int16",
            ScalarKind::Uint16 => "uint16",
            ScalarKind::Int32 => "int32",
            ScalarKind::Uint32 => "uint32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Uint64 => "uint64",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
        }
    }

    fn native_name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int8 => "int8_t",
            ScalarKind::Uint8 => "uint8_t",
            ScalarKind::Int16 => "int16_t",
            ScalarKind::Uint16 => "uint16_t",
            ScalarKind::Int32 => "int32_t",
            ScalarKind::Uint32 => "uint32_t",
            ScalarKind::Int64 => "int64_t",
            ScalarKind::Uint64 => "uint64_t",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
        }
    }

    // Unsigned kinds share the signed managed primitive
    fn managed_name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "boolean",
            ScalarKind::Int8 | ScalarKind::Uint8 => "byte",
            ScalarKind::Int16 | ScalarKind::Uint16 => "short",
            ScalarKind::Int32 | ScalarKind::Uint32 => "int",
            ScalarKind::Int64 | ScalarKind::Uint64 => "long",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
        }
    }

    fn managed_boxed_name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "Boolean",
            ScalarKind::Int8 | ScalarKind::Uint8 => "Byte",
            ScalarKind::Int16 | ScalarKind::Uint16 => "Short",
            ScalarKind::Int32 | ScalarKind::Uint32 => "Integer",
            ScalarKind::Int64 | ScalarKind::Uint64 => "Long",
            ScalarKind::Float => "Float",
            ScalarKind::Double => "Double",
        }
    }

    pub fn from_name(name: &str) -> Option<ScalarKind> {
        ScalarKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarType {
    kind: ScalarKind,
}

impl ScalarType {
    pub fn new(kind: ScalarKind) -> Self {
        Self { kind }
    }
}

impl Type for ScalarType {
    fn type_name(&self) -> String {
        self.kind.name().to_string()
    }

    fn is_elidable(&self) -> bool {
        true
    }

    fn native_result_type(&self, _specify_namespaces: bool) -> String {
        self.kind.native_name().to_string()
    }

    fn managed_type(&self) -> String {
        self.kind.managed_name().to_string()
    }

    fn managed_boxed_type(&self) -> String {
        self.kind.managed_boxed_name().to_string()
    }

    fn managed_default_value(&self) -> &'static str {
        match self.kind {
            ScalarKind::Bool => "false",
            _ => "0",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StringType;

impl Type for StringType {
    fn type_name(&self) -> String {
        "string".to_string()
    }

    fn native_argument_type(&self, specify_namespaces: bool) -> String {
        format!("const {}&", self.native_result_type(specify_namespaces))
    }

    fn native_result_type(&self, specify_namespaces: bool) -> String {
        format!("{}hidl_string", namespace(specify_namespaces))
    }

    fn managed_type(&self) -> String {
        "String".to_string()
    }
}

/// Native file-descriptor bundle; has no managed counterpart
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleType;

impl Type for HandleType {
    fn type_name(&self) -> String {
        "handle".to_string()
    }

    fn native_argument_type(&self, specify_namespaces: bool) -> String {
        format!("const {}&", self.native_result_type(specify_namespaces))
    }

    fn native_result_type(&self, specify_namespaces: bool) -> String {
        format!("{}hidl_handle", namespace(specify_namespaces))
    }

    fn managed_type(&self) -> String {
        "android.os.NativeHandle".to_string()
    }

    fn is_java_compatible(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
pub struct VecType {
    element: Rc<dyn Type>,
}

impl VecType {
    pub fn new(element: Rc<dyn Type>) -> Self {
        Self { element }
    }
}

impl Type for VecType {
    fn type_name(&self) -> String {
        format!("vec<{}>", self.element.type_name())
    }

    fn evaluate(&self) -> Result<(), SemanticError> {
        self.element.evaluate()
    }

    fn validate(&self) -> Result<(), SemanticError> {
        self.element.validate()
    }

    fn native_argument_type(&self, specify_namespaces: bool) -> String {
        format!("const {}&", self.native_result_type(specify_namespaces))
    }

    fn native_result_type(&self, specify_namespaces: bool) -> String {
        format!(
            "{}hidl_vec<{}>",
            namespace(specify_namespaces),
            self.element.native_result_type(specify_namespaces)
        )
    }

    fn managed_type(&self) -> String {
        format!("java.util.ArrayList<{}>", self.element.managed_boxed_type())
    }

    fn is_java_compatible(&self) -> bool {
        self.element.is_java_compatible()
    }
}
