//! The standard environment: built-in I/O function signatures
//! pre-registered in the outermost scope frame before user code is
//! checked. User globals may shadow these names, never collide with
//! them.

use crate::ast::Type;

pub struct BuiltinFunction {
    pub name: &'static str,
    pub return_type: Type,
    pub params: Vec<Type>,
}

pub fn standard_environment() -> Vec<BuiltinFunction> {
    vec![
        BuiltinFunction {
            name: "getInt",
            return_type: Type::Int,
            params: vec![],
        },
        BuiltinFunction {
            name: "putInt",
            return_type: Type::Void,
            params: vec![Type::Int],
        },
        BuiltinFunction {
            name: "putIntLn",
            return_type: Type::Void,
            params: vec![Type::Int],
        },
        BuiltinFunction {
            name: "getFloat",
            return_type: Type::Float,
            params: vec![],
        },
        BuiltinFunction {
            name: "putFloat",
            return_type: Type::Void,
            params: vec![Type::Float],
        },
        BuiltinFunction {
            name: "putFloatLn",
            return_type: Type::Void,
            params: vec![Type::Float],
        },
        BuiltinFunction {
            name: "putBool",
            return_type: Type::Void,
            params: vec![Type::Boolean],
        },
        BuiltinFunction {
            name: "putBoolLn",
            return_type: Type::Void,
            params: vec![Type::Boolean],
        },
        BuiltinFunction {
            name: "putString",
            return_type: Type::Void,
            params: vec![Type::String],
        },
        BuiltinFunction {
            name: "putStringLn",
            return_type: Type::Void,
            params: vec![Type::String],
        },
        BuiltinFunction {
            name: "putLn",
            return_type: Type::Void,
            params: vec![],
        },
    ]
}
