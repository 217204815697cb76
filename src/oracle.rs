// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 vkcapture project

//! Base-type classification.

use crate::schema::{ApiSchema, PlatformTypes};
use std::collections::HashSet;

/// Shape category of a base type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    Scalar,
    Handle,
    FunctionPointer,
    Structure,
    Unknown,
}

/// Answers "what kind of type is this name" for the classifier and mapper.
///
/// Built once per generation pass from the registry dump; classification is
/// a set lookup, so results are never memoized separately.
#[derive(Debug, Default)]
pub struct TypeOracle {
    handles: HashSet<String>,
    function_pointers: HashSet<String>,
    structures: HashSet<String>,
    scalars: HashSet<String>,
}

impl TypeOracle {
    /// Build the oracle from a registry dump, folding in platform-defined
    /// types as known scalars.
    pub fn from_schema(schema: &ApiSchema, platform_types: &PlatformTypes) -> Self {
        let mut structures = HashSet::new();
        for feature in &schema.features {
            for s in &feature.structs {
                structures.insert(s.name.clone());
            }
        }

        let mut scalars: HashSet<String> = schema.scalars.iter().cloned().collect();
        scalars.extend(platform_types.types.iter().cloned());

        Self {
            handles: schema.handles.iter().cloned().collect(),
            function_pointers: schema.function_pointers.iter().cloned().collect(),
            structures,
            scalars,
        }
    }

    pub fn classify(&self, base_type: &str) -> TypeClass {
        if self.structures.contains(base_type) {
            TypeClass::Structure
        } else if self.handles.contains(base_type) {
            TypeClass::Handle
        } else if self.function_pointers.contains(base_type) {
            TypeClass::FunctionPointer
        } else if self.scalars.contains(base_type) || is_builtin_scalar(base_type) {
            TypeClass::Scalar
        } else {
            TypeClass::Unknown
        }
    }

    pub fn is_handle(&self, base_type: &str) -> bool {
        self.classify(base_type) == TypeClass::Handle
    }

    pub fn is_function_pointer(&self, base_type: &str) -> bool {
        self.classify(base_type) == TypeClass::FunctionPointer
    }

    pub fn is_struct(&self, base_type: &str) -> bool {
        self.classify(base_type) == TypeClass::Structure
    }
}

/// C fundamental types that are always known, whether or not the registry
/// dump lists them.
fn is_builtin_scalar(base_type: &str) -> bool {
    matches!(
        base_type,
        "void"
            | "char"
            | "wchar_t"
            | "int"
            | "float"
            | "double"
            | "size_t"
            | "int8_t"
            | "int16_t"
            | "int32_t"
            | "int64_t"
            | "uint8_t"
            | "uint16_t"
            | "uint32_t"
            | "uint64_t"
    )
}

/// Name of the generated wrapper for a structure.
///
/// Shared by the type mapper and the declaration emitter so the names the
/// mapper references are exactly the names the composer declares.
pub fn decoded_wrapper_name(struct_name: &str) -> String {
    format!("Decoded_{struct_name}")
}
