// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 vkcapture project

//! Decoded structure wrapper declarations.
//!
//! For every structure in a feature, the capture/replay framework needs a
//! `Decoded_*` companion type holding the members that must be separately
//! reconstructed from a trace (pointers, arrays, handles, nested structs).
//! Plain by-value scalars stay reachable through the wrapper's raw `value`
//! pointer and get no declaration of their own.

use crate::oracle::{decoded_wrapper_name, TypeClass, TypeOracle};
use crate::schema::{Feature, MemberDescriptor, StructDescriptor};
use thiserror::Error;

/// The extension-chain member every extensible Vulkan structure carries.
pub const PNEXT_MEMBER: &str = "pNext";

/// Type mapping errors.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("cannot map `{structure}::{member}`: base type `{base_type}` is not a known structure, handle, function pointer, or scalar")]
    UnmappedType {
        structure: String,
        member: String,
        base_type: String,
    },
}

/// Does this member need its own decoded-storage declaration?
///
/// Anything passed by pointer or array, and any handle, function pointer or
/// nested structure, is reconstructed separately. Everything else is read
/// straight out of the raw structure.
pub fn needs_declaration(oracle: &TypeOracle, member: &MemberDescriptor) -> bool {
    member.is_pointer
        || member.is_array
        || oracle.is_function_pointer(&member.base_type)
        || oracle.is_handle(&member.base_type)
        || oracle.is_struct(&member.base_type)
}

type MappingRule = fn(&TypeOracle, &MemberDescriptor) -> Option<String>;

/// Storage type resolution rules, evaluated top to bottom; the first match
/// wins. A member can satisfy more than one shape category (a pointer to a
/// structure is both a pointer and a structure reference), so the order here
/// is part of the contract.
const MAPPING_RULES: &[MappingRule] = &[
    map_structure,
    map_string,
    map_pointer,
    map_by_value_handle,
];

/// Nested structures, whether by pointer, array, or value, decode through
/// the structure-pointer decoder parameterized over the pointee's own
/// wrapper. The schema's structure reference graph is acyclic, so the
/// recursion bottoms out.
fn map_structure(oracle: &TypeOracle, member: &MemberDescriptor) -> Option<String> {
    if oracle.is_struct(&member.base_type) {
        Some(format!(
            "StructPointerDecoder<{}>",
            decoded_wrapper_name(&member.base_type)
        ))
    } else {
        None
    }
}

/// Null-terminated text. Pointer-and-array means an array of strings.
fn map_string(_oracle: &TypeOracle, member: &MemberDescriptor) -> Option<String> {
    let decoder = match member.base_type.as_str() {
        "char" if member.is_pointer && member.is_array => "StringArrayDecoder",
        "char" => "StringDecoder",
        "wchar_t" if member.is_pointer && member.is_array => "WStringArrayDecoder",
        "wchar_t" => "WStringDecoder",
        _ => return None,
    };
    Some(decoder.to_string())
}

/// Pointers and arrays of scalar, handle, or function-pointer data use the
/// generic pointer decoder. `void` data is decoded as raw bytes.
fn map_pointer(oracle: &TypeOracle, member: &MemberDescriptor) -> Option<String> {
    if !member.is_pointer && !member.is_array {
        return None;
    }
    match oracle.classify(&member.base_type) {
        TypeClass::Scalar if member.base_type == "void" => {
            Some("PointerDecoder<uint8_t>".to_string())
        }
        TypeClass::Scalar | TypeClass::Handle | TypeClass::FunctionPointer => {
            Some(format!("PointerDecoder<{}>", member.base_type))
        }
        TypeClass::Structure | TypeClass::Unknown => None,
    }
}

/// Handles and function pointers passed by value are stored as themselves.
fn map_by_value_handle(oracle: &TypeOracle, member: &MemberDescriptor) -> Option<String> {
    if oracle.is_handle(&member.base_type) || oracle.is_function_pointer(&member.base_type) {
        Some(member.base_type.clone())
    } else {
        None
    }
}

/// Resolve the decoded storage type for a member that needs a declaration.
///
/// A base type no rule recognizes is a schema inconsistency and aborts
/// generation for the enclosing structure; emitting a placeholder would
/// produce malformed code.
pub fn decoded_type(
    oracle: &TypeOracle,
    structure: &str,
    member: &MemberDescriptor,
) -> Result<String, GenError> {
    for rule in MAPPING_RULES {
        if let Some(type_name) = rule(oracle, member) {
            return Ok(type_name);
        }
    }
    Err(GenError::UnmappedType {
        structure: structure.to_string(),
        member: member.name.clone(),
        base_type: member.base_type.clone(),
    })
}

/// Emit the full wrapper declaration for one structure.
///
/// Emission is all-or-nothing: a mapping error on any member yields no
/// output for the structure. The `pNext` member always gets the fixed
/// owning chain declaration, whatever the classifier would say about it.
pub fn emit_decoded_struct(
    oracle: &TypeOracle,
    desc: &StructDescriptor,
) -> Result<String, GenError> {
    let mut decls = String::new();
    for member in &desc.members {
        if member.name == PNEXT_MEMBER {
            decls.push_str("    std::unique_ptr<PNextNode> pNext;\n");
        } else if needs_declaration(oracle, member) {
            let type_name = decoded_type(oracle, &desc.name, member)?;
            decls.push_str(&format!("    {} {};\n", type_name, member.name));
        }
    }

    let mut body = format!("struct {}\n", decoded_wrapper_name(&desc.name));
    body.push_str("{\n");
    body.push_str(&format!("    using struct_type = {};\n", desc.name));
    body.push('\n');
    body.push_str(&format!("    {}* value{{ nullptr }};\n", desc.name));
    if !decls.is_empty() {
        body.push('\n');
        body.push_str(&decls);
    }
    body.push_str("};");
    Ok(body)
}

/// Emit one declaration block per structure in the feature, separated by a
/// single blank line. A feature with no structures contributes no content
/// at all, which is distinct from contributing an empty block.
pub fn compose_feature(oracle: &TypeOracle, feature: &Feature) -> Result<Option<String>, GenError> {
    if feature.structs.is_empty() {
        return Ok(None);
    }

    let mut blocks = Vec::with_capacity(feature.structs.len());
    for desc in &feature.structs {
        blocks.push(emit_decoded_struct(oracle, desc)?);
    }
    Ok(Some(blocks.join("\n\n")))
}
