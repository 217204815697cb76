// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 vkcapture project

pub mod decoded_structs;

pub use decoded_structs::{
    compose_feature, decoded_type, emit_decoded_struct, needs_declaration, GenError, PNEXT_MEMBER,
};
