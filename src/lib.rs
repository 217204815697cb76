// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 vkcapture project

//! Code generation for the capture/replay framework's decoded Vulkan
//! structure wrappers.

pub mod codegen;
pub mod framer;
pub mod generator;
pub mod oracle;
pub mod schema;
