// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 vkcapture project

use std::fs;
use vkcapture_gen::generator::{DecodedStructGenerator, GeneratorOptions};

const REGISTRY: &str = r#"{
    "features": [
        {
            "name": "VK_VERSION_1_0",
            "structs": [
                {
                    "name": "VkApplicationInfo",
                    "members": [
                        { "name": "sType", "base_type": "VkStructureType" },
                        { "name": "pNext", "base_type": "void", "is_pointer": true, "is_const": true },
                        { "name": "pApplicationName", "base_type": "char", "is_pointer": true, "is_const": true },
                        { "name": "applicationVersion", "base_type": "uint32_t" }
                    ]
                },
                {
                    "name": "VkSubmitInfo",
                    "members": [
                        { "name": "pNext", "base_type": "void", "is_pointer": true, "is_const": true },
                        { "name": "pCommandBuffers", "base_type": "VkCommandBuffer", "is_pointer": true, "is_array": true }
                    ]
                }
            ]
        },
        {
            "name": "VK_KHR_win32_surface",
            "protect": "VK_USE_PLATFORM_WIN32_KHR",
            "structs": [
                {
                    "name": "VkWin32SurfaceCreateInfoKHR",
                    "members": [
                        { "name": "hwnd", "base_type": "HWND", "is_pointer": false }
                    ]
                }
            ]
        },
        { "name": "VK_EXT_empty_extension", "structs": [] }
    ],
    "handles": ["VkCommandBuffer"],
    "scalars": ["VkStructureType"]
}"#;

#[test]
fn test_generates_framed_header_from_registry() {
    let dir = tempfile::tempdir().unwrap();
    let registry_path = dir.path().join("vk_registry.json");
    fs::write(&registry_path, REGISTRY).unwrap();

    let platform_path = dir.path().join("platform_types.json");
    fs::write(&platform_path, r#"{ "types": ["HWND"] }"#).unwrap();

    let output_path = dir.path().join("generated_decoded_struct_types.h");
    let options = GeneratorOptions {
        platform_types: Some(platform_path),
        output: output_path.clone(),
        ..Default::default()
    };

    let generator = DecodedStructGenerator::new(registry_path, options).unwrap();
    let report = generator.generate().unwrap();

    assert_eq!(
        report.features_generated,
        ["VK_VERSION_1_0", "VK_KHR_win32_surface"]
    );
    assert_eq!(report.structs_generated, 3);

    let header = fs::read_to_string(&output_path).unwrap();

    // Framing around the verbatim declaration blocks.
    assert!(header.starts_with("#include <memory>"));
    assert!(header.contains("VKCAPTURE_BEGIN_NAMESPACE(format)"));
    assert!(header.ends_with("VKCAPTURE_END_NAMESPACE(vkcapture)\n"));

    // Core declarations.
    assert!(header.contains("struct Decoded_VkApplicationInfo"));
    assert!(header.contains("using struct_type = VkApplicationInfo;"));
    assert!(header.contains("std::unique_ptr<PNextNode> pNext;"));
    assert!(header.contains("StringDecoder pApplicationName;"));
    assert!(header.contains("PointerDecoder<VkCommandBuffer> pCommandBuffers;"));
    // By-value scalars stay behind the raw pointer.
    assert!(!header.contains("applicationVersion;"));

    // Protected feature is wrapped in its guard; HWND counts as a scalar by
    // value, so the protected struct has no member declarations.
    assert!(header.contains("#ifdef VK_USE_PLATFORM_WIN32_KHR"));
    assert!(header.contains("#endif /* VK_USE_PLATFORM_WIN32_KHR */"));
    assert!(!header.contains("hwnd;"));

    // The empty extension contributes nothing.
    assert!(!header.contains("VK_EXT_empty_extension"));
}

#[test]
fn test_rendering_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let registry_path = dir.path().join("vk_registry.json");
    fs::write(&registry_path, REGISTRY).unwrap();

    let options = GeneratorOptions {
        output: dir.path().join("out.h"),
        ..Default::default()
    };
    let generator = DecodedStructGenerator::new(registry_path, options).unwrap();

    assert_eq!(generator.render().unwrap(), generator.render().unwrap());
}

#[test]
fn test_blacklisted_structs_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let registry_path = dir.path().join("vk_registry.json");
    fs::write(&registry_path, REGISTRY).unwrap();

    let blacklist_path = dir.path().join("blacklist.json");
    fs::write(&blacklist_path, r#"{ "structures": ["VkSubmitInfo"] }"#).unwrap();

    let options = GeneratorOptions {
        blacklist: Some(blacklist_path),
        output: dir.path().join("out.h"),
        ..Default::default()
    };
    let generator = DecodedStructGenerator::new(registry_path, options).unwrap();

    let header = generator.render().unwrap();
    assert!(header.contains("struct Decoded_VkApplicationInfo"));
    assert!(!header.contains("struct Decoded_VkSubmitInfo"));
}
