// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 vkcapture project

//! File framing for generated headers.
//!
//! The core emits declaration blocks only; this module wraps them with the
//! include set and namespace markers the framework expects. The blocks are
//! inserted verbatim between the markers.

/// Include directives every decoded-struct header needs.
const INCLUDES: &str = "\
#include <memory>

#include \"vulkan/vulkan.h\"

#include \"util/defines.h\"
#include \"format/pnext_node.h\"
#include \"format/pointer_decoder.h\"
#include \"format/string_array_decoder.h\"
#include \"format/string_decoder.h\"
#include \"format/struct_pointer_decoder.h\"
";

/// Wrap a feature's declaration blocks in its platform guard, if any.
pub fn protect_feature(body: &str, protect: Option<&str>) -> String {
    match protect {
        Some(guard) => format!("#ifdef {guard}\n{body}\n#endif /* {guard} */"),
        None => body.to_string(),
    }
}

/// Assemble the complete generated file around the composed feature bodies.
///
/// `prefix_text` is emitted first when present (license banner etc.).
pub fn frame_file(body: &str, prefix_text: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(prefix) = prefix_text {
        out.push_str(prefix);
        if !prefix.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(INCLUDES);
    out.push('\n');
    out.push_str("VKCAPTURE_BEGIN_NAMESPACE(vkcapture)\n");
    out.push_str("VKCAPTURE_BEGIN_NAMESPACE(format)\n");
    out.push('\n');
    if !body.is_empty() {
        out.push_str(body);
        out.push('\n');
        out.push('\n');
    }
    out.push_str("VKCAPTURE_END_NAMESPACE(format)\n");
    out.push_str("VKCAPTURE_END_NAMESPACE(vkcapture)\n");
    out
}
