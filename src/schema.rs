// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 vkcapture project

//! Schema model for one generation pass.
//!
//! The registry dump is a pre-digested JSON view of the API specification:
//! structures and their members grouped by feature (core version or
//! extension), plus the name sets the type oracle is built from. The
//! generator never parses the API XML itself.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// One structure field as declared in the API specification.
///
/// Member order inside a structure is the declared order and must survive
/// all the way into the emitted declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberDescriptor {
    pub name: String,
    pub base_type: String,
    #[serde(default)]
    pub is_pointer: bool,
    #[serde(default)]
    pub is_array: bool,
    /// Informational only; const-ness does not affect decoded storage.
    #[serde(default)]
    pub is_const: bool,
}

impl MemberDescriptor {
    pub fn new(name: impl Into<String>, base_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type: base_type.into(),
            is_pointer: false,
            is_array: false,
            is_const: false,
        }
    }

    #[must_use]
    pub fn pointer(mut self) -> Self {
        self.is_pointer = true;
        self
    }

    #[must_use]
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    #[must_use]
    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }
}

/// One structure type active in a feature.
#[derive(Debug, Clone, Deserialize)]
pub struct StructDescriptor {
    pub name: String,
    #[serde(default)]
    pub members: Vec<MemberDescriptor>,
}

impl StructDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_members(mut self, members: Vec<MemberDescriptor>) -> Self {
        self.members = members;
        self
    }
}

/// A core API version or extension, with the structures it introduces.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub name: String,
    /// Preprocessor guard symbol for platform-protected features
    /// (e.g. `VK_USE_PLATFORM_WIN32_KHR`).
    #[serde(default)]
    pub protect: Option<String>,
    #[serde(default)]
    pub structs: Vec<StructDescriptor>,
}

/// The full registry dump: every feature plus the classification name sets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSchema {
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub handles: Vec<String>,
    #[serde(default)]
    pub function_pointers: Vec<String>,
    /// Scalar base types: C fundamentals, enums, flags, `void`.
    #[serde(default)]
    pub scalars: Vec<String>,
}

/// Structures to exclude from generation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Blacklist {
    #[serde(default)]
    pub structures: Vec<String>,
}

/// Platform-defined types (WIN32, XCB, ...) treated as known scalars.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformTypes {
    #[serde(default)]
    pub types: Vec<String>,
}

/// Schema loading errors.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, SchemaError> {
    let text = fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SchemaError::Parse {
        path: path.display().to_string(),
        source,
    })
}

impl ApiSchema {
    /// Load the registry dump from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        load_json(path)
    }

    /// Remove blacklisted structures from every feature. Feature and member
    /// ordering is untouched.
    pub fn apply_blacklist(&mut self, blacklist: &Blacklist) {
        if blacklist.structures.is_empty() {
            return;
        }
        for feature in &mut self.features {
            feature
                .structs
                .retain(|s| !blacklist.structures.iter().any(|b| b == &s.name));
        }
    }
}

impl Blacklist {
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        load_json(path)
    }
}

impl PlatformTypes {
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        load_json(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_parses_from_json() {
        let schema: ApiSchema = serde_json::from_str(
            r#"{
                "features": [{
                    "name": "VK_VERSION_1_0",
                    "structs": [{
                        "name": "VkExtent2D",
                        "members": [
                            { "name": "width", "base_type": "uint32_t" },
                            { "name": "height", "base_type": "uint32_t" }
                        ]
                    }]
                }],
                "handles": ["VkDevice"],
                "scalars": ["uint32_t"]
            }"#,
        )
        .unwrap();

        assert_eq!(schema.features.len(), 1);
        let s = &schema.features[0].structs[0];
        assert_eq!(s.name, "VkExtent2D");
        assert_eq!(s.members[0].name, "width");
        assert!(!s.members[0].is_pointer);
    }

    #[test]
    fn test_blacklist_removes_structs_preserving_order() {
        let mut schema = ApiSchema {
            features: vec![Feature {
                name: "VK_VERSION_1_0".into(),
                protect: None,
                structs: vec![
                    StructDescriptor::new("VkA"),
                    StructDescriptor::new("VkB"),
                    StructDescriptor::new("VkC"),
                ],
            }],
            ..Default::default()
        };

        schema.apply_blacklist(&Blacklist {
            structures: vec!["VkB".into()],
        });

        let names: Vec<&str> = schema.features[0]
            .structs
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["VkA", "VkC"]);
    }
}
