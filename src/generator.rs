// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 vkcapture project

//! Decoded-struct header generator.
//!
//! Loads the registry dump and option files, runs one composition pass over
//! every feature, and writes the framed header. Rendering is pure; all file
//! I/O happens here at the boundary.

use crate::codegen::{compose_feature, GenError};
use crate::framer::{frame_file, protect_feature};
use crate::oracle::TypeOracle;
use crate::schema::{ApiSchema, Blacklist, PlatformTypes};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Generator options, resolved from the command line.
#[derive(Debug, Default)]
pub struct GeneratorOptions {
    /// JSON file listing structures to ignore.
    pub blacklist: Option<PathBuf>,
    /// JSON file listing platform (WIN32, XCB, ...) defined types.
    pub platform_types: Option<PathBuf>,
    /// Output path for the generated header.
    pub output: PathBuf,
    /// Text emitted ahead of the includes (license banner).
    pub prefix_text: Option<String>,
}

/// Generator state for one run.
pub struct DecodedStructGenerator {
    schema: ApiSchema,
    oracle: TypeOracle,
    output: PathBuf,
    prefix_text: Option<String>,
}

impl DecodedStructGenerator {
    /// Load the registry and option files and build the type oracle.
    pub fn new(registry: PathBuf, options: GeneratorOptions) -> Result<Self> {
        tracing::info!("Loading registry from: {:?}", registry);
        let mut schema = ApiSchema::load(&registry).context("Failed to load registry dump")?;

        if let Some(path) = &options.blacklist {
            tracing::info!("Loading blacklist: {:?}", path);
            let blacklist = Blacklist::load(path).context("Failed to load blacklist")?;
            schema.apply_blacklist(&blacklist);
        }

        let platform_types = match &options.platform_types {
            Some(path) => {
                tracing::info!("Loading platform types: {:?}", path);
                PlatformTypes::load(path).context("Failed to load platform types")?
            }
            None => PlatformTypes::default(),
        };

        let oracle = TypeOracle::from_schema(&schema, &platform_types);

        Ok(Self {
            schema,
            oracle,
            output: options.output,
            prefix_text: options.prefix_text,
        })
    }

    /// Render the complete header contents without touching the filesystem.
    ///
    /// Features contributing no structures are skipped entirely. Any mapping
    /// error aborts the whole run; no partial header is produced.
    pub fn render(&self) -> Result<String, GenError> {
        let mut chunks = Vec::new();
        for feature in &self.schema.features {
            if let Some(body) = compose_feature(&self.oracle, feature)? {
                chunks.push(protect_feature(&body, feature.protect.as_deref()));
            }
        }
        Ok(frame_file(&chunks.join("\n\n"), self.prefix_text.as_deref()))
    }

    /// Render and write the header, returning a run report.
    pub fn generate(&self) -> Result<GenerationReport> {
        let mut report = GenerationReport::new(self.output.clone());
        for feature in &self.schema.features {
            if feature.structs.is_empty() {
                tracing::info!("Feature {} contributes no structures", feature.name);
                continue;
            }
            report.features_generated.push(feature.name.clone());
            report.structs_generated += feature.structs.len();
        }

        let contents = self.render()?;

        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create output directory")?;
            }
        }
        fs::write(&self.output, &contents)
            .context(format!("Failed to write {}", self.output.display()))?;

        tracing::info!(
            "[OK] Generated {} structure wrappers across {} features",
            report.structs_generated,
            report.features_generated.len()
        );
        Ok(report)
    }
}

/// Generation report.
#[derive(Debug)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub features_generated: Vec<String>,
    pub structs_generated: usize,
}

impl GenerationReport {
    pub fn new(output: PathBuf) -> Self {
        Self {
            output,
            features_generated: Vec::new(),
            structs_generated: 0,
        }
    }

    pub fn summary(&self) {
        println!("\n{}", "=".repeat(60));
        println!("  Decoded Struct Generation Report");
        println!("{}", "=".repeat(60));
        println!();
        println!("  [OK] Features:  {}", self.features_generated.len());
        println!("  [OK] Wrappers:  {}", self.structs_generated);
        println!();
        println!("  Written to: {}", self.output.display());
        println!("{}", "=".repeat(60));
    }
}
