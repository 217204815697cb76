// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 vkcapture project

use std::env;
use std::path::PathBuf;
use vkcapture_gen::generator::{DecodedStructGenerator, GeneratorOptions};

fn main() {
    // Initialize tracing for diagnostics
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "decoded-structs" => {
            if let Err(e) = generate_decoded_structs(&args[2..]) {
                eprintln!("[ERROR] {}", e);
                std::process::exit(1);
            }
        }
        "--help" | "-h" | "help" => {
            print_help();
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_help();
            std::process::exit(1);
        }
    }
}

fn generate_decoded_structs(args: &[String]) -> anyhow::Result<()> {
    let mut registry: Option<PathBuf> = None;
    let mut options = GeneratorOptions {
        output: PathBuf::from("generated_decoded_struct_types.h"),
        ..Default::default()
    };

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--blacklist" => {
                options.blacklist = Some(required_value(&mut it, "--blacklist")?.into());
            }
            "--platform-types" => {
                options.platform_types = Some(required_value(&mut it, "--platform-types")?.into());
            }
            "--output" | "-o" => {
                options.output = required_value(&mut it, "--output")?.into();
            }
            "--prefix-file" => {
                let path: PathBuf = required_value(&mut it, "--prefix-file")?.into();
                let text = std::fs::read_to_string(&path)
                    .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
                options.prefix_text = Some(text);
            }
            other if registry.is_none() && !other.starts_with('-') => {
                registry = Some(other.into());
            }
            other => anyhow::bail!("unexpected argument: {}", other),
        }
    }

    let registry = registry.ok_or_else(|| anyhow::anyhow!("missing <registry.json> argument"))?;

    tracing::info!("Initializing decoded struct generator");
    let generator = DecodedStructGenerator::new(registry, options)?;

    tracing::info!("Starting generation");
    let report = generator.generate()?;

    report.summary();

    Ok(())
}

fn required_value<'a>(
    it: &mut std::slice::Iter<'a, String>,
    flag: &str,
) -> anyhow::Result<&'a str> {
    it.next()
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("{} requires a value", flag))
}

fn print_help() {
    println!("vkcapture-gen v0.3");
    println!();
    println!("USAGE:");
    println!("    vkcapture-gen <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    decoded-structs <registry.json>  Generate decoded struct wrapper declarations");
    println!("    help                             Print this help message");
    println!();
    println!("OPTIONS (decoded-structs):");
    println!("    --blacklist <file>        JSON file listing structures to skip");
    println!("    --platform-types <file>   JSON file listing platform-defined types");
    println!("    --output, -o <file>       Output header path");
    println!("    --prefix-file <file>      File emitted verbatim ahead of the includes");
    println!();
    println!("EXAMPLES:");
    println!("    vkcapture-gen decoded-structs vk_registry.json -o decoded_struct_types.h");
    println!();
}
