/// CLI: reads a sample JSON document from stdin or a file, emits generated
/// source to stdout.
///
/// Usage:
///   json-scaffold --generator ts     < sample.json > types.ts
///   json-scaffold --generator object < sample.json > empty.js
///   json-scaffold --generator form   < sample.json > Form.tsx
///   json-scaffold --generator ts sample.json --name Payload
use std::io::Read;

use json_scaffold::emit_form::{FormConfig, FormGenerator};
use json_scaffold::emit_object::{EmptyObjectConfig, EmptyObjectGenerator};
use json_scaffold::emit_ts::{TsInterfaceConfig, TsInterfaceGenerator};
use json_scaffold::transform::{filter_tree, is_vacuous};
use json_scaffold::writer::Newline;
use json_scaffold::{Generator, JsonParser};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut generator = "ts";
    let mut name: Option<String> = None;
    let mut trim = false;
    let mut crlf = false;
    let mut report = false;
    let mut file_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--generator" | "-g" => {
                i += 1;
                if i < args.len() {
                    generator = match args[i].as_str() {
                        "ts" | "typescript" => "ts",
                        "object" | "obj" => "object",
                        "form" | "formik" => "form",
                        other => {
                            eprintln!("Unknown generator: {other}. Use 'ts', 'object', or 'form'.");
                            std::process::exit(1);
                        }
                    };
                }
            }
            "--name" | "-n" => {
                i += 1;
                if i < args.len() {
                    name = Some(args[i].clone());
                }
            }
            "--trim" => trim = true,
            "--crlf" => crlf = true,
            "--report" => report = true,
            "--help" | "-h" => {
                eprintln!("Usage: json-scaffold [--generator ts|object|form] [--name NAME] [--trim] [--crlf] [--report] [sample.json]");
                eprintln!("  Reads a sample JSON document from file or stdin, emits code to stdout.");
                eprintln!("  --trim    prune empty objects and untyped arrays before generating");
                eprintln!("  --crlf    emit CRLF line endings");
                eprintln!("  --report  print skipped-field diagnostics as JSON on stderr");
                std::process::exit(0);
            }
            path => {
                file_path = Some(path);
            }
        }
        i += 1;
    }

    let input = match file_path {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Cannot read {path}: {e}");
            std::process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| {
                    eprintln!("Cannot read stdin: {e}");
                    std::process::exit(1);
                });
            buf
        }
    };

    let inference = JsonParser::default().parse(&input).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    for skipped in &inference.skipped {
        eprintln!("warning: skipped field {} ({})", skipped.field, skipped.reason);
    }
    if report {
        let diagnostics =
            serde_json::to_string(&inference.skipped).unwrap_or_else(|_| "[]".to_string());
        eprintln!("{diagnostics}");
    }

    // The form generator prunes internally; for the others --trim applies
    // the standard predicate up front.
    let tree = if trim && generator != "form" {
        filter_tree(&inference.tree, is_vacuous)
    } else {
        inference.tree
    };

    let newline = if crlf { Newline::Crlf } else { Newline::Lf };

    let result = match generator {
        "ts" => {
            let mut config = TsInterfaceConfig {
                newline,
                ..Default::default()
            };
            if let Some(name) = name {
                config.name = name;
            }
            TsInterfaceGenerator::new(config).generate(&tree, 0)
        }
        "object" => {
            let mut config = EmptyObjectConfig {
                newline,
                ..Default::default()
            };
            if let Some(name) = name {
                config.name = name;
            }
            EmptyObjectGenerator::new(config).generate(&tree, 0)
        }
        "form" => {
            let mut config = FormConfig {
                newline,
                ..Default::default()
            };
            if let Some(name) = name {
                config.name = name;
            }
            FormGenerator::new(config).generate(&tree, 0)
        }
        _ => unreachable!(),
    };

    let code = result.unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    println!("{code}");
}
