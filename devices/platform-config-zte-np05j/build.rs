//! Build script for platform-config-zte-np05j
//!
//! - Validates config_map.toml at compile time
//! - Generates the constant entry array (terminator appended)

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Reserved name of the final entry
const TERMINATOR_NAME: &str = "Terminator";

/// Reserved value of the final entry
const TERMINATOR_VALUE: u64 = 0xFFFF_FFFF;

/// Longest name that still fits the C descriptor with its NUL
const MAX_NAME_LEN: usize = 63;

/// A validated table entry
struct Entry {
    name: String,
    value: u64,
}

fn main() {
    let entries = validate_config();
    generate_table(&entries);
}

/// Validate config_map.toml and return its entries in authoring order
fn validate_config() -> Vec<Entry> {
    println!("cargo:rerun-if-changed=config_map.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let config_path = Path::new("config_map.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: config_map.toml not found!                               ║\n\
            ║                                                                  ║\n\
            ║  The device crate requires a config_map.toml file listing        ║\n\
            ║  [[entry]] tables with a 'name' and a 'value'.                   ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read config_map.toml                           ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in config_map.toml                   ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let entries = validate_entries(&config);

    println!(
        "cargo:warning=config_map.toml validated successfully ({} entries)",
        entries.len()
    );
    entries
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validate every [[entry]] table
fn validate_entries(config: &toml::Value) -> Vec<Entry> {
    let tables = match config.get("entry") {
        Some(toml::Value::Array(tables)) => tables,
        Some(_) => report_errors(&["'entry' must be an array of tables ([[entry]])".to_string()]),
        None => report_errors(&["Missing [[entry]] tables - at least one entry is required".to_string()]),
    };

    let mut errors = Vec::new();
    let mut entries: Vec<Entry> = Vec::new();

    for (i, table) in tables.iter().enumerate() {
        let table = match table.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("entry {} must be a table", i));
                continue;
            }
        };

        let name = match table.get("name") {
            Some(toml::Value::String(name)) => name,
            Some(_) => {
                errors.push(format!("entry {} 'name' must be a string", i));
                continue;
            }
            None => {
                errors.push(format!("entry {} missing 'name'", i));
                continue;
            }
        };

        if name.is_empty() {
            errors.push(format!("entry {} has an empty name", i));
        } else if !name.is_ascii() {
            errors.push(format!("entry {} '{}' is not ASCII", i, name));
        } else if name.len() > MAX_NAME_LEN {
            errors.push(format!("entry '{}' name longer than {} bytes", name, MAX_NAME_LEN));
        }

        if name == TERMINATOR_NAME {
            errors.push(format!("entry {} uses reserved name '{}'", i, TERMINATOR_NAME));
        }

        if let Some(first) = entries.iter().position(|e| &e.name == name) {
            errors.push(format!("entry {} duplicates '{}' (entry {})", i, name, first));
        }

        for key in table.keys() {
            if key != "name" && key != "value" {
                errors.push(format!("entry '{}' has unknown key '{}'", name, key));
            }
        }

        let value = match table.get("value") {
            Some(toml::Value::Integer(value)) if *value >= 0 => *value as u64,
            Some(toml::Value::Integer(_)) => {
                errors.push(format!("entry '{}' value must not be negative", name));
                continue;
            }
            Some(_) => {
                errors.push(format!("entry '{}' value must be an integer", name));
                continue;
            }
            None => {
                errors.push(format!("entry '{}' missing 'value'", name));
                continue;
            }
        };

        if value == TERMINATOR_VALUE {
            errors.push(format!("entry '{}' uses reserved value 0xFFFFFFFF", name));
        }

        entries.push(Entry {
            name: name.clone(),
            value,
        });
    }

    if !errors.is_empty() {
        report_errors(&errors);
    }

    entries
}

/// Abort the build with a boxed list of errors
fn report_errors(errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: Invalid entry in config_map.toml                         ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Write the entry array to $OUT_DIR/config_map.rs
fn generate_table(entries: &[Entry]) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    let mut code = String::new();
    code.push_str("// Generated by build.rs from config_map.toml. Do not edit.\n\n");
    writeln!(
        code,
        "pub(crate) const ENTRIES: [ConfigurationEntry; {}] = [",
        entries.len() + 1
    )
    .unwrap();
    for entry in entries {
        writeln!(
            code,
            "    ConfigurationEntry::new({:?}, {:#X}),",
            entry.name, entry.value
        )
        .unwrap();
    }
    code.push_str("    TERMINATOR,\n];\n");

    fs::write(out_dir.join("config_map.rs"), code).expect("failed to write config_map.rs");
}
