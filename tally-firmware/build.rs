//! Build script for tally-firmware
//!
//! - Passes the cortex-m-rt and defmt linker scripts
//! - Validates tally.toml at compile time
//! - Generates the tunables constant from it

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let tunables = validate_config();
    write_tunables(&tunables);
}

/// Linker scripts; memory.x comes from embassy-stm32's `memory-x` feature
fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Values read from tally.toml
struct Tunables {
    debounce_samples: i64,
    dim_threshold: i64,
    off_threshold: i64,
    digit_on_us: i64,
    dim_off_us: i64,
    wake_settle_ms: i64,
    self_test_hold_ms: i64,
}

/// Validate tally.toml and return its values
fn validate_config() -> Tunables {
    println!("cargo:rerun-if-changed=tally.toml");

    let config_path = Path::new("tally.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: tally.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a tally.toml tunables file in the         ║\n\
            ║  tally-firmware directory.                                       ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read tally.toml                                ║\n\
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
                ║  ERROR: Invalid TOML syntax in tally.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let mut field = |section: &str, key: &str, min: i64, max: i64| -> i64 {
        match config.get(section).and_then(|s| s.get(key)) {
            Some(toml::Value::Integer(v)) if (min..=max).contains(v) => *v,
            Some(toml::Value::Integer(_)) => {
                errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
                0
            }
            Some(_) => {
                errors.push(format!("[{}] {} must be an integer", section, key));
                0
            }
            None => {
                errors.push(format!("[{}] missing '{}'", section, key));
                0
            }
        }
    };

    let tunables = Tunables {
        debounce_samples: field("debounce", "samples", 1, u16::MAX as i64),
        dim_threshold: field("power", "dim_after", 1, u32::MAX as i64),
        off_threshold: field("power", "off_after", 1, u32::MAX as i64),
        digit_on_us: field("display", "digit_on_us", 1, 10_000),
        dim_off_us: field("display", "dim_off_us", 0, 100_000),
        self_test_hold_ms: field("display", "self_test_hold_ms", 0, 10_000),
        wake_settle_ms: field("wake", "settle_ms", 0, 10_000),
    };

    if errors.is_empty() && tunables.dim_threshold >= tunables.off_threshold {
        errors.push("[power] dim_after must be below off_after".to_string());
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in tally.toml                             ║\n\
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

    println!("cargo:warning=tally.toml validated successfully");
    tunables
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `$OUT_DIR/tunables.rs`
fn write_tunables(t: &Tunables) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    let source = format!(
        "/// Tunables compiled from tally.toml\n\
         pub const TUNABLES: Tunables = Tunables {{\n    \
             debounce_samples: {},\n    \
             dim_threshold: {},\n    \
             off_threshold: {},\n    \
             digit_on_us: {},\n    \
             dim_off_us: {},\n    \
             wake_settle_ms: {},\n    \
             self_test_hold_ms: {},\n\
         }};\n",
        t.debounce_samples,
        t.dim_threshold,
        t.off_threshold,
        t.digit_on_us,
        t.dim_off_us,
        t.wake_settle_ms,
        t.self_test_hold_ms,
    );

    fs::write(out_dir.join("tunables.rs"), source).expect("write tunables.rs");
}
