//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a labeled secret, masked unless `show` is set.
pub fn secret(label: &str, value: &str, show: bool) {
    if show {
        field(label, value);
    } else {
        field(label, &mask(value));
    }
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

fn mask(value: &str) -> String {
    let len = value.chars().count();
    // Short values would be fully revealed by the prefix
    let prefix: String = if len > 12 {
        value.chars().take(6).collect()
    } else {
        String::new()
    };
    format!("{}… ({} chars)", prefix, len)
}
