//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use squeak_core::ApiResult;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a `{data, error}` envelope, failing if it carries an error.
pub fn api_result<T: Serialize>(result: ApiResult<T>) -> Result<()> {
    json_pretty(&result)?;
    result.into_result()?;
    Ok(())
}
