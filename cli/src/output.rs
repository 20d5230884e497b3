//! Output formatting for CLI commands.

use serde::Serialize;
use serde_json::Value;

/// Output format options.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One compact line per result; bare strings are printed unquoted
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Prints `data` in the selected format.
pub fn print_output<T: Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
        OutputFormat::Text => match serde_json::to_value(data)? {
            Value::String(s) => println!("{s}"),
            Value::Null => println!("none"),
            other => println!("{other}"),
        },
    }
    Ok(())
}

/// Prints a labelled result, as `demo` does for each script it replays.
pub fn print_labelled<T: Serialize>(
    label: &str,
    data: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let entry = serde_json::json!({ "name": label, "result": data });
            println!("{}", serde_json::to_string(&entry)?);
        }
        OutputFormat::Text => {
            println!("{label}: {}", serde_json::to_value(data)?);
        }
    }
    Ok(())
}
