use anyhow::{Context, Result};
use natives::{Argument, Runtime};
use std::io::Write;
use values::Value;

/// Turn one command-line word into an argument: `name=literal` is named
/// when `name` is an identifier, anything else is a positional literal.
pub fn parse_argument(word: &str) -> Result<Argument> {
    if let Some((name, literal)) = word.split_once('=') {
        if is_identifier(name) {
            let value = Value::parse_literal(literal)
                .with_context(|| format!("bad value for `{name}`"))?;
            return Ok(Argument::Named(name.to_string(), value));
        }
    }
    let value = Value::parse_literal(word).with_context(|| format!("bad argument `{word}`"))?;
    Ok(Argument::Positional(value))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn call_function(
    runtime: &Runtime,
    name: &str,
    words: &[String],
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let arguments = words
        .iter()
        .map(|w| parse_argument(w))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(function = name, args = arguments.len(), "calling from command line");
    let result = runtime.call(name, arguments)?;

    if json {
        serde_json::to_writer(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{result}")?;
    }
    Ok(())
}
