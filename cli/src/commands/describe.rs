use anyhow::{bail, Result};
use natives::Runtime;
use serde::Serialize;
use std::io::Write;
use values::{Kind, Value};

#[derive(Serialize)]
struct ParameterRow<'a> {
    index: usize,
    name: &'a str,
    kind: Kind,
    default: Option<&'a Value>,
}

pub fn describe_function(
    runtime: &Runtime,
    name: &str,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(signature) = runtime.lookup(name) else {
        bail!("unknown function `{name}`");
    };

    let rows: Vec<ParameterRow<'_>> = signature
        .parameters()
        .enumerate()
        .map(|(index, p)| ParameterRow {
            index,
            name: p.name(),
            kind: p.kind(),
            default: p.default(),
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{name}{signature}")?;
    for row in &rows {
        let default = match row.default {
            Some(value) => format!("= {value}"),
            None => "(required)".to_string(),
        };
        writeln!(
            out,
            "  {} {:<12} {:<10} {default}",
            row.index, row.name, row.kind
        )?;
    }
    Ok(())
}
