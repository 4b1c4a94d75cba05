use anyhow::Result;
use natives::Runtime;
use std::io::Write;

pub fn list_functions(runtime: &Runtime, out: &mut dyn Write) -> Result<()> {
    for (name, signature) in runtime.table().iter() {
        writeln!(out, "{name}{signature}")?;
    }
    Ok(())
}
