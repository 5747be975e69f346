//! Reading inputs and writing record files

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;

/// Read a whole input, from stdin when `path` is `None` or `-`
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        },
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        },
    }
}

/// Write one line per item, each terminated by a newline
pub fn write_lines<I>(path: &Path, lines: I) -> anyhow::Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
