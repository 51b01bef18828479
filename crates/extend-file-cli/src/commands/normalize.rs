//! Normalize command implementation.

use extend_file::{deep_merge, extend_file, FileInput};
use serde_json::{Map, Value};

use crate::input::{parse_json, parse_object, read_text};
use crate::output;

pub fn run(
    input: Option<String>,
    options: Option<String>,
    locals: Option<String>,
    raw: bool,
    canonical: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_text(input.as_deref())?;
    let file = if raw {
        FileInput::Raw(text)
    } else {
        FileInput::from(parse_json(&text)?)
    };

    let mut opts = match options {
        Some(path) => parse_object(&read_text(Some(&path))?, "options")?,
        None => Map::new(),
    };
    if let Some(locals) = locals {
        let locals = parse_object(&locals, "--locals")?;
        tracing::debug!(keys = locals.len(), "using inline locals");
        // Merge into the same source extend_file reads overrides from.
        match opts.get_mut("locals") {
            Some(Value::Object(existing)) => deep_merge(existing, &locals),
            _ => deep_merge(&mut opts, &locals),
        }
    }

    let record = extend_file(file, Some(&opts));
    println!("{}", output::format_record(&record, canonical)?);
    Ok(())
}
