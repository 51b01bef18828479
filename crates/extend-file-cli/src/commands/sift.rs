//! Sift command implementation.

use extend_file::sift_keys;

use crate::input::{parse_object, read_text};
use crate::output;

pub fn run(
    input: Option<String>,
    known: Vec<String>,
    canonical: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_text(input.as_deref())?;
    let obj = parse_object(&text, "input")?;

    let props: Vec<&str> = known.iter().map(String::as_str).collect();
    let record = sift_keys(obj, &props);
    println!("{}", output::format_record(&record, canonical)?);
    Ok(())
}
