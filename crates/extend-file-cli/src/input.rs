//! Reading command input from files or stdin.

use serde_json::{Map, Value};
use std::io::{self, Read};

/// Reads text from `path`, or stdin when no path is given.
pub fn read_text(path: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Parses `text` as JSON.
pub fn parse_json(text: &str) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::from_str(text).map_err(|e| format!("Invalid JSON: {}", e))?)
}

/// Parses `text` as a JSON object; `what` names it in errors.
pub fn parse_object(text: &str, what: &str) -> Result<Map<String, Value>, Box<dyn std::error::Error>> {
    match parse_json(text)? {
        Value::Object(map) => Ok(map),
        _ => Err(format!("{} must be a JSON object", what).into()),
    }
}
