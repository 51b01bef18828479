//! Keys command implementation.

use extend_file::CANONICAL_KEYS;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    for key in CANONICAL_KEYS {
        println!("{}", key);
    }
    Ok(())
}
