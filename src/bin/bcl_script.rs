//! Run a JSON command script against the cube list engine.
//!
//! Usage: `bcl_script <script.json>`. The output map is printed as JSON on
//! standard output. Exits non-zero when the file cannot be opened or the script
//! fails.

use serde_json::Value;
use std::env;
use std::fs::File;
use std::process;

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: bcl_script <script.json>");
            process::exit(1);
        }
    };

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("Cannot open '{}': {}", path, error);
            process::exit(1);
        }
    };

    let script: Value = match serde_json::from_reader(file) {
        Ok(script) => script,
        Err(error) => {
            eprintln!("Cannot read '{}': {}", path, error);
            process::exit(1);
        }
    };

    match boolcube::script::execute_script(&script) {
        Ok(out) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&Value::Object(out))
                    .expect("Output map is valid JSON.")
            );
        }
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    }
}
