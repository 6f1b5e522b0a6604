//! CLI tool for ssheet - applies filters to a grid and outputs JSON
//!
//! Usage:
//!   ssheet_cli <contents.json>                          # Grid JSON to stdout
//!   ssheet_cli <contents.json> --row-filter 0_0         # Toggle a row filter
//!   ssheet_cli <contents.json> --column-filter 1_2 -o out.json
//!
//! `contents.json` is an array of arrays of strings, one inner array per row.
//! Toggles are applied in the order given. Set `RUST_LOG=debug` to trace them.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use ssheet::{FilterAxis, Grid, GridConfig, GridSession};

const USAGE: &str =
    "Usage: ssheet_cli <contents.json> [--row-filter ID]... [--column-filter ID]... [-o output.json]";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let mut toggles = Vec::new();
    let mut output_path = None;
    let mut rest = args[2..].iter();
    while let Some(flag) = rest.next() {
        let Some(value) = rest.next() else {
            eprintln!("Missing value for {flag}\n{USAGE}");
            std::process::exit(1);
        };
        match flag.as_str() {
            "--row-filter" => toggles.push((FilterAxis::Row, value.clone())),
            "--column-filter" => toggles.push((FilterAxis::Column, value.clone())),
            "-o" => output_path = Some(value.clone()),
            _ => {
                eprintln!("Unknown argument {flag}\n{USAGE}");
                std::process::exit(1);
            }
        }
    }

    // Read input file
    let data = match fs::read_to_string(input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    // Build grid
    let contents: Vec<Vec<String>> = match serde_json::from_str(&data) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error parsing {}: {}", input_path, e);
            std::process::exit(1);
        }
    };
    let mut session = match Grid::from_contents(contents)
        .and_then(|grid| GridSession::with_grid(GridConfig::default(), grid))
    {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error building grid: {}", e);
            std::process::exit(1);
        }
    };

    // Apply filters
    for (axis, id) in &toggles {
        if let Err(e) = session.toggle_filter(*axis, id) {
            eprintln!("Error toggling {:?} filter on {}: {}", axis, id, e);
            std::process::exit(1);
        }
    }

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(session.grid()) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
