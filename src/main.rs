//!
//! explain-traditional
//! -------------------
//! Render a JSON plan dump as a traditional EXPLAIN table.

use std::env;
use std::fs;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use explain_traditional::cli::print_explain;
use explain_traditional::explain::{load_plan, DisplayFlags, TraditionalExplain, VecSink};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--partitions] [--extended] <plan.json>\n\nFlags:\n  --partitions   show the partitions column (also EXPLAIN_PARTITIONS=1)\n  --extended     show the filtered column (also EXPLAIN_FILTERED=1)\n  -h, --help     show this help\n\nThe plan file is a JSON array of steps, e.g.\n  [{{\"id\": 1, \"select_type\": \"simple\", \"table\": \"t1\", \"type\": \"ALL\", \"rows\": 100,\n    \"extra\": [{{\"tag\": \"using_where\"}}]}}]"
    );
}

fn main() -> Result<()> {
    // Init logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("invalid RUST_LOG filter")?;
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut args: Vec<String> = env::args().collect();
    let program = args.remove(0);
    let mut flags = DisplayFlags::from_env();
    let mut path: Option<String> = None;
    for a in &args {
        match a.as_str() {
            "--partitions" => flags.show_partitions = true,
            "--extended" => flags.show_filtered = true,
            "-h" | "--help" => { print_usage(&program); return Ok(()); }
            s if s.starts_with('-') => { eprintln!("unknown flag: {}", s); print_usage(&program); std::process::exit(2); }
            s => path = Some(s.to_string()),
        }
    }
    let Some(path) = path else { print_usage(&program); std::process::exit(2); };

    let text = fs::read_to_string(&path).with_context(|| format!("reading plan file '{}'", path))?;
    let steps = load_plan(&text).with_context(|| format!("parsing plan file '{}'", path))?;
    info!(target: "explain::cli", "loaded {} plan steps from '{}' (partitions={}, filtered={})", steps.len(), path, flags.show_partitions, flags.show_filtered);

    let mut explain = TraditionalExplain::new(VecSink::new(), flags);
    explain.send_headers()?;
    for step in &steps {
        step.fill(explain.entry_mut());
        explain.flush_entry()?;
    }
    let sink = explain.into_sink();
    print_explain(&sink.headers, &sink.rows);
    Ok(())
}
