//! CLI tool for progress-charts - prints the chart configuration as JSON
//!
//! Usage:
//!   progress_chart_cli <progress> [--goal-id ID] [-o out.json]
//!   progress_chart_cli --tasks DONE/TOTAL [-o out.json]
//!
//! `<progress>` is read like a `data-progress` attribute; a value with no
//! numeric prefix prints `null` as the data point. `--goal-id` is only echoed
//! to stderr: the goal never changes the chart.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use progress_charts::progress::{parse_float, parse_task_counts, progress_percent};
use progress_charts::{ChartConfig, ChartStyle};

const USAGE: &str = "\
Usage: progress_chart_cli <progress> [--goal-id ID] [-o output.json]
       progress_chart_cli --tasks DONE/TOTAL [-o output.json]

Options:
  --goal-id ID        informational; echoed to stderr, does not change the output
  --tasks DONE/TOTAL  plot DONE / TOTAL * 100 (0 when TOTAL is 0)
  -o FILE             write the JSON to FILE instead of stdout";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut progress: Option<f64> = None;
    let mut goal_id: Option<String> = None;
    let mut output_path: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" => output_path = Some(value_for(&mut iter, "-o")),
            "--goal-id" => goal_id = Some(value_for(&mut iter, "--goal-id")),
            "--tasks" => {
                let raw = value_for(&mut iter, "--tasks");
                let Some((done, total)) = parse_task_counts(&raw) else {
                    eprintln!("Error: --tasks expects DONE/TOTAL, got {raw:?}");
                    std::process::exit(1);
                };
                progress = Some(progress_percent(done, total));
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            raw => progress = Some(parse_float(raw)),
        }
    }

    let Some(progress) = progress else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    if progress.is_nan() {
        eprintln!("Warning: progress is not a number, data point will be null");
    }
    if let Some(id) = &goal_id {
        eprintln!("Goal: {id}");
    }

    let config = ChartConfig::progress_bar(progress, &ChartStyle::default());
    let json = match config.to_json_pretty() {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

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

fn value_for<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> String {
    match iter.next() {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {flag} needs a value\n{USAGE}");
            std::process::exit(1);
        }
    }
}
