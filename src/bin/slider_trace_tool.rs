use carousel_rs::api::{SliderTrace, replay_trace};
use carousel_rs::telemetry::init_default_tracing;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: slider_trace_tool replay --input <path> [--output <path>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Returns whether every expectation in the trace held.
fn run() -> Result<bool, String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let trace = SliderTrace::from_json_str(&raw).map_err(|err| err.to_string())?;
    let report = replay_trace(&trace).map_err(|err| err.to_string())?;

    for mismatch in &report.mismatches {
        eprintln!(
            "step {}: `{}` expected {} but observed {}",
            mismatch.step, mismatch.field, mismatch.expected, mismatch.observed
        );
    }
    match &args.output {
        Some(path) => write_json(path, &report)?,
        None => println!(
            "{}: {} steps, {} frames, {} mismatches",
            report.trace_name,
            report.observations.len(),
            report.frames_rendered,
            report.mismatches.len()
        ),
    }
    Ok(report.passed())
}

fn write_json<T: Serialize>(path: &PathBuf, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    fs::write(path, payload).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("replay") => {}
        _ => return Err(USAGE.to_owned()),
    }

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| "missing --input".to_owned())?;
    Ok(CliArgs { input, output })
}
