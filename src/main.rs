use anyhow::{Context, Result};
use brightnorm::cli::Args;
use brightnorm::error::NormalizeError;
use brightnorm::pipeline::{self, RunConfig, Stage};
use brightnorm::report;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(all_passed) => {
            if args.strict && !all_passed {
                return ExitCode::from(2);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Some(cause) = e.downcast_ref::<NormalizeError>() {
                tracing::error!(kind = %cause.kind(), path = ?cause.path(), "run aborted");
            }
            println!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

/// User-facing error message, tagged with the error kind when known
fn error_line(err: &anyhow::Error) -> String {
    match err.downcast_ref::<NormalizeError>() {
        Some(cause) => format!("Error ({}): {err:#}", cause.kind()),
        None => format!("Error: {err:#}"),
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("brightnorm={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Run one batch and print the report; returns whether every image passed
fn run(args: &Args) -> Result<bool> {
    let config = RunConfig::new(args.input(), args.output())?;

    let report = pipeline::run(&config, on_stage).with_context(|| {
        format!(
            "Normalization of {} failed",
            config.input_dir().display()
        )
    })?;

    report::print_global_average(report.global_average);
    report::print_report(&report, config.output_dir());
    println!();
    println!("Normalization completed successfully!");

    Ok(report.all_passed())
}

fn on_stage(stage: &Stage) {
    match stage {
        Stage::Normalized { index, total, .. } => {
            tracing::debug!(progress = stage.percent(), "normalized {index}/{total}");
        }
        _ => tracing::info!(progress = stage.percent(), "{}", stage_label(stage)),
    }
}

fn stage_label(stage: &Stage) -> &'static str {
    match stage {
        Stage::Loaded { .. } => "images loaded",
        Stage::GlobalAverage(_) => "global average computed",
        Stage::Normalized { .. } => "image normalized",
        Stage::Written { .. } => "normalized images saved",
        Stage::Validated { .. } => "validation finished",
    }
}
