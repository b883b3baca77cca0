pub mod cli;
pub mod error;
pub mod fields;
pub mod form;
pub mod invocation;
pub mod launcher;
pub mod profile;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{FmtSubscriber, filter::LevelFilter};

use crate::fields::{FILE_DESCRIPTION, FILE_FLAG, FILE_LABEL, FieldSet};
use crate::form::FormState;
use crate::invocation::build_invocation;
use crate::launcher::{LaunchOutcome, Launcher};

pub use error::NandrunError;

pub fn init_logging(log_level: cli::LogLevel) -> Result<()> {
    let filter = match log_level {
        cli::LogLevel::Trace => LevelFilter::TRACE,
        cli::LogLevel::Debug => LevelFilter::DEBUG,
        cli::LogLevel::Info => LevelFilter::INFO,
        cli::LogLevel::Warn => LevelFilter::WARN,
        cli::LogLevel::Error => LevelFilter::ERROR,
    };

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(filter).finish(),
    )
    .context("failed to set global default tracing subscriber")
}

/// Reports the outcome of one launch to the user, once.
pub fn report_outcome(executable: &str, outcome: &LaunchOutcome) {
    match outcome {
        LaunchOutcome::Success => info!("{} ran successfully.", executable),
        LaunchOutcome::ExecutableNotFound => tracing::error!("{} not found.", executable),
        LaunchOutcome::Failed(status) => {
            tracing::error!("{} execution failed: {}", executable, status);
        }
    }
}

/// Assembles an invocation from command-line field values and launches it.
pub fn run_launch(opts: &cli::LaunchArgs, launcher: &dyn Launcher) -> Result<LaunchOutcome> {
    let fields = FieldSet::standard();

    let mut form = FormState::new();
    for (flag, value) in opts.field_values() {
        form.set_value(flag, value);
    }
    if let Some(path) = &opts.input_file {
        form.set_input_file(path.as_str());
    }

    let invocation = build_invocation(&fields, &form, &opts.executable);
    let outcome = launcher
        .launch(&invocation)
        .with_context(|| format!("failed to launch {}", invocation.program))?;

    report_outcome(&invocation.program, &outcome);
    Ok(outcome)
}

/// Loads and validates the given profile, then launches its invocation.
pub fn run_apply(opts: &cli::ApplyArgs, launcher: &dyn Launcher) -> Result<LaunchOutcome> {
    let profile = profile::load_profile(opts.file.as_path())
        .with_context(|| format!("failed to load profile from {}", opts.file))?;
    profile.validate().context("profile validation failed")?;

    let invocation = build_invocation(
        &profile.field_set(),
        &profile.form_state(),
        &profile.executable,
    );
    let outcome = launcher
        .launch(&invocation)
        .with_context(|| format!("failed to launch {}", invocation.program))?;

    report_outcome(&invocation.program, &outcome);
    Ok(outcome)
}

pub fn run_validate(opts: &cli::ValidateArgs) -> Result<()> {
    let profile = profile::load_profile(opts.file.as_path())?;
    profile.validate().context("profile validation failed")?;
    info!("validation successful:\n{:#?}", profile);
    Ok(())
}

/// Prints the chosen field registry, one line per field, the input file last.
pub fn run_fields(opts: &cli::FieldsArgs) -> Result<()> {
    let fields = match opts.set {
        cli::FieldSetChoice::Standard => FieldSet::standard(),
        cli::FieldSetChoice::Bare => FieldSet::bare(),
    };

    for spec in fields.iter() {
        if spec.description.is_empty() {
            println!("{:4} {}", spec.flag, spec.label);
        } else {
            println!("{:4} {} - {}", spec.flag, spec.label, spec.description);
        }
    }
    println!("{:4} {} - {}", FILE_FLAG, FILE_LABEL, FILE_DESCRIPTION);

    Ok(())
}
