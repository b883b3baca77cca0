use std::process;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;
use tracing::error;

use nandrun::launcher::ProcessLauncher;
use nandrun::{cli, init_logging, run_apply, run_fields, run_launch, run_validate};

fn main() -> Result<()> {
    let args = cli::parse_args()?;

    if let Some(log_level) = args.command.log_level() {
        init_logging(log_level)?;
    }

    match &args.command {
        cli::Commands::Launch(opts) => {
            let launcher = ProcessLauncher {
                dry_run: opts.dry_run,
            };
            match run_launch(opts, &launcher) {
                Ok(outcome) if outcome.success() => {}
                Ok(_) => process::exit(1),
                Err(e) => {
                    error!("error launching {}: {:#}", opts.executable, e);
                    process::exit(1);
                }
            }
        }
        cli::Commands::Apply(opts) => {
            let launcher = ProcessLauncher {
                dry_run: opts.dry_run,
            };
            match run_apply(opts, &launcher) {
                Ok(outcome) if outcome.success() => {}
                Ok(_) => process::exit(1),
                Err(e) => {
                    error!("error applying {}: {:#}", opts.file, e);
                    process::exit(1);
                }
            }
        }
        cli::Commands::Validate(opts) => run_validate(opts)?,
        cli::Commands::Fields(opts) => run_fields(opts)?,
        cli::Commands::Completions(opts) => {
            let mut cmd = cli::Cli::command();
            generate(opts.shell, &mut cmd, "nandrun", &mut std::io::stdout());
        }
    }

    Ok(())
}
