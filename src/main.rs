//! Entry point for ccwb-setup.
use std::process::ExitCode;

use ccwb_setup::{
    cli::{self, SetupArgs, SetupExit},
    lib::telemetry,
};
use clap::Parser;

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), SetupExit> {
    telemetry::init_tracing().map_err(SetupExit::from_error)?;
    let args = SetupArgs::parse();
    let layout = cli::resolve_layout(args.prefix_override).map_err(SetupExit::from_error)?;
    cli::run_bootstrap(&layout).map(|_report| ())
}
