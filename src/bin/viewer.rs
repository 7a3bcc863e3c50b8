use clap::Parser;
use log::warn;
use mandel_julia_viewer::{Cli, PixelsPresenterFactory, RunGuiCommand, ViewerConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let (config, warnings) = match ViewerConfig::from_cli(&cli) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    for warning in &warnings {
        println!("{}", warning);
        warn!("{}", warning);
    }

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), config);

    if let Err(err) = command.execute() {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
