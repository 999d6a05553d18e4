mod app;
mod command;
mod config;
mod error;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use simplelog::{Config, WriteLogger};
use tokio::io::BufReader;

use crate::config::{DemoArgs, DemoConfig};
use crate::error::DemoError;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), DemoError> {
    let config = DemoConfig::from(DemoArgs::parse());

    // Frames go to stdout, so logs go to a file
    let log_file = File::create(&config.log_file)?;
    WriteLogger::init(config.log_level, Config::default(), log_file)?;
    info!(
        "widgetkit-demo starting: delay {:?}, reduced motion {}",
        config.delay, config.reduced_motion
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    app::run(config, stdin, &mut stdout).await
}
