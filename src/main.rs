//! Pillars CLI entrypoint for the Well-Architected review form.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use pillars::{PillarsConfig, QuestionnaireError};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), QuestionnaireError> {
    let config = load_config()?;
    config.validate()?;
    cli::review_form::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`QuestionnaireError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<PillarsConfig, QuestionnaireError> {
    PillarsConfig::load().map_err(|error| QuestionnaireError::Configuration {
        message: error.to_string(),
    })
}
