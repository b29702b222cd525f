extern crate env_logger;
extern crate fingerprint_identity;
extern crate serde_json;

pub mod options;

use clap::Parser;
use fingerprint_identity::{
    build_spoofing_script_with_config, decode_validated, generate_fingerprint,
    generate_fingerprint_seeded, regenerate_noise_os, validate_fingerprint, Fingerprint,
    GenerationError, ScriptConfig, ValidationResult,
};
use options::{Cli, Commands};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Failures that stop a command.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("invalid fingerprint: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl From<ValidationResult> for CliError {
    fn from(result: ValidationResult) -> Self {
        CliError::Invalid(result.messages())
    }
}

/// Read the whole input file, or standard input when no file is given.
async fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    let text = match file {
        Some(path) => tokio::fs::read_to_string(path).await?,
        _ => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            text
        }
    };

    Ok(text)
}

/// Write to the output file, or standard output when no file is given.
async fn write_output(output: Option<PathBuf>, content: String) -> Result<(), CliError> {
    match output {
        Some(path) => {
            tokio::fs::write(&path, content.as_bytes()).await?;
            log::info!("wrote {}", path.display());
        }
        _ => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(content.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}

fn encode(fingerprint: &Fingerprint, pretty: bool) -> Result<String, CliError> {
    Ok(if pretty {
        fingerprint.to_json_pretty()?
    } else {
        fingerprint.to_json()?
    })
}

async fn run(command: Commands) -> Result<ExitCode, CliError> {
    match command {
        Commands::GENERATE {
            tier,
            seed,
            pretty,
            output,
        } => {
            let fingerprint = match seed {
                Some(seed) => generate_fingerprint_seeded(tier, seed),
                _ => generate_fingerprint(tier)?,
            };

            log::info!("generated {} fingerprint", fingerprint.spoof_tier);

            write_output(output, encode(&fingerprint, pretty)?).await?;
        }
        Commands::VALIDATE { file, tier_check } => {
            let text = read_input(file.as_deref()).await?;
            let result = fingerprint_identity::validate_fingerprint_json(&text);

            let tier_violations = if tier_check && result.valid {
                Fingerprint::from_json(&text)?.tier_violations()
            } else {
                Vec::new()
            };

            let valid = result.valid && tier_violations.is_empty();

            let report = json!({
                "valid": valid,
                "errors": result.messages(),
                "tierViolations": tier_violations,
            });

            write_output(None, serde_json::to_string_pretty(&report)?).await?;

            if !valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::CLONE {
            file,
            pretty,
            output,
        } => {
            let text = read_input(file.as_deref()).await?;
            let original = decode_validated(&text)?;
            let clone = regenerate_noise_os(&original)?;

            let result = validate_fingerprint(&clone);

            if !result.valid {
                return Err(result.into());
            }

            log::info!(
                "cloned {} fingerprint, canvas noise {} -> {}",
                clone.spoof_tier,
                original.canvas_noise_level,
                clone.canvas_noise_level
            );

            write_output(output, encode(&clone, pretty)?).await?;
        }
        Commands::SCRIPT { file, skip, output } => {
            let text = read_input(file.as_deref()).await?;
            let fingerprint = decode_validated(&text)?;

            if !fingerprint.has_valid_tier_characteristics() {
                log::warn!(
                    "fingerprint does not fit the {} tier: {}",
                    fingerprint.spoof_tier,
                    fingerprint.tier_violations().join(", ")
                );
            }

            let config = skip
                .into_iter()
                .fold(ScriptConfig::new(), |config, section| config.with_skip(section));

            let script = build_spoofing_script_with_config(&fingerprint, &config);

            log::info!("built {} byte script", script.len());

            write_output(output, script).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        use env_logger::Env;
        let env = Env::default()
            .filter_or("RUST_LOG", "info")
            .write_style_or("RUST_LOG_STYLE", "always");

        env_logger::init_from_env(env);
    }

    match run(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
