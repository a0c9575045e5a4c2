use std::time::{SystemTime, UNIX_EPOCH};

use neurofield::{window, FieldConfig, ViewerError};

const USAGE: &str = "usage: neurofield [--config <path.json>] [--seed <n>]";

#[derive(Debug)]
struct Args {
    config: FieldConfig,
    seed: u64,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, ViewerError> {
    let mut config = FieldConfig::default();
    let mut seed = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| ViewerError::Usage(USAGE.to_string()))?;
                config = FieldConfig::load(&path)?;
                log::info!("Loaded config from {}", path);
            }
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| ViewerError::Usage(USAGE.to_string()))?;
                let parsed = value
                    .parse()
                    .map_err(|_| ViewerError::Usage(format!("invalid seed '{}'\n{}", value, USAGE)))?;
                seed = Some(parsed);
            }
            "-h" | "--help" => return Err(ViewerError::Usage(USAGE.to_string())),
            other => {
                return Err(ViewerError::Usage(format!(
                    "unknown argument '{}'\n{}",
                    other, USAGE
                )))
            }
        }
    }

    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });

    Ok(Args { config, seed })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = parse_args(std::env::args().skip(1))
        .and_then(|args| window::run(args.config, args.seed));

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
