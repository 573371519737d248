use anyhow::Result;
use bookport_config::Config;
use bookport_engine::{convert_manuscript, io, rules::RuleSet};
use std::{env, path::PathBuf, process};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Determine manuscript paths from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let source_path;
    let output_path;
    let from_config;

    if args.len() == 3 {
        // Explicit source and output directories
        source_path = PathBuf::from(&args[1]);
        output_path = PathBuf::from(&args[2]);
        from_config = false;
    } else if args.len() == 1 {
        // No CLI arguments - try config file, falling back to defaults
        match Config::load() {
            Ok(Some(config)) => {
                source_path = config.source_path;
                output_path = config.output_path;
                from_config = true;
            }
            Ok(None) => {
                let defaults = Config::default();
                source_path = defaults.source_path;
                output_path = defaults.output_path;
                from_config = false;
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} [source-dir output-dir]", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [source-dir output-dir]", args[0]);
        eprintln!("Or create a config file at {}", config_path.display());
        process::exit(1);
    };

    // Validate the manuscript directory before converting anything
    if let Err(e) = io::validate_source_dir(&source_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Source path '{}'{} is invalid: {e}",
            source_path.display(),
            source
        );
        process::exit(1);
    }

    convert_manuscript(&source_path, &output_path, &RuleSet::default())?;

    Ok(())
}
