use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use georel_cli::config::RelateConfig;
use georel_cli::evaluate::evaluate;
use georel_cli::io;
use georel_cli::io::cli::Cli;
use georel_cli::io::output::RelateOutput;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RelateConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed RelateConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {:?}", args.output_folder)
        })?;
    }

    let query_set = io::read_query_set(args.input_file.as_path())?;
    let ctx = config.spatial_context();
    let results = evaluate(&query_set, &ctx)?;

    let output = RelateOutput {
        name: query_set.name,
        results,
        config,
    };
    let output_path = args
        .output_folder
        .join(format!("relations_{input_file_stem}.json"));
    io::write_json(&output, output_path.as_path())
}
