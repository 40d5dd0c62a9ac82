mod cli;
mod io;
mod logging;

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

use boll_core::common::time::parse_timestamp;
use boll_core::{
    bands_at_timestamp, calculate_bollinger_bands, generate_sample_data, BandPoint, BollConfig,
    BollError, Candle, ErrCode,
};
use clap::Parser;
use tracing::info;

use crate::cli::{Cli, OutputFormat};

/// Fixed start of the generated sample series (2024-01-01 00:00:00 UTC)
const SAMPLE_BASE_TIME: i64 = 1_704_067_200_000;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let candles = load_input(&cli)?;
    let config = build_config(&cli)?;
    info!(
        candles = candles.len(),
        length = config.length,
        multiplier = config.std_dev_multiplier,
        offset = config.offset,
        source = %config.source,
        "computing bollinger bands"
    );

    let points = calculate_bollinger_bands(&candles, &config)?;

    let selected: Vec<BandPoint> = match &cli.at {
        Some(at) => {
            let ts = parse_timestamp(at)?;
            let point = bands_at_timestamp(&points, ts).ok_or_else(|| {
                BollError::new(format!("no candle at timestamp {}", at), ErrCode::SrcDataNotFound)
            })?;
            vec![*point]
        }
        None => points,
    };

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout().lock()),
    };
    match cli.format {
        OutputFormat::Table => io::write_table(&mut out, &selected, cli.decimals)?,
        OutputFormat::Csv => io::write_csv(&mut out, &selected, cli.decimals)?,
        OutputFormat::Json => io::write_json(&mut out, &selected)?,
    }
    out.flush()?;

    Ok(())
}

fn load_input(cli: &Cli) -> Result<Vec<Candle>, Box<dyn Error>> {
    let candles = match &cli.input {
        Some(path) => {
            info!("Processing file: {:?}", path);
            io::load_candles(path)?
        }
        None => {
            info!(count = cli.sample, seed = cli.seed, "using generated sample data");
            generate_sample_data(cli.sample, SAMPLE_BASE_TIME, cli.seed)
        }
    };

    if candles.is_empty() && cli.at.is_some() {
        return Err(BollError::new("no candles to look up", ErrCode::NoData).into());
    }
    Ok(candles)
}

/// Config file first, then individual flags on top
fn build_config(cli: &Cli) -> Result<BollConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => BollConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => BollConfig::default(),
    };

    if let Some(length) = cli.length {
        config = config.with_length(length);
    }
    if let Some(multiplier) = cli.multiplier {
        config = config.with_std_dev_multiplier(multiplier);
    }
    if let Some(offset) = cli.offset {
        config = config.with_offset(offset);
    }
    if let Some(source) = cli.source {
        config = config.with_source(source);
    }
    if let Some(ma_type) = cli.ma_type {
        config = config.with_ma_type(ma_type);
    }

    config.validate()?;
    Ok(config)
}
