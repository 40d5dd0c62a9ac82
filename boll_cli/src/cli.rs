use std::path::PathBuf;

use boll_core::{MaType, PriceSource};
use clap::{Parser, ValueEnum};

/// boll - compute Bollinger Bands over OHLCV candles
#[derive(Parser, Debug)]
#[command(name = "boll")]
#[command(author, version, about)]
#[command(after_help = "EXAMPLES:\n  \
    # Bands over a CSV file with default parameters\n  \
    boll --input candles.csv\n\n  \
    # 10-bar bands on highs, shifted 3 bars forward, as CSV\n  \
    boll --input candles.csv --length 10 --source high --offset 3 --format csv\n\n  \
    # Generated sample data, single timestamp lookup\n  \
    boll --sample 100 --seed 7 --at 1600000000000")]
pub struct Cli {
    /// CSV file with timestamp,open,high,low,close[,volume] columns
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Number of generated candles when no input file is given
    #[arg(long, value_name = "COUNT", default_value_t = 250)]
    pub sample: usize,

    /// Seed for generated candles
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// JSON file with indicator parameters
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Moving average window length
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Standard deviation multiplier
    #[arg(short, long)]
    pub multiplier: Option<f64>,

    /// Bars to shift the bands (negative shifts toward the past)
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<i64>,

    /// Price field to compute over (open, high, low, close)
    #[arg(short, long)]
    pub source: Option<PriceSource>,

    /// Moving average kind
    #[arg(long)]
    pub ma_type: Option<MaType>,

    /// Only print the band values at this timestamp
    #[arg(long, value_name = "TIMESTAMP")]
    pub at: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Decimal places in table and CSV output
    #[arg(short, long, default_value_t = boll_core::DEFAULT_DECIMALS)]
    pub decimals: usize,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["boll"]).unwrap();
        assert!(cli.input.is_none());
        assert_eq!(cli.sample, 250);
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.decimals, 2);
        assert!(cli.length.is_none() && cli.offset.is_none());
    }

    #[test]
    fn test_parameter_flags() {
        let cli = Cli::try_parse_from([
            "boll", "-i", "a.csv", "--length", "10", "-m", "1.5", "--offset", "-3", "--source",
            "high", "--ma-type", "SMA", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.length, Some(10));
        assert_eq!(cli.multiplier, Some(1.5));
        assert_eq!(cli.offset, Some(-3));
        assert_eq!(cli.source, Some(PriceSource::High));
        assert_eq!(cli.ma_type, Some(MaType::Sma));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_source() {
        assert!(Cli::try_parse_from(["boll", "--source", "volume"]).is_err());
    }
}
