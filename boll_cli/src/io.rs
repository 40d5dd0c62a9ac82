use std::error::Error;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use boll_core::common::time::{format_timestamp, parse_timestamp};
use boll_core::{format_band_value, BandPoint, BollError, Candle, ErrCode};
use csv::{ReaderBuilder, StringRecord, Writer};
use tracing::{debug, warn};

pub fn load_candles(path: &Path) -> Result<Vec<Candle>, Box<dyn Error>> {
    let file = File::open(path)?;
    let candles = read_candles(file)?;
    debug!(path = %path.display(), count = candles.len(), "loaded candles");
    Ok(candles)
}

/// Read candles from CSV with a header row. Rows come back sorted by timestamp.
pub fn read_candles<R: Read>(reader: R) -> Result<Vec<Candle>, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut candles = Vec::new();

    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        candles.push(parse_csv_record(&record, line + 2)?);
    }

    if !candles.windows(2).all(|w| w[0].timestamp <= w[1].timestamp) {
        warn!("candles are not in timestamp order, sorting");
        candles.sort_by_key(|c| c.timestamp);
    }

    Ok(candles)
}

fn parse_csv_record(record: &StringRecord, line: usize) -> Result<Candle, BollError> {
    if record.len() < 5 {
        return Err(BollError::new(
            format!("line {}: expected at least 5 columns, got {}", line, record.len()),
            ErrCode::SrcDataFormatError,
        ));
    }

    let field = |idx: usize, name: &str| -> Result<f64, BollError> {
        record[idx].parse::<f64>().map_err(|e| {
            BollError::new(
                format!("line {}: invalid {} \"{}\": {}", line, name, &record[idx], e),
                ErrCode::SrcDataFormatError,
            )
        })
    };

    let volume = match record.get(5) {
        Some(v) if !v.is_empty() => field(5, "volume")?,
        _ => 0.0,
    };
    if volume < 0.0 {
        return Err(BollError::new(
            format!("line {}: negative volume {}", line, volume),
            ErrCode::KlDataInvalid,
        ));
    }

    Ok(Candle::new(
        parse_timestamp(&record[0])?,
        field(1, "open")?,
        field(2, "high")?,
        field(3, "low")?,
        field(4, "close")?,
        volume,
    ))
}

pub fn write_table<W: Write>(out: &mut W, points: &[BandPoint], decimals: usize) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<20} {:>12} {:>12} {:>12} {:>12}",
        "time", "basis", "upper", "lower", "std_dev"
    )?;
    for p in points {
        writeln!(
            out,
            "{:<20} {:>12} {:>12} {:>12} {:>12}",
            format_timestamp(p.timestamp),
            format_band_value(p.basis, decimals),
            format_band_value(p.upper, decimals),
            format_band_value(p.lower, decimals),
            format_band_value(p.std_dev, decimals),
        )?;
    }
    Ok(())
}

/// Missing values are written as empty cells
pub fn write_csv<W: Write>(out: W, points: &[BandPoint], decimals: usize) -> Result<(), Box<dyn Error>> {
    let cell = |v: Option<f64>| v.map(|v| format!("{:.*}", decimals, v)).unwrap_or_default();

    let mut wtr = Writer::from_writer(out);
    wtr.write_record(["timestamp", "basis", "upper", "lower", "std_dev"])?;
    for p in points {
        wtr.write_record([
            p.timestamp.to_string(),
            cell(p.basis),
            cell(p.upper),
            cell(p.lower),
            cell(p.std_dev),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut out: W, points: &[BandPoint]) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut out, points)?;
    writeln!(out)?;
    Ok(())
}
