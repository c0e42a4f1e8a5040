//! colorextract - print the dominant colors of an image
//!
//! ```text
//! colorextract photo.jpg
//! colorextract photo.jpg --fine-bits 4 --keep-background --json
//! colorextract photo.jpg --quantized photo-quantized.png
//! ```
//!
//! Set `RUST_LOG=debug` for per-stage summaries.

use anyhow::{Context, Result};
use clap::Parser;
use colorextract::color::{
    BackgroundPolicy, ExtractOptions, Extraction, NamedColor, ReferencePalette, default_workers,
    extract_dominant_colors,
};
use colorextract::{Color, ImageFormat};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "colorextract", version)]
#[command(about = "Extract and name the dominant colors of an image")]
struct Args {
    /// Input image (PNG, JPEG or binary PPM/PGM)
    input: PathBuf,

    /// Bits per channel for the histogram
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=8))]
    fine_bits: u8,

    /// Bits per channel for clustering peaks
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=8))]
    coarse_bits: u8,

    /// Keep the most frequent color instead of treating it as background
    #[arg(long)]
    keep_background: bool,

    /// Histogram threads [default: number of CPUs]
    #[arg(long)]
    workers: Option<usize>,

    /// Write the quantized image here (format from the extension)
    #[arg(long, value_name = "OUT")]
    quantized: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn options(&self) -> ExtractOptions {
        ExtractOptions {
            fine_bits: self.fine_bits,
            coarse_bits: self.coarse_bits,
            background: if self.keep_background {
                BackgroundPolicy::Keep
            } else {
                BackgroundPolicy::RemoveMostFrequent
            },
            workers: self.workers.unwrap_or_else(default_workers),
        }
    }
}

#[derive(Serialize)]
struct PeakReport {
    color: Color,
    count: u64,
    relative_frequency: f64,
    background: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    threshold: f64,
    peaks: Vec<PeakReport>,
    colors: &'a [NamedColor],
    elapsed_ms: u128,
}

/// Peaks in histogram order, including the one removed as background.
fn all_peaks(extraction: &Extraction) -> Vec<PeakReport> {
    let total = extraction.histogram.total() as f64;
    let background = extraction.peaks.background().map(|p| p.color);
    extraction
        .histogram
        .iter()
        .filter(|&(color, _)| extraction.peaks.contains(color) || background == Some(color))
        .map(|(color, count)| PeakReport {
            color,
            count,
            relative_frequency: count as f64 / total,
            background: background == Some(color),
        })
        .collect()
}

fn percent(fraction: f64) -> u32 {
    (fraction * 100.0) as u32
}

fn write_text<W: Write>(out: &mut W, extraction: &Extraction, elapsed_ms: u128) -> io::Result<()> {
    writeln!(out, "Threshold: {}%", percent(extraction.threshold()))?;
    writeln!(out)?;
    for peak in all_peaks(extraction) {
        writeln!(
            out,
            "peak: {}: relative frequency {}%",
            peak.color,
            percent(peak.relative_frequency)
        )?;
    }
    writeln!(out)?;
    for named in &extraction.colors {
        writeln!(out, "{} {}", named.color, named.name)?;
    }
    writeln!(out, "done in {} ms", elapsed_ms)
}

fn write_json<W: Write>(out: &mut W, extraction: &Extraction, elapsed_ms: u128) -> Result<()> {
    let report = Report {
        threshold: extraction.threshold(),
        peaks: all_peaks(extraction),
        colors: &extraction.colors,
        elapsed_ms,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let timer = Instant::now();

    let palette = ReferencePalette::builtin()?;

    let grid = colorextract::io::read_image(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let options = args.options();
    log::debug!("options: {:?}", options);

    let extraction = extract_dominant_colors(&grid, palette, &options)?;

    if let Some(path) = &args.quantized {
        colorextract::io::write_image(&extraction.quantized, path, ImageFormat::Unknown)
            .with_context(|| format!("cannot write {}", path.display()))?;
    }

    let elapsed_ms = timer.elapsed().as_millis();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        write_json(&mut out, &extraction, elapsed_ms)
    } else {
        write_text(&mut out, &extraction, elapsed_ms).map_err(Into::into)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
