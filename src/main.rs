use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use rfxcom_lib::Message;
use rfxcom_rs::frames::{FrameReport, parse_hex_frame};
use rfxcom_rs::logging::setup_logging;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, info};

/// Decodes RFXCOM frames given as hex and prints the typed message and its channel states.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Frames to decode. Read one frame per line from stdin when none are given.
    frames: Vec<String>,
    /// Print one JSON object per frame instead of text.
    #[arg(long)]
    json: bool,
    /// Optional path to a file to write logs to, in addition to the console.
    #[arg(short, long)]
    log_file: Option<PathBuf>,
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = setup_logging(cli.log_file.as_deref(), &cli.verbose)?;

    let inputs: Box<dyn Iterator<Item = io::Result<String>>> = if cli.frames.is_empty() {
        debug!("Reading frames from stdin");
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(cli.frames.into_iter().map(Ok))
    };

    let mut decoded = 0usize;
    let mut failed = 0usize;
    for line in inputs {
        let line = line.context("Failed to read frame from stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match decode_frame(line) {
            Ok(report) => {
                decoded += 1;
                print_report(&report, cli.json)?;
            }
            Err(e) => {
                failed += 1;
                error!("Failed to decode '{}': {:#}", line, e);
            }
        }
    }

    info!("Decoded {} frame(s), {} failed", decoded, failed);
    if failed > 0 {
        process::exit(1);
    }
    Ok(())
}

fn decode_frame(line: &str) -> Result<FrameReport> {
    let raw = parse_hex_frame(line)?;
    let message = Message::decode(&raw)?;
    debug!("{}", message);
    Ok(FrameReport::new(&raw, message))
}

fn print_report(report: &FrameReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report).context("Failed to serialize report")?);
        return Ok(());
    }

    println!("{} [{}]", report.packet_type, report.raw);
    println!("  {}", report.message);
    println!("  Device id: {}", report.device_id);
    for (channel, state) in &report.channels {
        println!("  {}: {}", channel, state);
    }
    Ok(())
}
