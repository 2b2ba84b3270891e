use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codec::CodecLimits;
use tools::{decode_update_json, encode_update_json, inspect_update, InspectReport};

#[derive(Parser)]
#[command(
    name = "paradrop-tools",
    version,
    about = "paradrop inspection and decoding tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode an update buffer into structured JSON.
    Decode {
        /// Path to the update bytes.
        update_file: PathBuf,
    },
    /// Encode a JSON update description into wire bytes.
    Encode {
        /// Path to the update JSON.
        json_file: PathBuf,
        /// Destination for the encoded bytes.
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Summarize buffer structure without printing values.
    Inspect {
        /// Path to the update bytes.
        update_file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Decode { update_file } => {
            let bytes = fs::read(&update_file)
                .with_context(|| format!("read update {}", update_file.display()))?;
            let output = decode_update_json(&bytes, &CodecLimits::default())?;
            let json = serde_json::to_string_pretty(&output).context("serialize json")?;
            println!("{json}");
        }
        Command::Encode { json_file, output } => {
            let contents = fs::read_to_string(&json_file)
                .with_context(|| format!("read json {}", json_file.display()))?;
            let bytes = encode_update_json(&contents)?;
            fs::write(&output, &bytes)
                .with_context(|| format!("write update {}", output.display()))?;
            println!("wrote {} bytes to {}", bytes.len(), output.display());
        }
        Command::Inspect { update_file } => {
            let bytes = fs::read(&update_file)
                .with_context(|| format!("read update {}", update_file.display()))?;
            let report = inspect_update(&bytes)?;
            print_inspect_report(&report);
        }
    }
    Ok(())
}

fn print_inspect_report(report: &InspectReport) {
    println!("total: {} bytes", report.total_bytes);
    println!("continuous entries: {}", report.continuous_entries);
    println!("discrete entries: {}", report.discrete_entries);
    println!("expected from counts: {} bytes", report.expected_bytes);
    if report.trailing_bytes > 0 {
        println!(
            "trailing: {} bytes past the declared entries",
            report.trailing_bytes
        );
    }
}
