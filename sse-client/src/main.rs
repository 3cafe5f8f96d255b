use anyhow::Result;
use clap::Parser;
use colored::*;
use std::time::Duration;

mod check;
mod sse_client;

use check::{check_sequence, EXPECTED_FRAMES};
use sse_client::{Connection, Frame};

#[derive(Parser)]
#[command(name = "sse-client")]
#[command(about = "Consumes the /sse event stream and checks the frame sequence")]
struct Cli {
    /// Base URL of the server (e.g., http://localhost:4000)
    #[arg(long, default_value = "http://localhost:4000")]
    base_url: String,

    /// Seconds to wait for each frame before giving up
    #[arg(long, default_value_t = 5)]
    timeout_secs: u64,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    println!("{} Connecting to {}/sse", "→".blue(), cli.base_url);
    let mut connection = Connection::establish(&cli.base_url)?;
    let timeout = Duration::from_secs(cli.timeout_secs);

    let mut frames = Vec::with_capacity(EXPECTED_FRAMES);
    while let Some(frame) = connection.next_frame(timeout).await? {
        print_frame(&frame);
        let end = frame.event_type == "end";
        frames.push(frame);
        if end {
            break;
        }
    }

    let problems = check_sequence(&frames);
    if problems.is_empty() {
        println!(
            "\n{} Received all {} frames",
            "✓".green(),
            frames.len()
        );
        Ok(())
    } else {
        for problem in &problems {
            println!("{} {}", "✗".red(), problem);
        }
        anyhow::bail!("{} problem(s) with the received stream", problems.len())
    }
}

fn print_frame(frame: &Frame) {
    let label = match frame.event_type.as_str() {
        "error" => frame.event_type.red().bold(),
        "end" => frame.event_type.yellow().bold(),
        _ => frame.event_type.cyan(),
    };
    println!(
        "[{:>6.2}s] {:<8} {}",
        frame.elapsed.as_secs_f64(),
        label,
        frame.data
    );
}
