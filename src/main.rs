use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use studentdb::CLI;

/// Interactive student record manager.
#[derive(Parser)]
#[command(name = "studentdb", version, about)]
struct Args {
    /// Path to the data file holding the roster.
    #[arg(short, long, default_value = "students.txt")]
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut cli = CLI::new(args.file);
    cli.run().context("terminal I/O failed")?;
    Ok(())
}
