//! Simple command that prints one or '-n count' UUID strings of the given version

use std::{io, io::Write, process::ExitCode};

use clap::Parser;
use ruuid::{Generator, Version};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Print generated UUIDs")]
struct Cli {
    /// UUID version to generate (4 or 7)
    #[arg(value_name = "VERSION", default_value = "4")]
    uuid_version: Version,

    /// Number of UUIDs to print
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli);

    let mut g: Generator = Generator::default();
    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..cli.count {
        match g.generate(cli.uuid_version) {
            Ok(uuid) => writeln!(buf, "{}", uuid)?,
            Err(err) => {
                buf.flush()?;
                debug!(%err, "cannot generate uuid v{}", cli.uuid_version);
                eprintln!("Error: {}", err);
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    buf.flush()?;

    Ok(ExitCode::SUCCESS)
}
