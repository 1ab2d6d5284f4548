use anyhow::Context;
use contest_io::Scanner;
use log::debug;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    env_logger::try_init().unwrap_or_default();

    let mut scanner = Scanner::from_stdin();
    let x = scanner
        .integer()
        .context("Failed to read the first integer")?;
    let y = scanner
        .integer()
        .context("Failed to read the second integer")?;
    debug!("operands x={x} y={y}");

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", x - y).context("Failed to write the result")?;
    stdout.flush().context("Failed to flush standard output")?;

    Ok(())
}
